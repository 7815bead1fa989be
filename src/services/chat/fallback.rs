//! AI 不可用时的关键词回答
//!
//! 按表中顺序匹配，第一条命中的规则决定回答。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ChatConfig;

pub const ADMISSIONS_ANSWER: &str = "Admissions for the new academic session open every \
January for Nursery to Grade 11. Collect the admission form from the school office or \
download it from the Admissions section, then submit it with the birth certificate, \
previous report card, transfer certificate (Grade 2 onwards) and four passport-size \
photographs. Shortlisted students are invited for an interaction or entrance test.";

const FEES_ANSWER: &str = "The fee structure depends on the class and stream. Fees are \
payable quarterly at the school office or online through the parent portal. Sibling and \
merit concessions are available; please visit the accounts office for the current \
schedule.";

const TIMINGS_ANSWER: &str = "School hours are 8:00 AM to 2:30 PM, Monday to Friday, and \
8:00 AM to 12:30 PM on Saturdays. The school office is open from 8:00 AM to 4:00 PM on \
working days.";

const TRANSPORT_ANSWER: &str = "School buses cover all major routes across the city. Each \
bus has a GPS tracker, a female attendant and a trained driver. Route details and charges \
are available from the transport desk.";

const FACILITIES_ANSWER: &str = "THE AARYANS offers smart classrooms, physics, chemistry, \
biology and computer labs, a well-stocked library, an auditorium, a sports complex with \
indoor and outdoor courts, and a dedicated activity wing for music, dance and art.";

const ACADEMICS_ANSWER: &str = "We follow the CBSE curriculum from Nursery to Grade 12. \
Senior secondary students can choose the Science (medical or non-medical), Commerce or \
Humanities stream.";

const LOCATION_ANSWER: &str = "THE AARYANS is located on the main city highway, next to \
the sports stadium. The campus map and directions are in the Contact section of this site.";

struct Rule {
    keywords: &'static [&'static str],
    answer: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &[
            "admission",
            "admissions",
            "enrol",
            "enroll",
            "enrolment",
            "enrollment",
            "apply",
            "application",
        ],
        answer: ADMISSIONS_ANSWER,
    },
    Rule {
        keywords: &["fee", "fees", "payment", "payments", "tuition"],
        answer: FEES_ANSWER,
    },
    Rule {
        keywords: &["timing", "timings", "time", "times", "hours", "schedule"],
        answer: TIMINGS_ANSWER,
    },
    Rule {
        keywords: &[
            "transport",
            "transportation",
            "bus",
            "buses",
            "van",
            "route",
            "routes",
        ],
        answer: TRANSPORT_ANSWER,
    },
    Rule {
        keywords: &[
            "facility",
            "facilities",
            "lab",
            "labs",
            "laboratory",
            "library",
            "sport",
            "sports",
            "playground",
        ],
        answer: FACILITIES_ANSWER,
    },
    Rule {
        keywords: &[
            "curriculum",
            "cbse",
            "stream",
            "streams",
            "subject",
            "subjects",
            "syllabus",
        ],
        answer: ACADEMICS_ANSWER,
    },
    Rule {
        keywords: &["location", "address", "where", "direction", "directions"],
        answer: LOCATION_ANSWER,
    },
];

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("Invalid word regex"));

/// 大小写无关的整词匹配；没有命中时返回带联系方式的通用说明
pub fn fallback_answer(message: &str, contact: &ChatConfig) -> String {
    let lowered = message.to_lowercase();
    let words: Vec<&str> = WORD_RE.find_iter(&lowered).map(|m| m.as_str()).collect();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| words.contains(k)))
        .map(|rule| rule.answer.to_string())
        .unwrap_or_else(|| generic_guidance(contact))
}

pub fn generic_guidance(contact: &ChatConfig) -> String {
    format!(
        "I can help with admissions, fees, school timings, transport, facilities and \
academics. For anything else, please call us at {} or email {} and our team will get \
back to you.",
        contact.school_phone, contact.school_email
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_returns_canned_answer_verbatim() {
        let cfg = ChatConfig::default();
        assert_eq!(
            fallback_answer("How do I get ADMISSION for my son?", &cfg),
            ADMISSIONS_ANSWER
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let cfg = ChatConfig::default();
        // 同时包含 admission 与 fee，admission 在前
        assert_eq!(fallback_answer("admission fee details", &cfg), ADMISSIONS_ANSWER);
        assert_eq!(fallback_answer("What are the fees?", &cfg), FEES_ANSWER);
    }

    #[test]
    fn test_keywords_match_whole_words_only() {
        let cfg = ChatConfig::default();
        // syllabus 含 bus、feedback 含 fee，都不应误判
        assert_eq!(
            fallback_answer("What is the syllabus for grade 9?", &cfg),
            ACADEMICS_ANSWER
        );
        assert_eq!(
            fallback_answer("Which streams are available?", &cfg),
            ACADEMICS_ANSWER
        );
        assert_eq!(
            fallback_answer("Can I give feedback?", &cfg),
            generic_guidance(&cfg)
        );
        assert_eq!(
            fallback_answer("Is there a school bus?", &cfg),
            TRANSPORT_ANSWER
        );
    }

    #[test]
    fn test_unmatched_message_gets_generic_guidance() {
        let cfg = ChatConfig::default();
        let answer = fallback_answer("Hello there", &cfg);
        assert_eq!(answer, generic_guidance(&cfg));
        assert!(answer.contains(&cfg.school_phone));
        assert!(answer.contains(&cfg.school_email));
    }
}
