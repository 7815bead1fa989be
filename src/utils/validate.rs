use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 -]{6,18}[0-9]$").expect("Invalid phone regex"));

const WEAK_PASSWORDS: [&str; 8] = [
    "password",
    "12345678",
    "123456789",
    "qwerty123",
    "admin123",
    "password1",
    "aaryans123",
    "abcd1234",
];

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.len() > 254 || !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_full_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Full name is required");
    }
    if trimmed.chars().count() > 100 {
        return Err("Full name must be at most 100 characters");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone.trim()) {
        return Err("Phone number format is invalid");
    }
    Ok(())
}

/// 联系表单留言：非空，最多 2000 字符
pub fn validate_message(message: &str) -> Result<(), &'static str> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err("Message is required");
    }
    if trimmed.chars().count() > 2000 {
        return Err("Message must be at most 2000 characters");
    }
    Ok(())
}

/// 密码策略：至少 8 位，包含大小写字母与数字，且不在弱密码表中。
/// 返回全部不满足的规则。
pub fn password_policy_violations(password: &str) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if password.chars().count() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }
    if WEAK_PASSWORDS
        .iter()
        .any(|weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }
    errors
}

pub fn validate_password(password: &str) -> Result<(), String> {
    let errors = password_policy_violations(password);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_ok());
        assert!(validate_password("Aaryans2026").is_ok());
    }

    #[test]
    fn test_password_collects_every_violation() {
        let errors = password_policy_violations("abc");
        assert!(errors.contains(&"Password must be at least 8 characters long"));
        assert!(errors.contains(&"Password must contain at least one uppercase letter"));
        assert!(errors.contains(&"Password must contain at least one digit"));
        assert!(!errors.contains(&"Password must contain at least one lowercase letter"));
    }

    #[test]
    fn test_common_password() {
        let errors = password_policy_violations("Password1");
        assert!(errors.contains(&"Password is too common, please choose a stronger password"));
    }

    #[test]
    fn test_email() {
        assert!(validate_email("principal@theaaryans.in").is_ok());
        assert!(validate_email("no-at-sign.in").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_full_name() {
        assert!(validate_full_name("  Riya Sharma ").is_ok());
        assert!(validate_full_name("   ").is_err());
        assert!(validate_full_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("+91 98765 43210").is_ok());
        assert!(validate_phone("0172-2345678").is_ok());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_message() {
        assert!(validate_message("When do admissions open?").is_ok());
        assert!(validate_message("\n\t").is_err());
    }
}
