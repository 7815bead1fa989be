/// 转义 LIKE 模式中的特殊字符，配合 `ESCAPE '\'` 使用
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 大小写无关的子串匹配模式：`%needle%`（needle 已转小写并转义）
///
/// SQLite 的 `LOWER` 只折叠 ASCII，这里保持一致，非 ASCII 字符原样保留。
pub fn contains_pattern(needle: &str) -> String {
    format!("%{}%", escape_like_pattern(&needle.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
        assert_eq!(escape_like_pattern("plain"), "plain");
    }

    #[test]
    fn test_contains_pattern_lowercases() {
        assert_eq!(contains_pattern("Grade 10"), "%grade 10%");
    }

    #[test]
    fn test_contains_pattern_folds_ascii_only() {
        assert_eq!(contains_pattern("ÉSHA"), "%Ésha%");
        assert_eq!(contains_pattern("Zoë"), "%zoë%");
    }
}
