use std::env;
use std::str::FromStr;

/// Reads and parses `key`, falling back to `default` when unset or malformed.
pub(crate) fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitively.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub(crate) fn flag_or(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|s| parse_flag(&s))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" on "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_parse_or_uses_default_for_unset_key() {
        let value: u16 = parse_or("SCHOOLBOOK_CONFIG_TEST_UNSET_KEY", 42);
        assert_eq!(value, 42);
    }
}
