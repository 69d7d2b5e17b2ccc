use std::env;

use crate::env::{flag_or, parse_or};

/// bcrypt's own default work factor.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

pub const DEFAULT_PWNED_PASSWORDS_URL: &str = "https://api.pwnedpasswords.com";

#[derive(Clone, Debug)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
    /// Query the Pwned Passwords range API instead of the offline list.
    pub pwned_enabled: bool,
    pub pwned_url: String,
    pub pwned_timeout_secs: u64,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            pwned_enabled: false,
            pwned_url: DEFAULT_PWNED_PASSWORDS_URL.to_string(),
            pwned_timeout_secs: 3,
        }
    }
}

impl PasswordConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bcrypt_cost: clamp_cost(parse_or("BCRYPT_COST", defaults.bcrypt_cost)),
            pwned_enabled: flag_or("PWNED_PASSWORDS_ENABLED", defaults.pwned_enabled),
            pwned_url: env::var("PWNED_PASSWORDS_URL").unwrap_or(defaults.pwned_url),
            pwned_timeout_secs: parse_or("PWNED_PASSWORDS_TIMEOUT_SECS", defaults.pwned_timeout_secs),
        }
    }
}

// bcrypt rejects costs outside 4..=31
fn clamp_cost(cost: u32) -> u32 {
    cost.clamp(4, 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PasswordConfig::default();
        assert_eq!(config.bcrypt_cost, 12);
        assert!(!config.pwned_enabled);
        assert_eq!(config.pwned_url, "https://api.pwnedpasswords.com");
    }

    #[test]
    fn test_clamp_cost() {
        assert_eq!(clamp_cost(1), 4);
        assert_eq!(clamp_cost(10), 10);
        assert_eq!(clamp_cost(40), 31);
    }
}
