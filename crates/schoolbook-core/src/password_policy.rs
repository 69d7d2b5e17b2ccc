//! Composition rules for user passwords.
//!
//! The default policy accepts 8 to 20 characters containing at least one
//! letter, both an uppercase and a lowercase letter, a number and a symbol.
//! Whether the password has appeared in a breach is checked separately by a
//! [`CompromisedPasswordCheck`](crate::breach::CompromisedPasswordCheck)
//! because that lookup is asynchronous.
//!
//! ```ignore
//! use schoolbook_core::PasswordPolicy;
//!
//! let violations = PasswordPolicy::default().violations("password1");
//! assert!(!violations.is_empty());
//! ```

/// Message reported when a password is found in a breach corpus.
pub const COMPROMISED_MESSAGE: &str =
    "The given password has appeared in a data leak. Please choose a different password.";

#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub require_letters: bool,
    pub require_mixed_case: bool,
    pub require_numbers: bool,
    pub require_symbols: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 20,
            require_letters: true,
            require_mixed_case: true,
            require_numbers: true,
            require_symbols: true,
        }
    }
}

impl PasswordPolicy {
    /// Returns every rule the password breaks, in a stable order.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn violations(&self, password: &str) -> Vec<String> {
        let mut messages = Vec::new();
        let length = password.chars().count();

        if length < self.min_length {
            messages.push(format!(
                "The password must be at least {} characters.",
                self.min_length
            ));
        }

        if length > self.max_length {
            messages.push(format!(
                "The password must not be greater than {} characters.",
                self.max_length
            ));
        }

        if self.require_letters && !password.chars().any(char::is_alphabetic) {
            messages.push("The password must contain at least one letter.".to_string());
        }

        if self.require_mixed_case
            && !(password.chars().any(char::is_uppercase)
                && password.chars().any(char::is_lowercase))
        {
            messages.push(
                "The password must contain at least one uppercase and one lowercase letter."
                    .to_string(),
            );
        }

        if self.require_numbers && !password.chars().any(char::is_numeric) {
            messages.push("The password must contain at least one number.".to_string());
        }

        if self.require_symbols && !password.chars().any(is_symbol) {
            messages.push("The password must contain at least one symbol.".to_string());
        }

        messages
    }
}

// Punctuation, symbols and separators all count.
fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password_passes() {
        let policy = PasswordPolicy::default();
        assert!(policy.violations("Str0ng!Pass").is_empty());
        assert!(policy.violations("Ab1!efgh").is_empty());
    }

    #[test]
    fn test_weak_password_reports_each_rule() {
        let violations = PasswordPolicy::default().violations("password1");

        assert_eq!(
            violations,
            vec![
                "The password must contain at least one uppercase and one lowercase letter."
                    .to_string(),
                "The password must contain at least one symbol.".to_string(),
            ]
        );
    }

    #[test]
    fn test_length_bounds() {
        let policy = PasswordPolicy::default();

        let short = policy.violations("Ab1!");
        assert_eq!(short, vec!["The password must be at least 8 characters."]);

        let long = policy.violations("Abcdefghij1!klmnopqrstu");
        assert_eq!(
            long,
            vec!["The password must not be greater than 20 characters."]
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 8 characters, 14 bytes
        assert!(PasswordPolicy::default().violations("Éééééé1!").is_empty());
    }

    #[test]
    fn test_digits_only() {
        let violations = PasswordPolicy::default().violations("12345678");

        assert!(violations.contains(&"The password must contain at least one letter.".to_string()));
        assert!(violations.contains(&"The password must contain at least one symbol.".to_string()));
        assert!(!violations.contains(&"The password must contain at least one number.".to_string()));
    }

    #[test]
    fn test_space_counts_as_symbol() {
        assert!(PasswordPolicy::default().violations("Pass word1").is_empty());
    }
}
