//! Known-compromised password lookups.
//!
//! Two checkers are provided:
//!
//! - [`CommonPasswordList`]: an offline list of frequently leaked passwords,
//!   used in tests and when remote lookups are disabled.
//! - [`PwnedPasswords`]: the Pwned Passwords k-anonymity range API. Only the
//!   first five hex characters of the SHA-1 digest leave the process.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use sha1::{Digest, Sha1};

pub const PWNED_PASSWORDS_URL: &str = "https://api.pwnedpasswords.com";

#[async_trait]
pub trait CompromisedPasswordCheck: Send + Sync {
    /// `Ok(true)` when the password is known to have leaked.
    ///
    /// Errors mean the lookup could not be completed; callers decide whether
    /// that blocks the request.
    async fn is_compromised(&self, password: &str) -> anyhow::Result<bool>;
}

#[derive(Debug, Clone, Default)]
pub struct CommonPasswordList;

impl CommonPasswordList {
    pub fn contains(&self, password: &str) -> bool {
        let lower = password.to_lowercase();

        if COMMON_PASSWORDS.contains(&lower.as_str()) {
            return true;
        }

        // "Password2024!" is as weak as "password"
        COMMON_PASSWORDS.iter().any(|common| {
            common.len() >= 4
                && lower
                    .strip_prefix(common)
                    .is_some_and(|rest| rest.chars().all(|c| !c.is_alphabetic()))
        })
    }
}

#[async_trait]
impl CompromisedPasswordCheck for CommonPasswordList {
    async fn is_compromised(&self, password: &str) -> anyhow::Result<bool> {
        Ok(self.contains(password))
    }
}

#[derive(Debug, Clone)]
pub struct PwnedPasswords {
    client: reqwest::Client,
    base_url: String,
}

impl PwnedPasswords {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("schoolbook/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build Pwned Passwords client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CompromisedPasswordCheck for PwnedPasswords {
    async fn is_compromised(&self, password: &str) -> anyhow::Result<bool> {
        let digest = sha1_hex(password);
        let (prefix, suffix) = digest.split_at(5);

        let body = self
            .client
            .get(format!("{}/range/{}", self.base_url, prefix))
            .header("Add-Padding", "true")
            .send()
            .await
            .context("Pwned Passwords request failed")?
            .error_for_status()
            .context("Pwned Passwords returned an error status")?
            .text()
            .await
            .context("Failed to read Pwned Passwords response")?;

        Ok(range_contains(&body, suffix))
    }
}

fn sha1_hex(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    format!("{:X}", hasher.finalize())
}

/// Scans a range response (`SUFFIX:COUNT` per line) for `suffix`.
///
/// Padding entries carry a count of zero and never match.
fn range_contains(body: &str, suffix: &str) -> bool {
    body.lines().any(|line| {
        line.trim().split_once(':').is_some_and(|(candidate, count)| {
            candidate.eq_ignore_ascii_case(suffix)
                && count.trim().parse::<u64>().is_ok_and(|n| n > 0)
        })
    })
}

static COMMON_PASSWORDS: &[&str] = &[
    "123456", "password", "12345678", "qwerty", "123456789",
    "12345", "1234", "111111", "1234567", "dragon",
    "123123", "baseball", "abc123", "football", "monkey",
    "letmein", "shadow", "master", "666666", "qwertyuiop",
    "123321", "mustang", "1234567890", "michael", "654321",
    "superman", "1qaz2wsx", "7777777", "121212", "000000",
    "qazwsx", "123qwe", "killer", "trustno1", "jordan",
    "jennifer", "zxcvbnm", "asdfgh", "hunter", "buster",
    "soccer", "harley", "batman", "andrew", "tigger",
    "sunshine", "iloveyou", "charlie", "robert", "thomas",
    "hockey", "ranger", "daniel", "starwars", "george",
    "computer", "michelle", "jessica", "pepper", "freedom",
    "maggie", "ginger", "princess", "joshua", "cheese",
    "amanda", "summer", "ashley", "nicole", "chelsea",
    "matthew", "access", "yankees", "thunder", "taylor",
    "matrix", "passw0rd", "p@ssw0rd", "p@ssword", "pa$$word",
    "admin", "administrator", "root", "welcome", "login",
    "guest", "changeme", "secret", "school", "teacher",
    "student", "qwerty123", "iloveyou1", "football1", "monkey1",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_password_exact_match_ignores_case() {
        let list = CommonPasswordList;
        assert!(list.contains("password"));
        assert!(list.contains("P@ssw0rd"));
        assert!(list.contains("QWERTY123"));
    }

    #[test]
    fn test_common_base_with_non_letter_suffix() {
        let list = CommonPasswordList;
        assert!(list.contains("Password123!"));
        assert!(list.contains("Welcome2024#"));
        assert!(!list.contains("Passwordless1!"));
    }

    #[test]
    fn test_uncommon_password() {
        let list = CommonPasswordList;
        assert!(!list.contains("Str0ng!Pass"));
        assert!(!list.contains("Vx9#kLm2qT"));
    }

    #[tokio::test]
    async fn test_common_list_as_check() {
        let check: &dyn CompromisedPasswordCheck = &CommonPasswordList;
        assert!(check.is_compromised("Secret123!").await.unwrap());
        assert!(!check.is_compromised("Str0ng!Pass").await.unwrap());
    }

    #[test]
    fn test_sha1_hex_is_uppercase() {
        // SHA-1("password")
        assert_eq!(
            sha1_hex("password"),
            "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8"
        );
    }

    #[test]
    fn test_range_contains() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:3861493\r\n\
                    0018A45C4D1DEF81644B54AB7F969B88D65:1\r\n";

        assert!(range_contains(body, "1E4C9B93F3F0682250B6CF8331B7EE68FD8"));
        assert!(range_contains(body, "1e4c9b93f3f0682250b6cf8331b7ee68fd8"));
        assert!(!range_contains(body, "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"));
    }

    #[test]
    fn test_range_padding_entries_do_not_match() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:0";
        assert!(!range_contains(body, "1E4C9B93F3F0682250B6CF8331B7EE68FD8"));
    }

    #[test]
    fn test_pwned_client_trims_base_url() {
        let check = PwnedPasswords::new("https://example.test/", Duration::from_secs(1)).unwrap();
        assert_eq!(check.base_url, "https://example.test");
    }
}
