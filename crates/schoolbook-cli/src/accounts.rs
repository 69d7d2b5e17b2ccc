//! User account creation for operators.
//!
//! Applies the same rules as registration: field validation, password
//! composition and the offline common-password list. Names are trimmed and
//! emails trimmed and lowercased before they are checked or stored.

use anyhow::{Context, bail};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use schoolbook_core::errors::field_errors_from;
use schoolbook_core::password_policy::COMPROMISED_MESSAGE;
use schoolbook_core::{CommonPasswordList, PasswordPolicy, hash_password_with_cost};
use schoolbook_models::RegisterRequest;

fn normalize_name(name: &str) -> Option<String> {
    Some(name.trim().to_string()).filter(|s| !s.is_empty())
}

fn normalize_email(email: &str) -> Option<String> {
    normalize_name(email).map(|s| s.to_lowercase())
}

/// Returns every problem with the proposed account, empty when acceptable.
pub fn account_problems(name: &str, email: &str, password: &str) -> Vec<String> {
    let request = RegisterRequest {
        name: normalize_name(name),
        email: normalize_email(email),
        password: Some(password.to_string()),
    };

    let mut problems: Vec<String> = match request.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => field_errors_from(&errors).into_values().flatten().collect(),
    };

    let violations = PasswordPolicy::default().violations(password);
    if violations.is_empty() && CommonPasswordList.contains(password) {
        problems.push(COMPROMISED_MESSAGE.to_string());
    }
    problems.extend(violations);

    problems
}

/// Inserts a user, failing if the email is already registered.
pub async fn create_user(
    db: &PgPool,
    name: &str,
    email: &str,
    password: &str,
    bcrypt_cost: u32,
) -> anyhow::Result<Uuid> {
    let problems = account_problems(name, email, password);
    if !problems.is_empty() {
        bail!(problems.join("\n"));
    }

    let password_hash = hash_password_with_cost(password, bcrypt_cost)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {:?}", e.message))?;

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (name, email, password)
         VALUES ($1, $2, $3)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(name.trim())
    .bind(email.trim().to_lowercase())
    .bind(&password_hash)
    .fetch_optional(db)
    .await
    .context("Failed to insert user")?;

    match id {
        Some(id) => Ok(id),
        None => bail!("The email has already been taken."),
    }
}
