use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::PgPool;

use schoolbook_config::{CorsConfig, JwtConfig, PasswordConfig};
use schoolbook_core::{CommonPasswordList, CompromisedPasswordCheck, PwnedPasswords};

use crate::modules::stu_parents::repository::{PgStuParentRepository, StuParentRepository};
use crate::modules::users::repository::{PgUserRepository, UserRepository};

/// Shared by every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub stu_parents: Arc<dyn StuParentRepository>,
    pub password_check: Arc<dyn CompromisedPasswordCheck>,
    pub jwt_config: JwtConfig,
    pub password_config: PasswordConfig,
    pub cors_config: CorsConfig,
    pub metrics: Option<PrometheusHandle>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("password_config", &self.password_config)
            .field("cors_config", &self.cors_config)
            .field("metrics", &self.metrics.is_some())
            .finish_non_exhaustive()
    }
}

/// Picks the compromised-password checker the config asks for.
pub fn password_check_from_config(
    config: &PasswordConfig,
) -> anyhow::Result<Arc<dyn CompromisedPasswordCheck>> {
    if config.pwned_enabled {
        let check = PwnedPasswords::new(
            config.pwned_url.clone(),
            Duration::from_secs(config.pwned_timeout_secs),
        )?;
        Ok(Arc::new(check))
    } else {
        Ok(Arc::new(CommonPasswordList))
    }
}

pub fn init_app_state(db: PgPool, metrics: Option<PrometheusHandle>) -> anyhow::Result<AppState> {
    let password_config = PasswordConfig::from_env();

    Ok(AppState {
        users: Arc::new(PgUserRepository::new(db.clone())),
        stu_parents: Arc::new(PgStuParentRepository::new(db)),
        password_check: password_check_from_config(&password_config)?,
        jwt_config: JwtConfig::from_env(),
        password_config,
        cors_config: CorsConfig::from_env(),
        metrics,
    })
}
