//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, Environment as EnvSource, File, FileFormat};
use serde::Deserialize;

use crate::environment::Environment;
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: Environment,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Deserialize, Clone, Default)]
pub struct AuthSettings {
    /// Session signing secret. Falls back to the development secret outside
    /// production when unset.
    pub secret: Option<String>,
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AppConfig {
    /// Loads configuration from defaults, `config/default`, `config/{APP_ENV}`
    /// and `__`-separated environment variables (`APP__PORT`, `AUTH__SECRET`).
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .set_default("app.env", env.as_str())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            // Values stay strings until deserialization so secrets like
            // `000123` keep their exact bytes.
            .add_source(EnvSource::default().separator("__"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;
        if app_config.auth.secret.is_none() {
            app_config.auth.secret = std::env::var("JWT_SECRET").ok();
        }
        Ok(app_config)
    }

    /// Builds configuration from an inline TOML document layered over the defaults.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = Self::defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, AppError> {
        Ok(Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "session-server")?)
    }
}
