use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub google_form_secret: Option<String>,
    pub debug: bool,
}

impl EnvConfig {
    fn get_optional(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.is_empty())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_optional("PORT")
                .and_then(|value| value.parse().ok())
                .unwrap_or(8000),
            database_url: Self::get_optional("DATABASE_URL"),
            google_form_secret: Self::get_optional("GOOGLE_FORM_SECRET"),
            debug: Self::get_optional("APP_DEBUG")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

/// Whether error responses may carry internal detail. False until the
/// config is initialized, so nothing leaks by accident.
pub fn debug_enabled() -> bool {
    CONFIG.get().map(|config| config.debug).unwrap_or(false)
}
