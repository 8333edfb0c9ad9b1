use std::env;
use thiserror::Error;

/// Port used when PORT is not set.
pub const DEFAULT_PORT: u16 = 5001;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("MONGO_URI environment variable not set")]
    MissingMongoUri,

    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Process configuration, read once at startup.
///
/// The reCAPTCHA secret is optional here on purpose: without it the service
/// still runs, and /verify-captcha answers with the missing-credential
/// response instead of contacting the remote verifier.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub recaptcha_secret: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mongo_uri = env::var("MONGO_URI").map_err(|_| ConfigError::MissingMongoUri)?;

        let recaptcha_secret = env::var("RECAPTCHA_SECRET").ok().filter(|s| !s.is_empty());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            mongo_uri,
            recaptcha_secret,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-wide; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("MONGO_URI");
        env::remove_var("RECAPTCHA_SECRET");
        env::remove_var("PORT");
    }

    #[test]
    fn test_from_env_minimal() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("MONGO_URI", "mongodb://localhost:27017/investments");

        let config = Config::from_env().unwrap();
        assert_eq!(config.mongo_uri, "mongodb://localhost:27017/investments");
        assert!(config.recaptcha_secret.is_none());
        assert_eq!(config.port, DEFAULT_PORT);

        clear_env();
    }

    #[test]
    fn test_from_env_full() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("MONGO_URI", "mongodb://localhost:27017/investments");
        env::set_var("RECAPTCHA_SECRET", "shhh");
        env::set_var("PORT", "8080");

        let config = Config::from_env().unwrap();
        assert_eq!(config.recaptcha_secret.as_deref(), Some("shhh"));
        assert_eq!(config.port, 8080);

        clear_env();
    }

    #[test]
    fn test_missing_mongo_uri() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::MissingMongoUri)));
    }

    #[test]
    fn test_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("MONGO_URI", "mongodb://localhost:27017/investments");
        env::set_var("PORT", "not-a-port");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));

        clear_env();
    }

    #[test]
    fn test_empty_secret_treated_as_absent() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("MONGO_URI", "mongodb://localhost:27017/investments");
        env::set_var("RECAPTCHA_SECRET", "");

        let config = Config::from_env().unwrap();
        assert!(config.recaptcha_secret.is_none());

        clear_env();
    }
}
