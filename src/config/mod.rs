// src/config/mod.rs
// All values load from the environment (.env supported), with defaults.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct TextguardConfig {
    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Database Configuration
    pub database_url: String,
    pub sqlite_max_connections: u32,

    // ── Classifier Configuration
    pub url_classifier_cmd: String,
    pub sms_classifier_cmd: String,
    pub classifier_timeout_secs: u64,

    // ── History Configuration
    pub history_limit: i64,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl TextguardConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            host: env_var_or("TEXTGUARD_HOST", "0.0.0.0".to_string()),
            port: env_var_or("TEXTGUARD_PORT", 5001),
            database_url: env_var_or("DATABASE_URL", "sqlite:./textguard.db?mode=rwc".to_string()),
            sqlite_max_connections: env_var_or("SQLITE_MAX_CONNECTIONS", 5),
            url_classifier_cmd: env_var_or("URL_CLASSIFIER_CMD", "python -u predict.py".to_string()),
            sms_classifier_cmd: env_var_or("SMS_CLASSIFIER_CMD", "python -u predict_sms.py".to_string()),
            classifier_timeout_secs: env_var_or("CLASSIFIER_TIMEOUT_SECS", 120),
            history_limit: env_var_or("TEXTGUARD_HISTORY_LIMIT", 10),
            log_level: env_var_or("TEXTGUARD_LOG_LEVEL", "info".to_string()),
        }
    }
}

pub static CONFIG: Lazy<TextguardConfig> = Lazy::new(TextguardConfig::from_env);
