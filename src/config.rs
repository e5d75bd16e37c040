//! Immutable runtime configuration.
//!
//! Loaded once at startup from the environment (`.env` supported via dotenvy
//! in main) and passed down by value; no process-wide mutable settings.

use crate::errors::ConfigError;
use chrono::NaiveTime;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Engine-level settings consumed by `EvaluationCycle`.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub symbol: String,
    pub reference_symbol: String,
    pub interval: String,
    pub lookback: usize,
    pub ma_short: usize,
    pub ma_mid: usize,
    pub ma_long: usize,
    pub correlation_window: usize,
    pub correlation_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            symbol: "XRPUSDT".to_string(),
            reference_symbol: "BTCUSDT".to_string(),
            interval: "1d".to_string(),
            lookback: 300,
            ma_short: 20,
            ma_mid: 50,
            ma_long: 200,
            correlation_window: 30,
            correlation_threshold: 0.5,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ma_short == 0 || self.ma_short >= self.ma_mid || self.ma_mid >= self.ma_long {
            return Err(ConfigError::Invalid {
                key: "MA_SHORT/MA_MID/MA_LONG",
                reason: format!(
                    "windows must be strictly increasing and non-zero, got {}/{}/{}",
                    self.ma_short, self.ma_mid, self.ma_long
                ),
            });
        }
        if self.correlation_window == 0 {
            return Err(ConfigError::Invalid {
                key: "CORRELATION_WINDOW",
                reason: "must be non-zero".to_string(),
            });
        }
        if !self.correlation_threshold.is_finite() {
            return Err(ConfigError::Invalid {
                key: "CORRELATION_THRESHOLD",
                reason: format!("must be finite, got {}", self.correlation_threshold),
            });
        }
        if self.lookback == 0 {
            return Err(ConfigError::Invalid {
                key: "LOOKBACK_LIMIT",
                reason: "must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

/// SMTP submission settings for the email notifier.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
    pub to: String,
}

/// Full application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub engine: EngineConfig,
    /// Time of day (UTC) at which the daily evaluation fires.
    pub trigger_time: NaiveTime,
    pub api_url: String,
    pub http_timeout: Duration,
    pub smtp: SmtpConfig,
    pub audit_log_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let engine = EngineConfig {
            symbol: var_or("SYMBOL", "XRPUSDT"),
            reference_symbol: var_or("REFERENCE_SYMBOL", "BTCUSDT"),
            interval: var_or("BAR_INTERVAL", "1d"),
            lookback: parsed_or("LOOKBACK_LIMIT", 300)?,
            ma_short: parsed_or("MA_SHORT", 20)?,
            ma_mid: parsed_or("MA_MID", 50)?,
            ma_long: parsed_or("MA_LONG", 200)?,
            correlation_window: parsed_or("CORRELATION_WINDOW", 30)?,
            correlation_threshold: parsed_or("CORRELATION_THRESHOLD", 0.5)?,
        };
        engine.validate()?;

        let trigger_raw = var_or("TRIGGER_TIME", "09:00");
        let trigger_time = NaiveTime::parse_from_str(&trigger_raw, "%H:%M").map_err(|e| {
            ConfigError::Invalid {
                key: "TRIGGER_TIME",
                reason: format!("{} (expected HH:MM): {}", trigger_raw, e),
            }
        })?;

        Ok(Self {
            engine,
            trigger_time,
            api_url: var_or("BINANCE_API_URL", "https://api.binance.com"),
            http_timeout: Duration::from_secs(parsed_or("HTTP_TIMEOUT_SECONDS", 10)?),
            smtp: SmtpConfig {
                host: required("SMTP_HOST")?,
                port: parsed_or("SMTP_PORT", 587)?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
                from: required("EMAIL_FROM")?,
                to: required("EMAIL_TO")?,
            },
            audit_log_path: PathBuf::from(var_or("AUDIT_LOG_PATH", "signal_log.csv")),
        })
    }
}

/// Log-format environment; "production" switches to JSON logs.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

fn var_or(key: &'static str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("{}: {}", raw, e),
        }),
        Err(_) => Ok(default),
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing { key })
}
