//! Error taxonomy for the evaluation pipeline.

use thiserror::Error;

/// Failures while pulling a historical price series. Any of these aborts the
/// current cycle before a decision is made; no record is emitted and the
/// next scheduled tick proceeds normally.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("klines request for {symbol} failed: {source}")]
    Http {
        symbol: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("klines request for {symbol} returned status {status}")]
    Status {
        symbol: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed klines payload for {symbol}: {reason}")]
    Payload { symbol: String, reason: String },

    #[error("empty price series for {symbol}")]
    Empty { symbol: String },
}

/// Failures while submitting a notification. Logged as a warning inside the
/// cycle; the audit write still happens and the cycle still succeeds.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp submission failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Failures while appending to the audit log. Audit continuity is a core
/// guarantee, so these propagate out of the cycle and stop the scheduler.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit log write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("audit record serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Everything that can end a cycle without a record being emitted, or after
/// the record was computed but could not be persisted.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Audit(#[from] AuditError),
}

/// Startup-time configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {key}")]
    Missing { key: &'static str },

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
