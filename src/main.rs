//! trendalert worker
//!
//! Evaluates a daily moving-average strategy with correlation corroboration
//! and emits email alerts plus an append-only audit log.

use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use trendalert::audit::CsvAuditLog;
use trendalert::config::{get_environment, Config};
use trendalert::core::cycle::EvaluationCycle;
use trendalert::core::scheduler::DailyScheduler;
use trendalert::logging;
use trendalert::services::binance::BinanceProvider;
use trendalert::services::notifier::EmailNotifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env()?;
    info!("Starting trendalert worker");
    info!(environment = %get_environment(), "Environment");
    info!(
        symbol = %config.engine.symbol,
        reference = %config.engine.reference_symbol,
        interval = %config.engine.interval,
        lookback = config.engine.lookback,
        trigger = %config.trigger_time,
        "Evaluating {} against {} ({} bars of {}), daily at {} UTC",
        config.engine.symbol,
        config.engine.reference_symbol,
        config.engine.lookback,
        config.engine.interval,
        config.trigger_time
    );

    let provider = Arc::new(BinanceProvider::new(&config.api_url, config.http_timeout)?);
    let notifier = Arc::new(EmailNotifier::new(&config.smtp, config.http_timeout)?);
    let audit = CsvAuditLog::new(&config.audit_log_path);
    info!(
        path = %config.audit_log_path.display(),
        "Audit log at {}",
        config.audit_log_path.display()
    );

    let cycle = EvaluationCycle::new(config.engine.clone(), provider, notifier, audit);
    let scheduler = DailyScheduler::new(config.trigger_time, cycle)?;

    tokio::select! {
        result = scheduler.run() => {
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Shutting down");
        }
    }

    Ok(())
}
