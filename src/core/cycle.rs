//! One full evaluation tick, decoupled from the timing mechanism.

use crate::audit::CsvAuditLog;
use crate::config::EngineConfig;
use crate::errors::{CycleError, ProviderError};
use crate::indicators::{correlation, crossover, sma};
use crate::models::alert::AlertRecord;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::price;
use crate::services::market_data::PriceProvider;
use crate::services::notifier::NotificationSink;
use crate::signals::evaluator;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Orchestrates one evaluation: pull both instruments' series, compute the
/// indicator snapshot, crossover diagnostics and correlation, apply the
/// decision rule, then hand the record to the notifier (actionable decisions
/// only) and the audit log (every cycle).
///
/// Holds no state across ticks; re-running against identical upstream data
/// reproduces the same record.
pub struct EvaluationCycle {
    config: EngineConfig,
    provider: Arc<dyn PriceProvider + Send + Sync>,
    notifier: Arc<dyn NotificationSink + Send + Sync>,
    audit: CsvAuditLog,
}

impl EvaluationCycle {
    pub fn new(
        config: EngineConfig,
        provider: Arc<dyn PriceProvider + Send + Sync>,
        notifier: Arc<dyn NotificationSink + Send + Sync>,
        audit: CsvAuditLog,
    ) -> Self {
        Self {
            config,
            provider,
            notifier,
            audit,
        }
    }

    /// Run one evaluation and return the emitted record.
    ///
    /// Provider failures abort before any decision is made; notification
    /// failures only warn; audit failures escalate after the decision.
    pub async fn run_once(&self) -> Result<AlertRecord, CycleError> {
        let cfg = &self.config;

        let primary = self
            .provider
            .fetch(&cfg.symbol, &cfg.interval, cfg.lookback)
            .await?;
        let reference = self
            .provider
            .fetch(&cfg.reference_symbol, &cfg.interval, cfg.lookback)
            .await?;

        let Some(last) = primary.last().copied() else {
            return Err(ProviderError::Empty {
                symbol: cfg.symbol.clone(),
            }
            .into());
        };
        let date = last.timestamp.date_naive();

        let closes = price::closes(&primary);
        let snapshot = IndicatorSnapshot {
            close: last.close,
            ma_short: sma::sma_latest(&closes, cfg.ma_short),
            ma_mid: sma::sma_latest(&closes, cfg.ma_mid),
            ma_long: sma::sma_latest(&closes, cfg.ma_long),
        };

        let cross = crossover::detect(&closes, cfg.ma_short, cfg.ma_mid);
        debug!(
            symbol = %cfg.symbol,
            trend = ?cross.trend,
            delta = ?cross.delta,
            "crossover state for {}: {:?} (delta {:?})",
            cfg.symbol,
            cross.trend,
            cross.delta
        );

        let corr = correlation::rolling_correlation(&primary, &reference, cfg.correlation_window);
        match corr {
            Some(value) => info!(
                symbol = %cfg.symbol,
                reference = %cfg.reference_symbol,
                correlation = value,
                "latest correlation {} vs {}: {:.2}",
                cfg.symbol,
                cfg.reference_symbol,
                value
            ),
            None => info!(
                symbol = %cfg.symbol,
                reference = %cfg.reference_symbol,
                "correlation {} vs {} undefined (insufficient paired returns)",
                cfg.symbol,
                cfg.reference_symbol
            ),
        }

        let decision = evaluator::evaluate(&snapshot, corr, cfg.correlation_threshold);
        let record = AlertRecord {
            date,
            symbol: cfg.symbol.clone(),
            price: snapshot.close,
            correlation: corr,
            decision,
        };

        if record.decision.is_actionable() {
            info!(
                symbol = %cfg.symbol,
                decision = %record.decision,
                price = record.price,
                "{} signal for {} at {}",
                record.decision,
                cfg.symbol,
                record.price
            );
            if let Err(e) = self.notifier.notify(&record.subject(), &record.body()).await {
                warn!(
                    symbol = %cfg.symbol,
                    error = %e,
                    "notification failed for {}: {}",
                    cfg.symbol,
                    e
                );
            }
        } else {
            info!(symbol = %cfg.symbol, "no clear signal for {}", cfg.symbol);
        }

        self.audit.append(&record)?;
        debug!(
            symbol = %cfg.symbol,
            decision = %record.decision,
            "logged {} record for {}",
            record.decision,
            cfg.symbol
        );

        Ok(record)
    }
}
