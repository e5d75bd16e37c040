//! Cron-driven loop executing one evaluation per tick.

use crate::core::cycle::EvaluationCycle;
use crate::errors::CycleError;
use chrono::{NaiveTime, Timelike};
use cron::Schedule;
use std::str::FromStr;
use tracing::{error, info};

/// Drives `EvaluationCycle::run_once` once per scheduled tick, nominally
/// daily at a fixed time of day (UTC).
///
/// Each cycle is awaited before the next sleep, so cycles never overlap; a
/// tick landing while a cycle is still running is absorbed by the
/// sequential loop.
pub struct DailyScheduler {
    schedule: Schedule,
    cycle: EvaluationCycle,
}

impl DailyScheduler {
    pub fn new(trigger_time: NaiveTime, cycle: EvaluationCycle) -> Result<Self, cron::error::Error> {
        // Cron format: second minute hour day month weekday
        let expr = format!("0 {} {} * * *", trigger_time.minute(), trigger_time.hour());
        let schedule = Schedule::from_str(&expr)?;
        info!(cron = %expr, "scheduler created (cron: {})", expr);
        Ok(Self { schedule, cycle })
    }

    /// Run until an audit write fails. Provider failures are logged and the
    /// loop waits for the next tick; there is no retry within a tick.
    pub async fn run(&self) -> Result<(), CycleError> {
        info!("scheduler started, waiting for next tick...");
        loop {
            let Some(next_tick) = self.schedule.upcoming(chrono::Utc).next() else {
                // A daily expression always has an upcoming tick.
                return Ok(());
            };
            let now = chrono::Utc::now();
            if next_tick > now {
                if let Ok(wait) = (next_tick - now).to_std() {
                    tokio::time::sleep(wait).await;
                }
            }

            info!("tick: running evaluation cycle");
            match self.cycle.run_once().await {
                Ok(record) => info!(
                    decision = %record.decision,
                    date = %record.date,
                    "cycle complete: {} on {}",
                    record.decision,
                    record.date
                ),
                Err(CycleError::Provider(e)) => {
                    error!(error = %e, "cycle aborted, waiting for next tick: {}", e);
                }
                Err(e @ CycleError::Audit(_)) => {
                    error!(error = %e, "audit log unwritable, stopping: {}", e);
                    return Err(e);
                }
            }
        }
    }
}
