//! Trend-following signal evaluation with correlation corroboration.
//!
//! One evaluation per external tick: pull daily bars for a primary and a
//! reference instrument, compute moving averages and their crossover state,
//! gate the trend decision on rolling return correlation, then emit an email
//! alert and an append-only audit record.

pub mod audit;
pub mod config;
pub mod core;
pub mod errors;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
