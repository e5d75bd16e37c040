//! Indicator computation: moving averages, crossover state, correlation.
//!
//! Everything here is a pure function of its input series; the engine
//! recomputes from scratch each cycle and keeps no incremental state.

pub mod correlation;
pub mod crossover;
pub mod sma;
