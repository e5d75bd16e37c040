//! Unit tests for simple moving averages

use trendalert::indicators::sma::{sma_latest, sma_series};

#[test]
fn series_is_missing_until_window_fills() {
    let closes = [1.0, 2.0, 3.0, 4.0, 5.0];
    let series = sma_series(&closes, 3);
    assert_eq!(series, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn series_shorter_than_window_is_all_missing() {
    let closes = [1.0, 2.0];
    assert!(sma_series(&closes, 5).iter().all(Option::is_none));
    assert!(sma_latest(&closes, 5).is_none());
}

#[test]
fn window_of_one_returns_the_closes() {
    let closes = [3.0, 7.0];
    assert_eq!(sma_series(&closes, 1), vec![Some(3.0), Some(7.0)]);
}

#[test]
fn latest_matches_series_tail() {
    let closes: Vec<f64> = (1..=10).map(|i| i as f64).collect();
    let series = sma_series(&closes, 4);
    assert_eq!(series.last().copied().flatten(), sma_latest(&closes, 4));
}

#[test]
fn latest_is_arithmetic_mean_of_tail() {
    let closes = [10.0, 20.0, 30.0, 40.0];
    assert_eq!(sma_latest(&closes, 2), Some(35.0));
    assert_eq!(sma_latest(&closes, 4), Some(25.0));
}

#[test]
fn zero_window_is_undefined() {
    let closes = [1.0, 2.0];
    assert!(sma_latest(&closes, 0).is_none());
    assert!(sma_series(&closes, 0).iter().all(Option::is_none));
}

#[test]
fn empty_series_yields_nothing() {
    assert!(sma_series(&[], 3).is_empty());
    assert!(sma_latest(&[], 3).is_none());
}
