//! Rolling Pearson correlation of percentage returns between two price
//! series aligned by timestamp.

use crate::models::price::PricePoint;
use std::cmp::Ordering;

/// Inner join of two ordered series on timestamp. Only bars present in both
/// series contribute.
fn align(a: &[PricePoint], b: &[PricePoint]) -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].timestamp.cmp(&b[j].timestamp) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push((a[i].close, b[j].close));
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Simple percentage returns, one per consecutive pair.
fn pct_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Pearson coefficient over two equal-length samples. `None` when either
/// sample has zero variance; a flat leg has no defined correlation.
fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.is_empty() || x.len() != y.len() {
        return None;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x * var_y).sqrt())
}

/// Latest rolling correlation of returns over `window` bars.
///
/// `None` when fewer than window + 1 aligned bars exist (including the case
/// of no overlapping timestamps at all). Symmetric in its arguments.
pub fn rolling_correlation(a: &[PricePoint], b: &[PricePoint], window: usize) -> Option<f64> {
    if window == 0 {
        return None;
    }
    let aligned = align(a, b);
    if aligned.len() < window + 1 {
        return None;
    }

    let closes_a: Vec<f64> = aligned.iter().map(|p| p.0).collect();
    let closes_b: Vec<f64> = aligned.iter().map(|p| p.1).collect();
    let returns_a = pct_returns(&closes_a);
    let returns_b = pct_returns(&closes_b);

    let start = returns_a.len() - window;
    pearson(&returns_a[start..], &returns_b[start..])
}
