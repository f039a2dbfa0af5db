use chrono::{Months, NaiveDate};
use serde::Serialize;

pub const HISTORY_MONTHS: u32 = 12;
/// Each point deviates from the baseline by at most this fraction
pub const HISTORY_VARIANCE: f64 = 0.05;
/// Baseline used when there is nothing to average
pub const EMPTY_BASELINE: u64 = 500_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: u64,
}

/// Synthetic monthly price series ending at `today`.
///
/// This is not historical data: every point is `baseline` with an
/// independent uniform jitter of up to ±5%.
pub fn price_history(baseline: u64, today: NaiveDate, rng: &mut fastrand::Rng) -> Vec<PricePoint> {
    (0..HISTORY_MONTHS)
        .rev()
        .filter_map(|months_back| today.checked_sub_months(Months::new(months_back)))
        .map(|date| {
            let variance = (rng.f64() * 2.0 - 1.0) * HISTORY_VARIANCE;
            PricePoint {
                date,
                price: (baseline as f64 * (1.0 + variance)).round() as u64,
            }
        })
        .collect()
}
