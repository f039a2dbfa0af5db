use crate::models::Listing;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Length of each period compared by `price_change`
pub const CHANGE_WINDOW_DAYS: i64 = 30;

/// Per-district aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStats {
    /// Sent as `region` on the wire
    #[serde(rename = "region")]
    pub district: String,
    pub count: usize,
    pub average_price: u64,
    pub median_price: u64,
    /// Percent change of the average between the last two 30-day windows
    pub price_change: f64,
}

/// Group by district, in order of first appearance.
pub fn region_stats<'a>(
    listings: impl IntoIterator<Item = &'a Listing>,
    now: DateTime<Utc>,
) -> Vec<RegionStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Listing>)> = Vec::new();

    for listing in listings {
        let slot = *index.entry(listing.district.as_str()).or_insert_with(|| {
            groups.push((listing.district.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(listing);
    }

    groups
        .into_iter()
        .map(|(district, members)| {
            let mut amounts: Vec<u64> = members.iter().map(|l| l.headline_amount()).collect();
            amounts.sort_unstable();

            RegionStats {
                district: district.to_string(),
                count: amounts.len(),
                average_price: mean(&amounts),
                median_price: median(&amounts),
                price_change: price_change(&members, now),
            }
        })
        .collect()
}

fn mean(amounts: &[u64]) -> u64 {
    if amounts.is_empty() {
        return 0;
    }
    let total: u128 = amounts.iter().map(|&a| u128::from(a)).sum();
    (total / amounts.len() as u128) as u64
}

/// Expects `sorted` in ascending order
fn median(sorted: &[u64]) -> u64 {
    let n = sorted.len();
    match n {
        0 => 0,
        _ if n % 2 == 1 => sorted[n / 2],
        _ => ((u128::from(sorted[n / 2 - 1]) + u128::from(sorted[n / 2])) / 2) as u64,
    }
}

fn price_change(members: &[&Listing], now: DateTime<Utc>) -> f64 {
    let window = Duration::days(CHANGE_WINDOW_DAYS);
    let recent_start = now - window;
    let previous_start = recent_start - window;

    let in_window = |start: DateTime<Utc>, end: DateTime<Utc>| -> Vec<u64> {
        members
            .iter()
            .filter(|l| l.created_at > start && l.created_at <= end)
            .map(|l| l.headline_amount())
            .collect()
    };

    let recent = in_window(recent_start, now);
    let previous = in_window(previous_start, recent_start);
    if recent.is_empty() || previous.is_empty() {
        return 0.0;
    }

    let average = |amounts: &[u64]| amounts.iter().map(|&a| a as f64).sum::<f64>() / amounts.len() as f64;
    let previous_average = average(&previous);
    if previous_average == 0.0 {
        return 0.0;
    }
    (average(&recent) - previous_average) / previous_average * 100.0
}
