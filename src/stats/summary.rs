use crate::models::Listing;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_count: usize,
    /// Floor of the mean; 0 for an empty collection
    pub average_price: u64,
    pub max_price: u64,
    pub min_price: u64,
}

pub fn summarize<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> SummaryStats {
    let mut count = 0usize;
    let mut total: u128 = 0;
    let mut max = u64::MIN;
    let mut min = u64::MAX;

    for amount in listings.into_iter().map(Listing::headline_amount) {
        count += 1;
        total += u128::from(amount);
        max = max.max(amount);
        min = min.min(amount);
    }

    if count == 0 {
        return SummaryStats::default();
    }

    SummaryStats {
        total_count: count,
        average_price: (total / count as u128) as u64,
        max_price: max,
        min_price: min,
    }
}
