use crate::models::Listing;
use serde::Serialize;

/// Inclusive price band; `max: None` is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBracket {
    pub label: &'static str,
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceBracket {
    pub fn contains(&self, amount: u64) -> bool {
        amount >= self.min && self.max.map_or(true, |max| amount <= max)
    }
}

/// Contiguous from 0 with no gaps, so every amount lands in exactly one bracket
pub const PRICE_BRACKETS: [PriceBracket; 4] = [
    PriceBracket { label: "1억 이하", min: 0, max: Some(100_000_000) },
    PriceBracket { label: "1-3억", min: 100_000_001, max: Some(300_000_000) },
    PriceBracket { label: "3-5억", min: 300_000_001, max: Some(500_000_000) },
    PriceBracket { label: "5억 이상", min: 500_000_001, max: None },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketShare {
    pub label: &'static str,
    pub count: usize,
    /// Share of the whole collection, one decimal place; 0 when empty
    pub percentage: f64,
}

pub fn bracket_index(amount: u64) -> usize {
    PRICE_BRACKETS
        .iter()
        .position(|b| b.contains(amount))
        .unwrap_or(PRICE_BRACKETS.len() - 1)
}

pub fn price_distribution<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Vec<BracketShare> {
    let mut counts = [0usize; PRICE_BRACKETS.len()];
    let mut total = 0usize;
    for listing in listings {
        counts[bracket_index(listing.headline_amount())] += 1;
        total += 1;
    }

    PRICE_BRACKETS
        .iter()
        .zip(counts)
        .map(|(bracket, count)| BracketShare {
            label: bracket.label,
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}
