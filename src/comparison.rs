use crate::models::Listing;
use serde::Serialize;

pub const MAX_COMPARISON: usize = 4;

/// Listings picked for side-by-side comparison: at most four, no repeats.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Comparison<'a> {
    listings: Vec<&'a Listing>,
}

impl<'a> Comparison<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the listing is already present or the set is full
    pub fn add(&mut self, listing: &'a Listing) -> bool {
        if self.contains(&listing.id) || self.is_full() {
            return false;
        }
        self.listings.push(listing);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.listings.iter().any(|l| l.id == id)
    }

    pub fn is_full(&self) -> bool {
        self.listings.len() >= MAX_COMPARISON
    }
}
