pub mod generator;
pub mod query;

use crate::models::{FilterSpec, Listing};
use chrono::Utc;

pub use query::query;

/// The listing collection served for the lifetime of the process.
///
/// Built once at startup and never mutated; handlers share it through
/// `AppState` so reads need no locking.
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Generate `count` listings, reproducibly when a seed is given
    pub fn generate(count: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self::new(generator::generate_listings(count, &mut rng, Utc::now()))
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn query(&self, spec: &FilterSpec) -> Vec<&Listing> {
        query(&self.listings, spec)
    }

    pub fn by_district(&self, district: &str) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| l.district == district)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::listing;

    fn store() -> ListingStore {
        ListingStore::new(vec![
            listing("prop-0001"),
            Listing { district: "서초구".to_string(), ..listing("prop-0002") },
            listing("prop-0003"),
        ])
    }

    #[test]
    fn test_find_by_id() {
        let store = store();
        assert_eq!(store.find_by_id("prop-0002").unwrap().district, "서초구");
        assert!(store.find_by_id("prop-9999").is_none());
    }

    #[test]
    fn test_by_district_keeps_store_order() {
        let store = store();
        let ids: Vec<&str> = store.by_district("강남구").iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["prop-0001", "prop-0003"]);
        assert!(store.by_district("마포구").is_empty());
    }

    #[test]
    fn test_generate_with_seed_is_reproducible() {
        let a = ListingStore::generate(20, Some(7));
        let b = ListingStore::generate(20, Some(7));
        assert_eq!(a.len(), 20);
        let ids_and_deals = |s: &ListingStore| {
            s.all().iter().map(|l| (l.id.clone(), l.deal)).collect::<Vec<_>>()
        };
        assert_eq!(ids_and_deals(&a), ids_and_deals(&b));
    }
}
