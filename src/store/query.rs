use crate::models::{matches, FilterSpec, Listing};

/// Listings matching `spec`, in their original relative order.
///
/// An empty result is a normal outcome, never an error.
pub fn query<'a>(listings: &'a [Listing], spec: &FilterSpec) -> Vec<&'a Listing> {
    listings.iter().filter(|l| matches(l, spec)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{listing, priced};
    use crate::models::{PropertyType, Range, TransactionType};

    #[test]
    fn test_single_listing_in_range() {
        let store = vec![listing("prop-0001")];
        let spec = FilterSpec {
            price_range: Range::new(100_000_000, 300_000_000),
            area_range: Range::new(10.0, 300.0),
            ..FilterSpec::default()
        };
        let result = query(&store, &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0], &store[0]);
    }

    #[test]
    fn test_other_district_yields_empty() {
        let store = vec![listing("prop-0001")];
        let spec = FilterSpec {
            district: Some("서초구".to_string()),
            ..FilterSpec::default()
        };
        assert!(query(&store, &spec).is_empty());
    }

    #[test]
    fn test_preserves_store_order() {
        let store = vec![
            priced("d", 400_000_000),
            priced("a", 50_000_000),
            priced("c", 150_000_000),
            priced("b", 900_000_000),
        ];
        let ids: Vec<&str> = query(&store, &FilterSpec::default())
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["d", "c", "b"]);
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let store = vec![
            listing("a"),
            Listing { property_type: PropertyType::Villa, ..listing("b") },
            listing("c"),
        ];
        let spec = FilterSpec {
            property_types: Some(vec![PropertyType::Apartment]),
            transaction_types: Some(vec![TransactionType::Sale]),
            ..FilterSpec::default()
        };
        let first = query(&store, &spec);
        let second = query(&store, &spec);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_empty_store() {
        assert!(query(&[], &FilterSpec::default()).is_empty());
    }
}
