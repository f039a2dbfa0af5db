use super::{Listing, PropertyType, TransactionType};

/// Inclusive `[min, max]` bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> Range<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }
}

pub const DEFAULT_PRICE_RANGE: Range<u64> = Range::new(100_000_000, 3_000_000_000);
pub const DEFAULT_AREA_RANGE: Range<f64> = Range::new(10.0, 300.0);

/// Query over the listing collection.
///
/// Price and area ranges are always present; every other criterion is a
/// no-op when absent. An empty category list restricts nothing, exactly like
/// an absent one.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub region: Option<String>,
    pub district: Option<String>,
    pub property_types: Option<Vec<PropertyType>>,
    pub transaction_types: Option<Vec<TransactionType>>,
    /// Compared against the listing's headline amount
    pub price_range: Range<u64>,
    pub area_range: Range<f64>,
    pub build_year_range: Option<Range<i32>>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            region: None,
            district: None,
            property_types: None,
            transaction_types: None,
            price_range: DEFAULT_PRICE_RANGE,
            area_range: DEFAULT_AREA_RANGE,
            build_year_range: None,
        }
    }
}

impl FilterSpec {
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(region) = &self.region {
            if listing.region != *region {
                return false;
            }
        }

        if let Some(district) = &self.district {
            if listing.district != *district {
                return false;
            }
        }

        if !self.price_range.contains(&listing.headline_amount()) {
            return false;
        }

        if !self.area_range.contains(&listing.area) {
            return false;
        }

        if !allows(&self.property_types, &listing.property_type) {
            return false;
        }

        if !allows(&self.transaction_types, &listing.transaction_type()) {
            return false;
        }

        if let Some(years) = &self.build_year_range {
            if !years.contains(&listing.build_year) {
                return false;
            }
        }

        true
    }
}

/// Does `listing` satisfy every criterion of `spec`?
pub fn matches(listing: &Listing, spec: &FilterSpec) -> bool {
    spec.matches(listing)
}

fn allows<T: PartialEq>(inclusion: &Option<Vec<T>>, value: &T) -> bool {
    match inclusion {
        Some(list) if !list.is_empty() => list.contains(value),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{listing, priced};
    use crate::models::Deal;

    /// Accepts everything the fixtures produce, so each test narrows one criterion
    fn open_spec() -> FilterSpec {
        FilterSpec {
            price_range: Range::new(0, u64::MAX),
            area_range: Range::new(0.0, f64::MAX),
            ..FilterSpec::default()
        }
    }

    #[test]
    fn test_open_spec_matches() {
        assert!(matches(&listing("a"), &open_spec()));
    }

    #[test]
    fn test_region_exact_match() {
        let spec = FilterSpec { region: Some("서울".to_string()), ..open_spec() };
        assert!(matches(&listing("a"), &spec));

        let spec = FilterSpec { region: Some("경기".to_string()), ..open_spec() };
        assert!(!matches(&listing("a"), &spec));

        // No prefix or case folding
        let spec = FilterSpec { region: Some("서".to_string()), ..open_spec() };
        assert!(!matches(&listing("a"), &spec));
    }

    #[test]
    fn test_district_exact_match() {
        let spec = FilterSpec { district: Some("강남구".to_string()), ..open_spec() };
        assert!(matches(&listing("a"), &spec));

        let spec = FilterSpec { district: Some("서초구".to_string()), ..open_spec() };
        assert!(!matches(&listing("a"), &spec));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let spec = FilterSpec { price_range: Range::new(100, 200), ..open_spec() };
        assert!(matches(&priced("a", 100), &spec));
        assert!(matches(&priced("a", 200), &spec));
        assert!(!matches(&priced("a", 99), &spec));
        assert!(!matches(&priced("a", 201), &spec));
    }

    #[test]
    fn test_price_range_uses_deposit_for_monthly() {
        let monthly = Listing {
            deal: Deal::Monthly { deposit: 150_000_000, monthly_rent: 3_000_000 },
            ..listing("a")
        };
        let spec = FilterSpec {
            price_range: Range::new(100_000_000, 200_000_000),
            ..open_spec()
        };
        assert!(matches(&monthly, &spec));

        let spec = FilterSpec {
            price_range: Range::new(0, 10_000_000),
            ..open_spec()
        };
        assert!(!matches(&monthly, &spec));
    }

    #[test]
    fn test_area_range_is_inclusive() {
        let spec = FilterSpec { area_range: Range::new(50.0, 60.0), ..open_spec() };
        assert!(matches(&Listing { area: 50.0, ..listing("a") }, &spec));
        assert!(matches(&Listing { area: 60.0, ..listing("a") }, &spec));
        assert!(!matches(&Listing { area: 49.9, ..listing("a") }, &spec));
        assert!(!matches(&Listing { area: 60.1, ..listing("a") }, &spec));
    }

    #[test]
    fn test_property_type_inclusion() {
        let spec = FilterSpec {
            property_types: Some(vec![PropertyType::Villa, PropertyType::House]),
            ..open_spec()
        };
        assert!(!matches(&listing("a"), &spec));
        let villa = Listing { property_type: PropertyType::Villa, ..listing("a") };
        assert!(matches(&villa, &spec));
    }

    #[test]
    fn test_transaction_type_inclusion() {
        let spec = FilterSpec {
            transaction_types: Some(vec![TransactionType::Jeonse]),
            ..open_spec()
        };
        assert!(!matches(&listing("a"), &spec));
        let jeonse = Listing { deal: Deal::Jeonse { price: 200_000_000 }, ..listing("a") };
        assert!(matches(&jeonse, &spec));
    }

    #[test]
    fn test_empty_category_lists_behave_like_unset() {
        let types = [PropertyType::Apartment, PropertyType::Officetel, PropertyType::Villa, PropertyType::House];
        let deals = [
            Deal::Sale { price: 1 },
            Deal::Jeonse { price: 1 },
            Deal::Monthly { deposit: 1, monthly_rent: 1 },
        ];
        let empty = FilterSpec {
            property_types: Some(vec![]),
            transaction_types: Some(vec![]),
            ..open_spec()
        };
        let unset = open_spec();

        for property_type in types {
            for deal in deals {
                let l = Listing { property_type, deal, ..listing("a") };
                assert_eq!(matches(&l, &empty), matches(&l, &unset));
                assert!(matches(&l, &empty));
            }
        }
    }

    #[test]
    fn test_build_year_range() {
        let spec = FilterSpec { build_year_range: Some(Range::new(2000, 2010)), ..open_spec() };
        assert!(matches(&Listing { build_year: 2000, ..listing("a") }, &spec));
        assert!(matches(&Listing { build_year: 2010, ..listing("a") }, &spec));
        assert!(!matches(&Listing { build_year: 1999, ..listing("a") }, &spec));
        assert!(!matches(&Listing { build_year: 2011, ..listing("a") }, &spec));
    }

    #[test]
    fn test_all_criteria_must_hold() {
        let spec = FilterSpec {
            district: Some("강남구".to_string()),
            property_types: Some(vec![PropertyType::Apartment]),
            transaction_types: Some(vec![TransactionType::Monthly]),
            ..open_spec()
        };
        // Everything but the transaction type matches
        assert!(!matches(&listing("a"), &spec));
    }

    #[test]
    fn test_default_ranges() {
        let spec = FilterSpec::default();
        assert_eq!(spec.price_range, Range::new(100_000_000, 3_000_000_000));
        assert_eq!(spec.area_range, Range::new(10.0, 300.0));
        assert!(matches(&listing("a"), &spec));
        assert!(!matches(&priced("a", 99_999_999), &spec));
    }
}
