use super::{Deal, Direction, Listing, PropertyType};
use chrono::{TimeZone, Utc};

/// A Gangnam apartment for sale at 2억, 50㎡; override fields with struct update syntax
pub fn listing(id: &str) -> Listing {
    Listing {
        id: id.to_string(),
        name: "역삼 아파트 50㎡".to_string(),
        property_type: PropertyType::Apartment,
        deal: Deal::Sale { price: 200_000_000 },
        area: 50.0,
        region: "서울".to_string(),
        district: "강남구".to_string(),
        neighborhood: "역삼".to_string(),
        address: "서울 강남구 테헤란로 123".to_string(),
        build_year: 2010,
        floor: 3,
        total_floors: 10,
        direction: Direction::South,
        parking: true,
        elevator: true,
        created_at: Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap(),
    }
}

pub fn priced(id: &str, price: u64) -> Listing {
    Listing {
        deal: Deal::Sale { price },
        ..listing(id)
    }
}
