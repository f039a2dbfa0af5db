use crate::models::{Deal, Direction, Listing, PropertyType, TransactionType};
use crate::regions;
use chrono::{DateTime, Duration, Utc};

const LISTING_WINDOW_DAYS: i64 = 90;
const STREETS: &[&str] = &["대로", "로", "길"];

/// Procedurally generate `count` listings.
///
/// All randomness comes from `rng`, and creation times are spread over the
/// 90 days before `now`, so a seeded rng and a fixed `now` reproduce the same
/// collection.
pub fn generate_listings(count: usize, rng: &mut fastrand::Rng, now: DateTime<Utc>) -> Vec<Listing> {
    let districts: Vec<_> = regions::all_districts().collect();

    (1..=count)
        .map(|n| {
            let (region, district) = districts[rng.usize(..districts.len())];
            let neighborhood = district.neighborhoods[rng.usize(..district.neighborhoods.len())];

            let property_type = PropertyType::ALL[rng.usize(..PropertyType::ALL.len())];
            let transaction_type = TransactionType::ALL[rng.usize(..TransactionType::ALL.len())];
            let area = 20 + rng.u32(..150);
            let floor = rng.u32(1..=20);
            let total_floors = floor + rng.u32(..10);
            let street = STREETS[rng.usize(..STREETS.len())];

            Listing {
                id: format!("prop-{:04}", n),
                name: format!("{} {} {}㎡", neighborhood, property_type.label(), area),
                property_type,
                deal: generate_deal(transaction_type, rng),
                area: f64::from(area),
                region: region.name.to_string(),
                district: district.name.to_string(),
                neighborhood: neighborhood.to_string(),
                address: format!(
                    "{} {} {}{} {}",
                    region.name,
                    district.name,
                    neighborhood,
                    street,
                    rng.u32(1..1000)
                ),
                build_year: 1990 + rng.i32(0..34),
                floor,
                total_floors,
                direction: Direction::ALL[rng.usize(..Direction::ALL.len())],
                parking: rng.f64() > 0.3,
                elevator: total_floors > 4,
                created_at: now - Duration::milliseconds(rng.i64(0..LISTING_WINDOW_DAYS * 24 * 60 * 60 * 1000)),
            }
        })
        .collect()
}

fn generate_deal(transaction_type: TransactionType, rng: &mut fastrand::Rng) -> Deal {
    match transaction_type {
        // 1억 ~ 30억
        TransactionType::Sale => Deal::Sale {
            price: 100_000_000 + rng.u64(..2_900_000_000),
        },
        // 5억 ~ 15억
        TransactionType::Jeonse => Deal::Jeonse {
            price: 500_000_000 + rng.u64(..1_000_000_000),
        },
        // deposit 1억 ~ 5억, rent 300만 ~ 370만
        TransactionType::Monthly => Deal::Monthly {
            deposit: 100_000_000 + rng.u64(..400_000_000),
            monthly_rent: 3_000_000 + rng.u64(..700_000),
        },
    }
}
