mod data;

pub use data::REGIONS;

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// A 시/도 and its districts
#[derive(Debug, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub districts: &'static [District],
}

/// A 구/시 and its neighborhoods
#[derive(Debug, Serialize)]
pub struct District {
    pub name: &'static str,
    pub neighborhoods: &'static [&'static str],
}

// District name -> owning region, built on first lookup
static DISTRICT_INDEX: Lazy<HashMap<&'static str, (&'static Region, &'static District)>> =
    Lazy::new(|| {
        REGIONS
            .iter()
            .flat_map(|region| region.districts.iter().map(move |d| (d.name, (region, d))))
            .collect()
    });

/// Look up a district and the region it belongs to
pub fn find_district(name: &str) -> Option<(&'static Region, &'static District)> {
    DISTRICT_INDEX.get(name).copied()
}

/// Every (region, district) pair, in table order
pub fn all_districts() -> impl Iterator<Item = (&'static Region, &'static District)> {
    REGIONS
        .iter()
        .flat_map(|region| region.districts.iter().map(move |d| (region, d)))
}
