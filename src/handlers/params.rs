use crate::models::filter::{DEFAULT_AREA_RANGE, DEFAULT_PRICE_RANGE};
use crate::models::{FilterSpec, ParseError, Range};
use serde::Deserialize;
use std::str::FromStr;

/// Raw filter query string.
///
/// Everything arrives as text so that malformed numbers can fall back to
/// defaults instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub area_min: Option<String>,
    pub area_max: Option<String>,
    pub region: Option<String>,
    pub district: Option<String>,
    /// Comma-separated
    pub property_type: Option<String>,
    /// Comma-separated
    pub transaction_type: Option<String>,
    pub build_year_min: Option<String>,
    pub build_year_max: Option<String>,
}

impl FilterParams {
    /// Unknown category values are rejected; bad numbers are not
    pub fn to_filter(&self) -> Result<FilterSpec, ParseError> {
        let build_year_range = match (
            parse_number::<i32>(&self.build_year_min),
            parse_number::<i32>(&self.build_year_max),
        ) {
            (Some(min), Some(max)) => Some(Range::new(min, max)),
            _ => None,
        };

        Ok(FilterSpec {
            region: non_empty(&self.region),
            district: non_empty(&self.district),
            property_types: parse_list(&self.property_type)?,
            transaction_types: parse_list(&self.transaction_type)?,
            price_range: Range::new(
                parse_number(&self.price_min).unwrap_or(DEFAULT_PRICE_RANGE.min),
                parse_number(&self.price_max).unwrap_or(DEFAULT_PRICE_RANGE.max),
            ),
            area_range: Range::new(
                parse_area(&self.area_min).unwrap_or(DEFAULT_AREA_RANGE.min),
                parse_area(&self.area_max).unwrap_or(DEFAULT_AREA_RANGE.max),
            ),
            build_year_range,
        })
    }
}

fn parse_number<T: FromStr>(raw: &Option<String>) -> Option<T> {
    raw.as_deref().and_then(|s| s.trim().parse().ok())
}

// `f64` parsing accepts "NaN" and "inf", which would empty every range
fn parse_area(raw: &Option<String>) -> Option<f64> {
    parse_number::<f64>(raw).filter(|v| v.is_finite())
}

fn non_empty(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Split a comma-separated list, skipping empty segments
pub fn parse_list<T>(raw: &Option<String>) -> Result<Option<Vec<T>>, ParseError>
where
    T: FromStr<Err = ParseError>,
{
    let Some(raw) = raw.as_deref() else {
        return Ok(None);
    };

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<T>, _>>()
        .map(Some)
}
