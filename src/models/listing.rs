use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single property listing.
///
/// The transaction-dependent amounts live in [`Deal`], which is flattened into
/// the listing on the wire: `transactionType` plus either `price` or
/// `deposit`/`monthlyRent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(flatten)]
    pub deal: Deal,
    /// Floor area in square meters
    pub area: f64,
    /// 시/도, e.g. "서울"
    pub region: String,
    /// 구/시, e.g. "강남구"
    pub district: String,
    /// 동, e.g. "역삼"
    pub neighborhood: String,
    pub address: String,
    pub build_year: i32,
    pub floor: u32,
    pub total_floors: u32,
    pub direction: Direction,
    pub parking: bool,
    pub elevator: bool,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    pub fn transaction_type(&self) -> TransactionType {
        self.deal.transaction_type()
    }

    /// The single amount used when listings are compared by price
    pub fn headline_amount(&self) -> u64 {
        self.deal.headline_amount()
    }
}

/// Transaction terms of a listing, keyed on the transaction category.
///
/// A monthly-rent deal has no sale price, so there is no way to read one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "transactionType", rename_all = "lowercase")]
pub enum Deal {
    Sale {
        price: u64,
    },
    /// Lease-deposit (전세)
    Jeonse {
        price: u64,
    },
    /// Monthly rent (월세)
    Monthly {
        deposit: u64,
        #[serde(rename = "monthlyRent")]
        monthly_rent: u64,
    },
}

impl Deal {
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Deal::Sale { .. } => TransactionType::Sale,
            Deal::Jeonse { .. } => TransactionType::Jeonse,
            Deal::Monthly { .. } => TransactionType::Monthly,
        }
    }

    pub fn price(&self) -> Option<u64> {
        match self {
            Deal::Sale { price } | Deal::Jeonse { price } => Some(*price),
            Deal::Monthly { .. } => None,
        }
    }

    pub fn deposit(&self) -> Option<u64> {
        match self {
            Deal::Monthly { deposit, .. } => Some(*deposit),
            _ => None,
        }
    }

    pub fn monthly_rent(&self) -> Option<u64> {
        match self {
            Deal::Monthly { monthly_rent, .. } => Some(*monthly_rent),
            _ => None,
        }
    }

    /// Price for sale and jeonse deals, deposit for monthly ones
    pub fn headline_amount(&self) -> u64 {
        match self {
            Deal::Sale { price } | Deal::Jeonse { price } => *price,
            Deal::Monthly { deposit, .. } => *deposit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Officetel,
    Villa,
    House,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::Officetel,
        PropertyType::Villa,
        PropertyType::House,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Officetel => "officetel",
            PropertyType::Villa => "villa",
            PropertyType::House => "house",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "아파트",
            PropertyType::Officetel => "오피스텔",
            PropertyType::Villa => "빌라",
            PropertyType::House => "주택",
        }
    }
}

impl FromStr for PropertyType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPropertyType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sale,
    Jeonse,
    Monthly,
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Sale,
        TransactionType::Jeonse,
        TransactionType::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sale => "sale",
            TransactionType::Jeonse => "jeonse",
            TransactionType::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Sale => "매매",
            TransactionType::Jeonse => "전세",
            TransactionType::Monthly => "월세",
        }
    }
}

impl FromStr for TransactionType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(TransactionType::Sale),
            "jeonse" | "lease-deposit" => Ok(TransactionType::Jeonse),
            "monthly" | "monthly-rent" => Ok(TransactionType::Monthly),
            _ => Err(ParseError::UnknownTransactionType(s.to_string())),
        }
    }
}

/// Compass direction the unit faces (향)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "남향")]
    South,
    #[serde(rename = "동남향")]
    SouthEast,
    #[serde(rename = "동향")]
    East,
    #[serde(rename = "동북향")]
    NorthEast,
    #[serde(rename = "북향")]
    North,
    #[serde(rename = "서북향")]
    NorthWest,
    #[serde(rename = "서향")]
    West,
    #[serde(rename = "남서향")]
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::South,
        Direction::SouthEast,
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Direction::South => "남향",
            Direction::SouthEast => "동남향",
            Direction::East => "동향",
            Direction::NorthEast => "동북향",
            Direction::North => "북향",
            Direction::NorthWest => "서북향",
            Direction::West => "서향",
            Direction::SouthWest => "남서향",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),

    #[error("Unknown transaction type: {0}")]
    UnknownTransactionType(String),
}
