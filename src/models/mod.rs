pub mod listing;
pub mod filter;

#[cfg(test)]
pub mod fixtures;

pub use listing::{Deal, Direction, Listing, ParseError, PropertyType, TransactionType};
pub use filter::{matches, FilterSpec, Range};
