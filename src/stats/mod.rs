//! Aggregates over a (usually filtered) listing collection.
//!
//! Everything here is a pure function of its inputs; amounts are headline
//! amounts (price, or deposit for monthly deals).

pub mod distribution;
pub mod history;
pub mod region;
pub mod summary;

pub use distribution::{price_distribution, BracketShare};
pub use history::{price_history, PricePoint};
pub use region::{region_stats, RegionStats};
pub use summary::{summarize, SummaryStats};
