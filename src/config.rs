use anyhow::{Context, Result};

/// Process settings, read from the environment (or `.env`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub listing_count: usize,
    /// Fixed generator seed; random when unset
    pub listing_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("Invalid PORT")?;
        let listing_count = lookup("LISTING_COUNT")
            .unwrap_or_else(|| "100".to_string())
            .parse::<usize>()
            .context("Invalid LISTING_COUNT")?;
        let listing_seed = lookup("LISTING_SEED")
            .map(|seed| seed.parse::<u64>())
            .transpose()
            .context("Invalid LISTING_SEED")?;

        Ok(Self {
            host,
            port,
            listing_count,
            listing_seed,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
