use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const PENDING_BOOKINGS_KEY: &str = "pending_bookings";
pub const SYNCED_BOOKINGS_KEY: &str = "synced_bookings";

/// Key under which one whole booking sequence is stored. The store always
/// reads and overwrites the full sequence at a key, never individual records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreKey(String);

impl StoreKey {
    pub fn pending() -> Self {
        Self(PENDING_BOOKINGS_KEY.to_string())
    }

    pub fn synced() -> Self {
        Self(SYNCED_BOOKINGS_KEY.to_string())
    }

    pub fn new(value: String) -> Result<Self, String> {
        Self::validate(&value)?;
        Ok(Self(value))
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        Self::validate(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err("Store key cannot be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StoreKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
