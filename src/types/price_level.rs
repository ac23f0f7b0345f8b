use std::str::FromStr;

use thiserror::Error;

/// Ordinal cost indicator used by the places API, `0` (free) through `4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriceLevel {
    Free,
    Inexpensive,
    Moderate,
    Expensive,
    VeryExpensive,
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown price level: '{0}'")]
pub struct UnknownPriceLevel(pub String);

impl PriceLevel {
    pub fn ordinal(self) -> u8 {
        match self {
            PriceLevel::Free => 0,
            PriceLevel::Inexpensive => 1,
            PriceLevel::Moderate => 2,
            PriceLevel::Expensive => 3,
            PriceLevel::VeryExpensive => 4,
        }
    }
}

impl FromStr for PriceLevel {
    type Err = UnknownPriceLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(PriceLevel::Free),
            "1" => Ok(PriceLevel::Inexpensive),
            "2" => Ok(PriceLevel::Moderate),
            "3" => Ok(PriceLevel::Expensive),
            "4" => Ok(PriceLevel::VeryExpensive),
            _ => Err(UnknownPriceLevel(s.to_string())),
        }
    }
}
