use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Multiplier used for any fuel key the table does not know.
pub const DEFAULT_FUEL_FACTOR: f64 = 0.8;

/// Cooking fuel chosen in the selector.
///
/// Parsing is total: unknown keys land on [`FuelType::Other`], which carries
/// the default factor, so a bad selector value never aborts a calculation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FuelType {
    Wood,
    Charcoal,
    Lpg,
    Electricity,
    Other,
}

impl FuelType {
    /// Every fuel, in selector order.
    pub const ALL: [FuelType; 5] = [
        FuelType::Wood,
        FuelType::Charcoal,
        FuelType::Lpg,
        FuelType::Electricity,
        FuelType::Other,
    ];

    /// Emission multiplier applied per meal.
    pub fn factor(self) -> f64 {
        match self {
            FuelType::Wood => 1.2,
            FuelType::Charcoal => 1.0,
            FuelType::Lpg => 0.7,
            FuelType::Electricity => 0.1,
            FuelType::Other => DEFAULT_FUEL_FACTOR,
        }
    }

    /// Selector key (`wood`, `lpg`, ...).
    pub fn key(self) -> &'static str {
        match self {
            FuelType::Wood => "wood",
            FuelType::Charcoal => "charcoal",
            FuelType::Lpg => "lpg",
            FuelType::Electricity => "electricity",
            FuelType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FuelType::Wood => "Wood",
            FuelType::Charcoal => "Charcoal",
            FuelType::Lpg => "LPG",
            FuelType::Electricity => "Electricity",
            FuelType::Other => "Other",
        }
    }

    /// Look up a selector key, falling back to [`FuelType::Other`].
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "wood" => FuelType::Wood,
            "charcoal" => FuelType::Charcoal,
            "lpg" => FuelType::Lpg,
            "electricity" => FuelType::Electricity,
            _ => FuelType::Other,
        }
    }
}

impl FromStr for FuelType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FuelType::from_key(s))
    }
}

impl From<String> for FuelType {
    fn from(value: String) -> Self {
        FuelType::from_key(&value)
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_table() {
        assert_eq!(FuelType::Wood.factor(), 1.2);
        assert_eq!(FuelType::Charcoal.factor(), 1.0);
        assert_eq!(FuelType::Lpg.factor(), 0.7);
        assert_eq!(FuelType::Electricity.factor(), 0.1);
        assert_eq!(FuelType::Other.factor(), 0.8);
    }

    #[test]
    fn unknown_key_defaults_to_other() {
        assert_eq!(FuelType::from_key("dung"), FuelType::Other);
        assert_eq!(FuelType::from_key(""), FuelType::Other);
        assert_eq!("biogas".parse::<FuelType>().unwrap().factor(), DEFAULT_FUEL_FACTOR);
    }

    #[test]
    fn keys_are_case_insensitive() {
        assert_eq!(FuelType::from_key(" LPG "), FuelType::Lpg);
        assert_eq!(FuelType::from_key("Wood"), FuelType::Wood);
    }

    #[test]
    fn key_round_trips_through_from_key() {
        for fuel in FuelType::ALL {
            assert_eq!(FuelType::from_key(fuel.key()), fuel);
        }
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&FuelType::Lpg).unwrap();
        assert_eq!(json, "\"lpg\"");
        let fuel: FuelType = serde_json::from_str("\"peat\"").unwrap();
        assert_eq!(fuel, FuelType::Other);
    }
}
