//! Closed value sets shared by catalog tables
//!
//! Each enum is stored and serialized as its literal uppercase string
//! (e.g. `CRUDE_OIL`). Any other string is rejected on deserialization,
//! on `FromStr`, and when read back from the database.

use sea_orm::Iterable;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// EIA publication an observation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSourceType {
    /// Short-Term Energy Outlook
    #[sea_orm(string_value = "STEO")]
    Steo,
    /// Petroleum Supply Monthly
    #[sea_orm(string_value = "PSM")]
    Psm,
    /// Weekly Petroleum Status Report
    #[sea_orm(string_value = "WEEKLY")]
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[sea_orm(string_value = "CRUDE_OIL")]
    CrudeOil,
    #[sea_orm(string_value = "GASOLINE")]
    Gasoline,
    #[sea_orm(string_value = "DISTILLATE")]
    Distillate,
    #[sea_orm(string_value = "RESIDUAL")]
    Residual,
    #[sea_orm(string_value = "JET_FUEL")]
    JetFuel,
    #[sea_orm(string_value = "PROPANE")]
    Propane,
    #[sea_orm(string_value = "NATURAL_GAS")]
    NaturalGas,
}

/// Side of the supply/disposition balance an observation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispositionType {
    #[sea_orm(string_value = "PRODUCTION")]
    Production,
    #[sea_orm(string_value = "IMPORTS")]
    Imports,
    #[sea_orm(string_value = "EXPORTS")]
    Exports,
    #[sea_orm(string_value = "STOCK_CHANGE")]
    StockChange,
    #[sea_orm(string_value = "REFINERY_INPUT")]
    RefineryInput,
    #[sea_orm(string_value = "DEMAND")]
    Demand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioType {
    #[sea_orm(string_value = "BASELINE")]
    Baseline,
    #[sea_orm(string_value = "HURRICANE")]
    Hurricane,
    #[sea_orm(string_value = "SUPPLY_SHOCK")]
    SupplyShock,
    #[sea_orm(string_value = "DEMAND_SURGE")]
    DemandSurge,
    #[sea_orm(string_value = "REFINERY_OUTAGE")]
    RefineryOutage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityLevel {
    #[sea_orm(string_value = "LOW")]
    Low,
    #[default]
    #[sea_orm(string_value = "MODERATE")]
    Moderate,
    #[sea_orm(string_value = "HIGH")]
    High,
    #[sea_orm(string_value = "EXTREME")]
    Extreme,
}

impl DataSourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSourceType::Steo => "STEO",
            DataSourceType::Psm => "PSM",
            DataSourceType::Weekly => "WEEKLY",
        }
    }
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::CrudeOil => "CRUDE_OIL",
            ProductType::Gasoline => "GASOLINE",
            ProductType::Distillate => "DISTILLATE",
            ProductType::Residual => "RESIDUAL",
            ProductType::JetFuel => "JET_FUEL",
            ProductType::Propane => "PROPANE",
            ProductType::NaturalGas => "NATURAL_GAS",
        }
    }
}

impl DispositionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispositionType::Production => "PRODUCTION",
            DispositionType::Imports => "IMPORTS",
            DispositionType::Exports => "EXPORTS",
            DispositionType::StockChange => "STOCK_CHANGE",
            DispositionType::RefineryInput => "REFINERY_INPUT",
            DispositionType::Demand => "DEMAND",
        }
    }
}

impl ScenarioType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioType::Baseline => "BASELINE",
            ScenarioType::Hurricane => "HURRICANE",
            ScenarioType::SupplyShock => "SUPPLY_SHOCK",
            ScenarioType::DemandSurge => "DEMAND_SURGE",
            ScenarioType::RefineryOutage => "REFINERY_OUTAGE",
        }
    }
}

impl SeverityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "LOW",
            SeverityLevel::Moderate => "MODERATE",
            SeverityLevel::High => "HIGH",
            SeverityLevel::Extreme => "EXTREME",
        }
    }
}

// Display and exact-match FromStr for every enum above
macro_rules! literal_string_impls {
    ($($ty:ident => $label:literal),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl std::str::FromStr for $ty {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $ty::iter()
                        .find(|variant| variant.as_str() == s)
                        .ok_or_else(|| format!("Unknown {}: {}", $label, s))
                }
            }
        )+
    };
}

literal_string_impls! {
    DataSourceType => "data source type",
    ProductType => "product type",
    DispositionType => "disposition type",
    ScenarioType => "scenario type",
    SeverityLevel => "severity level",
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_serde_uses_literal_strings() {
        assert_eq!(serde_json::to_string(&ProductType::CrudeOil).unwrap(), "\"CRUDE_OIL\"");
        assert_eq!(serde_json::to_string(&ProductType::JetFuel).unwrap(), "\"JET_FUEL\"");
        assert_eq!(serde_json::to_string(&DataSourceType::Steo).unwrap(), "\"STEO\"");
        assert_eq!(
            serde_json::to_string(&DispositionType::StockChange).unwrap(),
            "\"STOCK_CHANGE\""
        );
        assert_eq!(
            serde_json::to_string(&ScenarioType::RefineryOutage).unwrap(),
            "\"REFINERY_OUTAGE\""
        );

        let parsed: SeverityLevel = serde_json::from_str("\"EXTREME\"").unwrap();
        assert_eq!(parsed, SeverityLevel::Extreme);
    }

    #[test]
    fn test_serde_rejects_unknown_values() {
        assert!(serde_json::from_str::<ProductType>("\"KEROSENE\"").is_err());
        assert!(serde_json::from_str::<ProductType>("\"crude_oil\"").is_err());
        assert!(serde_json::from_str::<DataSourceType>("\"Steo\"").is_err());
        assert!(serde_json::from_str::<SeverityLevel>("\"CATASTROPHIC\"").is_err());
    }

    #[test]
    fn test_as_str_matches_serde_for_every_variant() {
        for v in ProductType::iter() {
            assert_eq!(serde_json::to_value(v).unwrap(), v.as_str());
        }
        for v in DispositionType::iter() {
            assert_eq!(serde_json::to_value(v).unwrap(), v.as_str());
        }
        for v in DataSourceType::iter() {
            assert_eq!(serde_json::to_value(v).unwrap(), v.as_str());
        }
        for v in ScenarioType::iter() {
            assert_eq!(serde_json::to_value(v).unwrap(), v.as_str());
        }
        for v in SeverityLevel::iter() {
            assert_eq!(serde_json::to_value(v).unwrap(), v.as_str());
        }
    }

    #[test]
    fn test_active_value_matches_literal() {
        assert_eq!(ProductType::NaturalGas.to_value(), "NATURAL_GAS");
        assert_eq!(
            DispositionType::try_from_value(&"REFINERY_INPUT".to_string()).unwrap(),
            DispositionType::RefineryInput
        );
        assert!(ScenarioType::try_from_value(&"TSUNAMI".to_string()).is_err());
    }

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!(ProductType::from_str("PROPANE").unwrap(), ProductType::Propane);
        assert_eq!(ScenarioType::from_str("DEMAND_SURGE").unwrap(), ScenarioType::DemandSurge);
        assert!(ProductType::from_str("propane").is_err());
        assert!(ProductType::from_str("").is_err());

        let err = DispositionType::from_str("CONSUMPTION").unwrap_err();
        assert_eq!(err, "Unknown disposition type: CONSUMPTION");
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for v in SeverityLevel::iter() {
            assert_eq!(SeverityLevel::from_str(&v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn test_default_severity_is_moderate() {
        assert_eq!(SeverityLevel::default(), SeverityLevel::Moderate);
    }
}
