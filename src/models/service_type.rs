//! Service type catalog
//!
//! Every maintenance category is one row of [`CATALOG`]. Labels, icons,
//! colors and default intervals are read from the table, so adding a type
//! means adding a variant and a row.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of maintenance task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    OilChange,
    OilFilter,
    AirFilter,
    SparkPlugs,
    Chain,
    Tires,
    Brakes,
    Coolant,
    Battery,
    General,
}

/// Constant metadata for one service type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTypeInfo {
    pub service_type: ServiceType,
    /// Stable snake_case key, matches the serialized form
    pub key: &'static str,
    pub label: &'static str,
    /// Symbol name of the icon shown next to the type
    pub icon: &'static str,
    /// Accent color as `#RRGGBB`
    pub color: &'static str,
    /// Recommended distance between services, in km
    pub default_interval_km: u32,
}

const fn row(
    service_type: ServiceType,
    key: &'static str,
    label: &'static str,
    icon: &'static str,
    color: &'static str,
    default_interval_km: u32,
) -> ServiceTypeInfo {
    ServiceTypeInfo {
        service_type,
        key,
        label,
        icon,
        color,
        default_interval_km,
    }
}

/// The catalog, in display order. Indexed by `ServiceType as usize`.
pub const CATALOG: [ServiceTypeInfo; 10] = [
    row(ServiceType::OilChange, "oil_change", "Oil Change", "drop.fill", "#D9A61A", 6000),
    row(
        ServiceType::OilFilter,
        "oil_filter",
        "Oil Filter",
        "line.3.horizontal.decrease.circle.fill",
        "#FF9500",
        12000,
    ),
    row(ServiceType::AirFilter, "air_filter", "Air Filter", "wind", "#32ADE6", 20000),
    row(ServiceType::SparkPlugs, "spark_plugs", "Spark Plugs", "bolt.fill", "#FFCC00", 20000),
    row(ServiceType::Chain, "chain", "Chain & Sprockets", "link", "#B3B3B3", 25000),
    row(ServiceType::Tires, "tires", "Tires", "circle.circle.fill", "#80808C", 15000),
    row(ServiceType::Brakes, "brakes", "Brake Pads", "stop.circle.fill", "#E63326", 20000),
    row(ServiceType::Coolant, "coolant", "Coolant", "thermometer.medium", "#33B3E6", 30000),
    row(ServiceType::Battery, "battery", "Battery", "battery.75percent", "#4DD94D", 40000),
    row(
        ServiceType::General,
        "general",
        "General",
        "wrench.and.screwdriver.fill",
        "#99999E",
        10000,
    ),
];

impl ServiceType {
    /// All service types in catalog order
    pub fn all() -> impl Iterator<Item = ServiceType> {
        CATALOG.iter().map(|info| info.service_type)
    }

    /// Catalog row for this type
    pub fn info(self) -> &'static ServiceTypeInfo {
        &CATALOG[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn icon(self) -> &'static str {
        self.info().icon
    }

    pub fn color(self) -> &'static str {
        self.info().color
    }

    pub fn default_interval_km(self) -> u32 {
        self.info().default_interval_km
    }

    /// Parse a service type from its key or label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase().replace(['-', ' '], "_");
        CATALOG
            .iter()
            .find(|info| {
                info.key == needle || info.label.to_lowercase().replace(' ', "_") == needle
            })
            .map(|info| info.service_type)
    }
}

impl Default for ServiceType {
    fn default() -> Self {
        Self::General
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_rows_match_their_index() {
        for (i, info) in CATALOG.iter().enumerate() {
            assert_eq!(info.service_type as usize, i);
            assert!(info.default_interval_km > 0);
            assert!(info.color.starts_with('#') && info.color.len() == 7);
        }
        assert_eq!(ServiceType::all().count(), CATALOG.len());
    }

    #[test]
    fn test_default_intervals() {
        assert_eq!(ServiceType::OilChange.default_interval_km(), 6000);
        assert_eq!(ServiceType::OilFilter.default_interval_km(), 12000);
        assert_eq!(ServiceType::Chain.default_interval_km(), 25000);
        assert_eq!(ServiceType::Tires.default_interval_km(), 15000);
        assert_eq!(ServiceType::Battery.default_interval_km(), 40000);
        assert_eq!(ServiceType::General.default_interval_km(), 10000);
    }

    #[test]
    fn test_key_matches_serde() {
        for service_type in ServiceType::all() {
            let json = serde_json::to_string(&service_type).unwrap();
            assert_eq!(json, format!("\"{}\"", service_type.key()));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(ServiceType::parse("oil_change"), Some(ServiceType::OilChange));
        assert_eq!(ServiceType::parse("Oil Change"), Some(ServiceType::OilChange));
        assert_eq!(ServiceType::parse("spark-plugs"), Some(ServiceType::SparkPlugs));
        assert_eq!(ServiceType::parse("BRAKE PADS"), Some(ServiceType::Brakes));
        assert_eq!(ServiceType::parse("chain & sprockets"), Some(ServiceType::Chain));
        assert_eq!(ServiceType::parse("wheelie bar"), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(ServiceType::Chain.to_string(), "Chain & Sprockets");
    }
}
