//! Configured service intervals

use serde::{Deserialize, Serialize};

use super::ids::IntervalId;
use super::service_type::ServiceType;

/// Recommended distance between two services of one type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInterval {
    pub id: IntervalId,

    #[serde(rename = "type")]
    pub service_type: ServiceType,

    pub interval_km: u32,
}

impl ServiceInterval {
    pub fn new(service_type: ServiceType, interval_km: u32) -> Self {
        Self {
            id: IntervalId::new(),
            service_type,
            interval_km,
        }
    }

    /// One row per catalog type at its default interval
    pub fn defaults() -> Vec<Self> {
        ServiceType::all()
            .map(|t| Self::new(t, t.default_interval_km()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_catalog() {
        let defaults = ServiceInterval::defaults();
        assert_eq!(defaults.len(), ServiceType::all().count());
        for interval in &defaults {
            assert_eq!(interval.interval_km, interval.service_type.default_interval_km());
        }
    }
}
