//! Maintenance status engine
//!
//! Derives, per service type, the last qualifying service, the distance left
//! until the next one is due, an urgency classification and a gauge value.
//! Every query is pure and total: missing data degrades to `Unknown`, `None`
//! or `0.0`, never to an error.

use crate::models::{ServiceInterval, ServiceRecord, ServiceType, Urgency};
use crate::storage::{Garage, KeyValueStore};

/// Share of the interval under which a service counts as due soon (1/5)
pub const SOON_DIVISOR: u32 = 5;

/// Status queries over one snapshot of the service log
#[derive(Debug, Clone, Copy)]
pub struct StatusEngine<'a> {
    services: &'a [ServiceRecord],
    intervals: &'a [ServiceInterval],
    current_mileage: u32,
}

/// Everything the engine knows about one service type
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceStatus<'a> {
    pub service_type: ServiceType,
    pub last_service: Option<&'a ServiceRecord>,
    pub interval_km: u32,
    /// Odometer reading at which the next service is due
    pub next_due_mileage: Option<i64>,
    /// Negative when overdue
    pub distance_until_due: Option<i64>,
    pub urgency: Urgency,
    pub gauge_fraction: f64,
}

impl<'a> StatusEngine<'a> {
    pub fn new(
        services: &'a [ServiceRecord],
        intervals: &'a [ServiceInterval],
        current_mileage: u32,
    ) -> Self {
        Self {
            services,
            intervals,
            current_mileage,
        }
    }

    /// Engine over the garage's log and the active bike's odometer
    pub fn for_garage<S: KeyValueStore>(garage: &'a Garage<S>) -> Self {
        Self::new(
            garage.services(),
            garage.intervals(),
            garage.current_mileage(),
        )
    }

    pub fn current_mileage(&self) -> u32 {
        self.current_mileage
    }

    /// The record of `service_type` with the highest mileage
    ///
    /// Ties on mileage go to the later date; a full tie keeps the record
    /// that comes first in the log.
    pub fn last_service(&self, service_type: ServiceType) -> Option<&'a ServiceRecord> {
        self.services
            .iter()
            .filter(|s| s.service_type == service_type)
            .fold(None, |best: Option<&'a ServiceRecord>, record| match best {
                Some(b) if (record.mileage, record.date) <= (b.mileage, b.date) => Some(b),
                _ => Some(record),
            })
    }

    /// Configured interval, or the catalog default when none is set
    pub fn interval_for(&self, service_type: ServiceType) -> u32 {
        self.intervals
            .iter()
            .find(|i| i.service_type == service_type)
            .map(|i| i.interval_km)
            .unwrap_or_else(|| service_type.default_interval_km())
    }

    pub fn next_due_mileage(&self, service_type: ServiceType) -> Option<i64> {
        let last = self.last_service(service_type)?;
        Some(i64::from(last.mileage) + i64::from(self.interval_for(service_type)))
    }

    pub fn distance_until_due(&self, service_type: ServiceType) -> Option<i64> {
        self.next_due_mileage(service_type)
            .map(|due| due - i64::from(self.current_mileage))
    }

    pub fn urgency(&self, service_type: ServiceType) -> Urgency {
        let Some(left) = self.distance_until_due(service_type) else {
            return Urgency::Unknown;
        };
        let soon_threshold = i64::from(self.interval_for(service_type) / SOON_DIVISOR);

        if left <= 0 {
            Urgency::Overdue
        } else if left <= soon_threshold {
            Urgency::Soon
        } else {
            Urgency::Good
        }
    }

    /// Remaining service life in [0, 1]; 1 means just serviced
    pub fn gauge_fraction(&self, service_type: ServiceType) -> f64 {
        let Some(last) = self.last_service(service_type) else {
            return 0.0;
        };
        let interval = self.interval_for(service_type);
        if interval == 0 {
            return 0.0;
        }

        let used = f64::from(self.current_mileage) - f64::from(last.mileage);
        (1.0 - used / f64::from(interval)).clamp(0.0, 1.0)
    }

    pub fn status(&self, service_type: ServiceType) -> ServiceStatus<'a> {
        ServiceStatus {
            service_type,
            last_service: self.last_service(service_type),
            interval_km: self.interval_for(service_type),
            next_due_mileage: self.next_due_mileage(service_type),
            distance_until_due: self.distance_until_due(service_type),
            urgency: self.urgency(service_type),
            gauge_fraction: self.gauge_fraction(service_type),
        }
    }

    /// Status of every catalog type, in catalog order
    pub fn all_statuses(&self) -> Vec<ServiceStatus<'a>> {
        ServiceType::all().map(|t| self.status(t)).collect()
    }

    /// Number of types that are due soon or overdue
    pub fn attention_count(&self) -> usize {
        ServiceType::all()
            .filter(|t| self.urgency(*t).needs_attention())
            .count()
    }
}
