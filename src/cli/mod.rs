//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod bike;
pub mod export;
pub mod fuel;
pub mod interval;
pub mod report;
pub mod service;

pub use bike::{handle_bike_command, BikeCommands};
pub use export::handle_export_command;
pub use fuel::{handle_fuel_command, FuelCommands};
pub use interval::{handle_interval_command, IntervalCommands};
pub use report::{handle_stats_command, handle_status_command};
pub use service::{handle_service_command, ServiceCommands};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{MotoError, MotoResult};

/// Parse an optional `YYYY-MM-DD` argument
pub(crate) fn parse_date_arg(date: Option<&str>) -> MotoResult<Option<NaiveDate>> {
    date.map(|d| {
        NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").map_err(|_| {
            MotoError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", d))
        })
    })
    .transpose()
}

/// Whether `ident` names the entity with `uuid`
///
/// Accepts the full UUID, the short listing form (`svc-1a2b3c4d`), or the
/// listing prefix followed by more hex digits.
pub(crate) fn id_matches(uuid: &Uuid, prefix: &str, ident: &str) -> bool {
    let ident = ident.trim().to_lowercase();
    if ident.is_empty() {
        return false;
    }
    if let Ok(parsed) = Uuid::parse_str(&ident) {
        return &parsed == uuid;
    }
    let hex = ident.strip_prefix(prefix).unwrap_or(&ident).replace('-', "");
    hex.len() >= 4 && uuid.simple().to_string().starts_with(&hex)
}

/// Pick the single item whose id matches `ident`
pub(crate) fn resolve_unique<T, F>(
    items: &[T],
    ident: &str,
    entity_type: &'static str,
    matches: F,
) -> MotoResult<usize>
where
    F: Fn(&T) -> bool,
{
    let found: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(item))
        .map(|(i, _)| i)
        .collect();

    match found.as_slice() {
        [index] => Ok(*index),
        [] => Err(MotoError::NotFound {
            entity_type,
            identifier: ident.to_string(),
        }),
        _ => Err(MotoError::Validation(format!(
            "'{}' matches {} entries; use a longer ID",
            ident,
            found.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(parse_date_arg(None).unwrap(), None);
        assert_eq!(
            parse_date_arg(Some("2025-02-28")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
        assert!(parse_date_arg(Some("28/02/2025")).unwrap_err().is_validation());
    }

    #[test]
    fn test_id_matches() {
        let uuid = Uuid::parse_str("1a2b3c4d-0000-4000-8000-000000000000").unwrap();
        assert!(id_matches(&uuid, "svc-", "svc-1a2b3c4d"));
        assert!(id_matches(&uuid, "svc-", "1A2B3C4D"));
        assert!(id_matches(&uuid, "svc-", "1a2b3c4d-0000-4000-8000-000000000000"));
        assert!(!id_matches(&uuid, "svc-", "svc-1a2"));
        assert!(!id_matches(&uuid, "svc-", "svc-ffff"));
        assert!(!id_matches(&uuid, "svc-", ""));
    }

    #[test]
    fn test_resolve_unique() {
        let items = vec!["abc1", "abc2", "xyz"];
        assert_eq!(resolve_unique(&items, "xyz", "Item", |i| i.starts_with("xyz")).unwrap(), 2);
        assert!(resolve_unique(&items, "abc", "Item", |i| i.starts_with("abc"))
            .unwrap_err()
            .is_validation());
        assert!(resolve_unique(&items, "q", "Item", |i| i.starts_with('q'))
            .unwrap_err()
            .is_not_found());
    }
}
