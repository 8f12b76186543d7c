//! Fault-tolerant remote fetches
//!
//! Every failure is caught here, logged, and turned into a `SourceOutcome`.
//! Nothing above this module sees an `IntegrationError`.

use armory_core::Item;
use armory_integration::{IntegrationError, Open5eArmor, Open5eMagicItem, PendingRequest};
use serde::Serialize;
use tracing::{debug, error};

use crate::conversion::{armor_to_item, magic_item_to_item};

/// What one remote source produced
#[derive(Debug)]
pub enum SourceOutcome {
    Loaded(Vec<Item>),
    Failed(IntegrationError),
}

/// Serializable summary of a `SourceOutcome`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SourceStatus {
    Loaded { count: usize },
    Failed { message: String },
}

impl SourceOutcome {
    /// Convert fetched records, or log the failure
    pub fn from_result<T>(
        label: &str,
        result: Result<Vec<T>, IntegrationError>,
        convert: impl Fn(&T) -> Item,
    ) -> Self {
        match result {
            Ok(records) => {
                debug!("Loaded {} {} records", records.len(), label);
                Self::Loaded(records.iter().map(convert).collect())
            }
            Err(e) => {
                error!("Error fetching {}: {}", label, e);
                Self::Failed(e)
            }
        }
    }

    pub fn status(&self) -> SourceStatus {
        match self {
            Self::Loaded(items) => SourceStatus::Loaded { count: items.len() },
            Self::Failed(e) => SourceStatus::Failed { message: e.to_string() },
        }
    }

    /// The fetched items, or nothing if the fetch failed
    pub fn into_items(self) -> Vec<Item> {
        match self {
            Self::Loaded(items) => items,
            Self::Failed(_) => Vec::new(),
        }
    }
}

/// Wait for an armor request and convert its records
pub fn resolve_armor(request: PendingRequest<Vec<Open5eArmor>>) -> SourceOutcome {
    SourceOutcome::from_result("armor", request.wait(), armor_to_item)
}

/// Wait for a magic item request and convert its records
pub fn resolve_magic_items(request: PendingRequest<Vec<Open5eMagicItem>>) -> SourceOutcome {
    SourceOutcome::from_result("magic items", request.wait(), magic_item_to_item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leather() -> Open5eArmor {
        serde_json::from_str(
            r#"{"slug": "leather", "name": "Leather", "category": "Light Armor",
                "ac_string": "11 + Dex modifier"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_loaded_outcome() {
        let outcome = resolve_armor(PendingRequest::ready(Ok(vec![leather()])));
        assert_eq!(outcome.status(), SourceStatus::Loaded { count: 1 });
        let items = outcome.into_items();
        assert_eq!(items[0].description, "Light Armor. AC: 11 + Dex modifier.");
    }

    #[test]
    fn test_failed_outcome_degrades_to_empty() {
        let outcome = resolve_magic_items(PendingRequest::ready(Err(IntegrationError::Offline)));
        match outcome.status() {
            SourceStatus::Failed { message } => assert!(message.contains("offline")),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(outcome.into_items().is_empty());
    }

    #[test]
    fn test_status_serializes_with_tag() {
        let json = serde_json::to_string(&SourceStatus::Loaded { count: 3 }).unwrap();
        assert_eq!(json, r#"{"status":"loaded","count":3}"#);
    }
}
