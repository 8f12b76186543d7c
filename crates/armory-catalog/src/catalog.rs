//! Item catalog: local weapons plus remote armor and magic items

use std::collections::HashMap;

use armory_core::{Item, ItemKind};
use armory_integration::{IntegrationClient, Open5eArmor, Open5eMagicItem, PendingRequest};
use serde::Serialize;
use tracing::{info, warn};

use crate::fetch::{resolve_armor, resolve_magic_items, SourceStatus};
use crate::weapon::weapons;

/// Anything that can start the two remote fetches.
pub trait CatalogSource {
    fn fetch_armor(&self) -> PendingRequest<Vec<Open5eArmor>>;
    fn fetch_magic_items(&self) -> PendingRequest<Vec<Open5eMagicItem>>;
}

impl CatalogSource for IntegrationClient {
    fn fetch_armor(&self) -> PendingRequest<Vec<Open5eArmor>> {
        IntegrationClient::fetch_armor(self)
    }

    fn fetch_magic_items(&self) -> PendingRequest<Vec<Open5eMagicItem>> {
        IntegrationClient::fetch_magic_items(self)
    }
}

/// The aggregated items along with how each remote source fared
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReport {
    pub items: Vec<Item>,
    pub weapon_count: usize,
    pub armor: SourceStatus,
    pub magic_items: SourceStatus,
}

impl CatalogReport {
    /// Whether both remote sources loaded
    pub fn is_complete(&self) -> bool {
        matches!(self.armor, SourceStatus::Loaded { .. })
            && matches!(self.magic_items, SourceStatus::Loaded { .. })
    }
}

/// Build the catalog and report on each source.
///
/// Both remote fetches are started before either is awaited. Output order is
/// weapons, then armor, then magic items, each in source order.
pub fn build_report<S: CatalogSource + ?Sized>(source: &S) -> CatalogReport {
    let armor_request = source.fetch_armor();
    let magic_request = source.fetch_magic_items();

    let armor = resolve_armor(armor_request);
    let magic_items = resolve_magic_items(magic_request);

    let local = weapons();
    let armor_status = armor.status();
    let magic_status = magic_items.status();

    let mut items = Vec::with_capacity(local.len());
    items.extend_from_slice(local);
    items.extend(armor.into_items());
    items.extend(magic_items.into_items());

    warn_duplicate_ids(&items);
    info!(
        "Catalog built: {} items ({} weapons, armor {:?}, magic items {:?})",
        items.len(),
        local.len(),
        armor_status,
        magic_status
    );

    CatalogReport {
        items,
        weapon_count: local.len(),
        armor: armor_status,
        magic_items: magic_status,
    }
}

/// Build the catalog. Remote failures only shrink the result.
pub fn build_catalog<S: CatalogSource + ?Sized>(source: &S) -> Vec<Item> {
    build_report(source).items
}

/// Ids that appear more than once. Duplicates are kept, only reported.
fn warn_duplicate_ids(items: &[Item]) {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(items.len());
    for item in items {
        *seen.entry(item.id.as_str()).or_insert(0) += 1;
    }
    for (id, count) in seen.into_iter().filter(|(_, count)| *count > 1) {
        warn!("Catalog id '{}' appears {} times", id, count);
    }
}

/// A read-only view over an aggregated catalog.
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Wrap an already aggregated item list.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Aggregate from `source` and wrap the result.
    pub fn load<S: CatalogSource + ?Sized>(source: &S) -> Self {
        Self::from_items(build_catalog(source))
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// First item with `id`.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Filter items by kind, keeping catalog order.
    pub fn items_by_kind(&self, kind: ItemKind) -> Vec<&Item> {
        self.items.iter().filter(|item| item.kind == kind).collect()
    }

    /// Items that came from the weapon table.
    pub fn weapons(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_weapon()).collect()
    }

    /// Case-insensitive substring match on names.
    pub fn search(&self, query: &str) -> Vec<&Item> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
