//! Armory Catalog
//!
//! Builds the unified item catalog: the local weapon table with masteries,
//! plus armor and magic items converted from Open5e.

pub mod catalog;
pub mod conversion;
pub mod fetch;
pub mod mastery;
pub mod weapon;

pub use catalog::{build_catalog, build_report, CatalogReport, CatalogSource, ItemCatalog};
pub use fetch::{SourceOutcome, SourceStatus};
pub use mastery::{MasteryRegistry, RegistryError};
pub use weapon::{derive_damage_mod, slug_id, weapons, WeaponCategory, WeaponSpec};
