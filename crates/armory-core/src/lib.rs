//! Armory Core - Shared types for the Armory item catalog
//!
//! This crate provides the record shapes every other crate agrees on:
//! - `Item`, the unified catalog entry
//! - `Mastery` and `DamageMod` for weapon-derived fields
//! - `PrintSettings`, passed through to renderers untouched

pub mod types;

pub use types::{DamageMod, Item, ItemKind, Mastery, PaperSize, PrintLayout, PrintSettings};
