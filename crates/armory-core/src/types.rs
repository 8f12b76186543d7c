//! Core types shared by every catalog source

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed tag distinguishing how an item is grouped and rendered downstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Equipment,
    #[serde(rename = "Magic Item")]
    MagicItem,
}

impl ItemKind {
    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Equipment => "Equipment",
            Self::MagicItem => "Magic Item",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ability score(s) governing a weapon's attack and damage rolls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageMod {
    #[serde(rename = "STR")]
    Str,
    #[serde(rename = "DEX")]
    Dex,
    #[serde(rename = "STR or DEX")]
    StrOrDex,
}

impl DamageMod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::StrOrDex => "STR or DEX",
        }
    }
}

impl fmt::Display for DamageMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named weapon mastery effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mastery {
    pub name: String,
    pub description: String,
}

impl Mastery {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A single catalog entry, whichever source it came from.
///
/// Optional fields are only meaningful for some kinds: `properties`, `mastery`
/// and `damage_mod` for weapons, `attunement` and `original_type` for magic items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Upstream type label, kept verbatim for magic items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attunement: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mastery: Option<Mastery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_mod: Option<DamageMod>,
}

impl Item {
    /// Create an item with only the required fields set
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ItemKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            original_type: None,
            rarity: None,
            description: description.into(),
            properties: None,
            cost: None,
            weight: None,
            attunement: None,
            source: None,
            mastery: None,
            damage_mod: None,
        }
    }

    /// Whether this entry came from the weapon table
    pub fn is_weapon(&self) -> bool {
        self.kind == ItemKind::Equipment && self.damage_mod.is_some()
    }
}

/// Page layout used by the print view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintLayout {
    #[default]
    Single,
    Grid,
}

/// Paper size used by the print view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
}

/// Print options handed to the renderer untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintSettings {
    #[serde(default)]
    pub layout: PrintLayout,
    #[serde(default)]
    pub paper_size: PaperSize,
}
