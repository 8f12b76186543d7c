//! SRD 2024 weapon table
//!
//! Weapons are authored locally rather than fetched so their properties and
//! masteries match the 2024 rules. Each table row becomes an `Item` with a derived
//! damage modifier, slug id and mastery.

use std::fmt;
use std::sync::OnceLock;

use armory_core::{DamageMod, Item, ItemKind};

use crate::mastery::MasteryRegistry;

/// Provenance label for every local weapon
pub const WEAPON_SOURCE: &str = "SRD 2024";

/// Rarity given to every local weapon
pub const WEAPON_RARITY: &str = "Common";

/// Weapon training category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponCategory {
    SimpleMelee,
    SimpleRanged,
    MartialMelee,
    MartialRanged,
}

impl WeaponCategory {
    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::SimpleMelee => "Simple Melee",
            Self::SimpleRanged => "Simple Ranged",
            Self::MartialMelee => "Martial Melee",
            Self::MartialRanged => "Martial Ranged",
        }
    }

    pub fn is_ranged(self) -> bool {
        matches!(self, Self::SimpleRanged | Self::MartialRanged)
    }
}

impl fmt::Display for WeaponCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the weapon table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponSpec {
    pub name: &'static str,
    pub cost: &'static str,
    /// Dice and damage type, e.g. "1d8 Piercing"
    pub damage: &'static str,
    pub weight: &'static str,
    pub properties: &'static [&'static str],
    pub category: WeaponCategory,
}

const fn spec(
    name: &'static str,
    cost: &'static str,
    damage: &'static str,
    weight: &'static str,
    properties: &'static [&'static str],
    category: WeaponCategory,
) -> WeaponSpec {
    WeaponSpec { name, cost, damage, weight, properties, category }
}

use self::WeaponCategory::{MartialMelee, MartialRanged, SimpleMelee, SimpleRanged};

/// Every weapon, in display order
pub const WEAPON_SPECS: &[WeaponSpec] = &[
    // Simple melee
    spec("Club", "1 sp", "1d4 Bludgeoning", "2 lb", &["Light"], SimpleMelee),
    spec(
        "Dagger",
        "2 gp",
        "1d4 Piercing",
        "1 lb",
        &["Finesse", "Light", "Thrown (range 20/60)"],
        SimpleMelee,
    ),
    spec("Greatclub", "2 sp", "1d8 Bludgeoning", "10 lb", &["Two-Handed"], SimpleMelee),
    spec(
        "Handaxe",
        "5 gp",
        "1d6 Slashing",
        "2 lb",
        &["Light", "Thrown (range 20/60)"],
        SimpleMelee,
    ),
    spec("Javelin", "5 sp", "1d6 Piercing", "2 lb", &["Thrown (range 30/120)"], SimpleMelee),
    spec(
        "Light Hammer",
        "2 gp",
        "1d4 Bludgeoning",
        "2 lb",
        &["Light", "Thrown (range 20/60)"],
        SimpleMelee,
    ),
    spec("Mace", "5 gp", "1d6 Bludgeoning", "4 lb", &[], SimpleMelee),
    spec("Quarterstaff", "2 sp", "1d6 Bludgeoning", "4 lb", &["Versatile (1d8)"], SimpleMelee),
    spec("Sickle", "1 gp", "1d4 Slashing", "2 lb", &["Light"], SimpleMelee),
    spec(
        "Spear",
        "1 gp",
        "1d6 Piercing",
        "3 lb",
        &["Thrown (range 20/60)", "Versatile (1d8)"],
        SimpleMelee,
    ),
    // Simple ranged
    spec(
        "Light Crossbow",
        "25 gp",
        "1d8 Piercing",
        "5 lb",
        &["Ammunition (range 80/320)", "Loading", "Two-Handed"],
        SimpleRanged,
    ),
    spec(
        "Dart",
        "5 cp",
        "1d4 Piercing",
        "1/4 lb",
        &["Finesse", "Thrown (range 20/60)"],
        SimpleRanged,
    ),
    spec(
        "Shortbow",
        "25 gp",
        "1d6 Piercing",
        "2 lb",
        &["Ammunition (range 80/320)", "Two-Handed"],
        SimpleRanged,
    ),
    spec("Sling", "1 sp", "1d4 Bludgeoning", "-", &["Ammunition (range 30/120)"], SimpleRanged),
    // Martial melee
    spec("Battleaxe", "10 gp", "1d8 Slashing", "4 lb", &["Versatile (1d10)"], MartialMelee),
    spec("Flail", "10 gp", "1d8 Bludgeoning", "2 lb", &[], MartialMelee),
    spec(
        "Glaive",
        "20 gp",
        "1d10 Slashing",
        "6 lb",
        &["Heavy", "Reach", "Two-Handed"],
        MartialMelee,
    ),
    spec("Greataxe", "30 gp", "1d12 Slashing", "7 lb", &["Heavy", "Two-Handed"], MartialMelee),
    spec("Greatsword", "50 gp", "2d6 Slashing", "6 lb", &["Heavy", "Two-Handed"], MartialMelee),
    spec(
        "Halberd",
        "20 gp",
        "1d10 Slashing",
        "6 lb",
        &["Heavy", "Reach", "Two-Handed"],
        MartialMelee,
    ),
    spec("Lance", "10 gp", "1d12 Piercing", "6 lb", &["Reach", "Special"], MartialMelee),
    spec("Longsword", "15 gp", "1d8 Slashing", "3 lb", &["Versatile (1d10)"], MartialMelee),
    spec("Maul", "10 gp", "2d6 Bludgeoning", "10 lb", &["Heavy", "Two-Handed"], MartialMelee),
    spec("Morningstar", "15 gp", "1d8 Piercing", "4 lb", &[], MartialMelee),
    spec("Pike", "5 gp", "1d10 Piercing", "18 lb", &["Heavy", "Reach", "Two-Handed"], MartialMelee),
    spec("Rapier", "25 gp", "1d8 Piercing", "2 lb", &["Finesse"], MartialMelee),
    spec("Scimitar", "25 gp", "1d6 Slashing", "3 lb", &["Finesse", "Light"], MartialMelee),
    spec("Shortsword", "10 gp", "1d6 Piercing", "2 lb", &["Finesse", "Light"], MartialMelee),
    spec(
        "Trident",
        "5 gp",
        "1d8 Piercing",
        "4 lb",
        &["Thrown (range 20/60)", "Versatile (1d10)"],
        MartialMelee,
    ),
    spec("War Pick", "5 gp", "1d8 Piercing", "2 lb", &[], MartialMelee),
    spec("Warhammer", "15 gp", "1d8 Bludgeoning", "2 lb", &["Versatile (1d10)"], MartialMelee),
    spec("Whip", "2 gp", "1d4 Slashing", "3 lb", &["Finesse", "Reach"], MartialMelee),
    // Martial ranged
    spec(
        "Blowgun",
        "10 gp",
        "1 Piercing",
        "1 lb",
        &["Ammunition (range 25/100)", "Loading"],
        MartialRanged,
    ),
    spec(
        "Hand Crossbow",
        "75 gp",
        "1d6 Piercing",
        "3 lb",
        &["Ammunition (range 30/120)", "Light", "Loading"],
        MartialRanged,
    ),
    spec(
        "Heavy Crossbow",
        "50 gp",
        "1d10 Piercing",
        "18 lb",
        &["Ammunition (range 100/400)", "Heavy", "Loading", "Two-Handed"],
        MartialRanged,
    ),
    spec(
        "Longbow",
        "50 gp",
        "1d8 Piercing",
        "2 lb",
        &["Ammunition (range 150/600)", "Heavy", "Two-Handed"],
        MartialRanged,
    ),
    spec(
        "Musket",
        "500 gp",
        "1d12 Piercing",
        "10 lb",
        &["Ammunition (range 40/120)", "Loading", "Two-Handed"],
        MartialRanged,
    ),
    spec(
        "Pistol",
        "250 gp",
        "1d10 Piercing",
        "3 lb",
        &["Ammunition (range 30/90)", "Loading"],
        MartialRanged,
    ),
];

/// Pick the ability score for attack and damage rolls.
///
/// Finesse wins outright. Otherwise ranged weapons use DEX unless they are
/// thrown, and everything else uses STR.
pub fn derive_damage_mod(properties: &[&str], category: WeaponCategory) -> DamageMod {
    let is_finesse = properties.iter().any(|p| p.contains("Finesse"));
    let is_thrown = properties.iter().any(|p| p.contains("Thrown"));

    if is_finesse {
        DamageMod::StrOrDex
    } else if category.is_ranged() && !is_thrown {
        DamageMod::Dex
    } else {
        DamageMod::Str
    }
}

/// Slug id for a locally authored entry: lower-cased, whitespace runs become `-`
pub fn slug_id(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Turn one table row into a catalog item
pub fn build_weapon(spec: &WeaponSpec, registry: &MasteryRegistry) -> Item {
    let mut item = Item::new(
        slug_id(spec.name),
        spec.name,
        ItemKind::Equipment,
        format!("{} Weapon. Damage: {}.", spec.category, spec.damage),
    );
    item.rarity = Some(WEAPON_RARITY.to_string());
    item.properties = Some(spec.properties.iter().map(|p| p.to_string()).collect());
    item.cost = Some(spec.cost.to_string());
    item.weight = Some(spec.weight.to_string());
    item.source = Some(WEAPON_SOURCE.to_string());
    item.mastery = registry.lookup(spec.name).cloned();
    item.damage_mod = Some(derive_damage_mod(spec.properties, spec.category));
    item
}

/// Build the table against an explicit registry
pub fn build_weapons(specs: &[WeaponSpec], registry: &MasteryRegistry) -> Vec<Item> {
    specs.iter().map(|spec| build_weapon(spec, registry)).collect()
}

/// The process-wide weapon list, built once from `WEAPON_SPECS`
pub fn weapons() -> &'static [Item] {
    static WEAPONS: OnceLock<Vec<Item>> = OnceLock::new();
    WEAPONS.get_or_init(|| build_weapons(WEAPON_SPECS, MasteryRegistry::global()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon(name: &str) -> &'static Item {
        weapons()
            .iter()
            .find(|w| w.name == name)
            .unwrap_or_else(|| panic!("{} missing from table", name))
    }

    #[test]
    fn test_damage_mod_examples() {
        assert_eq!(weapon("Rapier").damage_mod, Some(DamageMod::StrOrDex));
        assert_eq!(weapon("Longbow").damage_mod, Some(DamageMod::Dex));
        assert_eq!(weapon("Spear").damage_mod, Some(DamageMod::Str));
        assert_eq!(weapon("Dagger").damage_mod, Some(DamageMod::StrOrDex));
    }

    #[test]
    fn test_ranged_thrown_without_finesse_uses_str() {
        let m = derive_damage_mod(&["Thrown (range 30/120)"], WeaponCategory::SimpleRanged);
        assert_eq!(m, DamageMod::Str);
        // Dart is ranged and thrown but finesse wins
        assert_eq!(weapon("Dart").damage_mod, Some(DamageMod::StrOrDex));
        assert_eq!(derive_damage_mod(&[], WeaponCategory::MartialRanged), DamageMod::Dex);
        assert_eq!(derive_damage_mod(&[], WeaponCategory::MartialMelee), DamageMod::Str);
    }

    #[test]
    fn test_slug_id() {
        assert_eq!(slug_id("War Pick"), "war-pick");
        assert_eq!(slug_id(&slug_id("War Pick")), "war-pick");
        assert_eq!(slug_id("Heavy   Crossbow"), "heavy-crossbow");
        assert_eq!(weapon("Hand Crossbow").id, "hand-crossbow");
    }

    #[test]
    fn test_description_template() {
        assert_eq!(weapon("Longsword").description, "Martial Melee Weapon. Damage: 1d8 Slashing.");
        assert_eq!(weapon("Blowgun").description, "Martial Ranged Weapon. Damage: 1 Piercing.");
    }

    #[test]
    fn test_constant_fields() {
        for item in weapons() {
            assert_eq!(item.kind, ItemKind::Equipment);
            assert_eq!(item.rarity.as_deref(), Some(WEAPON_RARITY));
            assert_eq!(item.source.as_deref(), Some(WEAPON_SOURCE));
            assert!(item.attunement.is_none());
            assert!(item.is_weapon());
        }
    }

    #[test]
    fn test_table_order_and_count() {
        let items = weapons();
        assert_eq!(items.len(), WEAPON_SPECS.len());
        assert_eq!(items.len(), 38);
        for (item, spec) in items.iter().zip(WEAPON_SPECS) {
            assert_eq!(item.name, spec.name);
            assert_eq!(item.cost.as_deref(), Some(spec.cost));
            assert_eq!(item.weight.as_deref(), Some(spec.weight));
        }
        assert_eq!(items.first().unwrap().name, "Club");
        assert_eq!(items.last().unwrap().name, "Pistol");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = weapons().iter().map(|w| w.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), weapons().len());
    }

    #[test]
    fn test_every_weapon_has_mastery() {
        for item in weapons() {
            assert!(item.mastery.is_some(), "{} has no mastery", item.name);
        }
        assert_eq!(weapon("Pike").mastery.as_ref().unwrap().name, "Push");
    }

    #[test]
    fn test_unregistered_weapon_has_no_mastery() {
        let registry = MasteryRegistry::from_tables(&[("Vex", "Advantage.")], &[]).unwrap();
        let boomerang = spec(
            "Boomerang",
            "1 gp",
            "1d4 Bludgeoning",
            "1 lb",
            &["Thrown (range 60/120)"],
            SimpleRanged,
        );
        let item = build_weapon(&boomerang, &registry);
        assert!(item.mastery.is_none());
        assert_eq!(item.damage_mod, Some(DamageMod::Str));
        assert_eq!(item.properties.as_deref().map(|p| p.len()), Some(1));
    }
}
