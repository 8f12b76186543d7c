//! Weapon mastery registry
//!
//! Two static tables: mastery effects by name, and the effect each weapon grants.
//! The registry checks that every mapped effect exists, then indexes weapons by
//! lower-cased name so lookups are case-insensitive exact matches.

use std::collections::HashMap;
use std::sync::OnceLock;

use armory_core::Mastery;
use thiserror::Error;

/// Mastery effects as `(name, description)`
pub const MASTERY_EFFECTS: &[(&str, &str)] = &[
    (
        "Cleave",
        "If you hit a creature with a melee attack, you can make an attack roll with the weapon \
         against a second creature within 5 feet of the first that is also within your reach. On \
         a hit, the second creature takes the weapon's damage, but don't add your ability \
         modifier to it unless that modifier is negative. You can make this extra attack only \
         once per turn.",
    ),
    (
        "Graze",
        "If your attack roll misses a creature, you can deal damage to that creature equal to \
         the ability modifier you used for the attack roll. This damage is the same type as the \
         weapon's damage.",
    ),
    (
        "Nick",
        "When you make the extra attack of the Light property, you can make it as part of the \
         Attack action instead of as a Bonus Action. You can make this extra attack only once \
         per turn.",
    ),
    (
        "Push",
        "If you hit a creature with an attack roll, you can push the creature up to 10 feet \
         straight away from you if it is Large or smaller.",
    ),
    (
        "Sap",
        "If you hit a creature with an attack roll, that creature has Disadvantage on its next \
         attack roll before the start of your next turn.",
    ),
    (
        "Slow",
        "If you hit a creature with an attack roll and deal damage, you can reduce its Speed by \
         10 feet until the start of your next turn. If you hit the creature more than once, this \
         Speed reduction doesn't stack.",
    ),
    (
        "Topple",
        "If you hit a creature with an attack roll, you can force it to make a Constitution \
         saving throw (DC 8 + your Proficiency Bonus + the ability modifier used for the attack \
         roll). On a failed save, the creature has the Prone condition.",
    ),
    (
        "Vex",
        "If you hit a creature with an attack roll and deal damage, you have Advantage on your \
         next attack roll against that creature before the end of your next turn.",
    ),
];

/// Weapon name to mastery effect name
pub const WEAPON_MASTERIES: &[(&str, &str)] = &[
    (
        "Battleaxe",
        "Topple",
    ),
    (
        "Club",
        "Slow",
    ),
    (
        "Dagger",
        "Nick",
    ),
    (
        "Flail",
        "Sap",
    ),
    (
        "Glaive",
        "Graze",
    ),
    (
        "Greataxe",
        "Cleave",
    ),
    (
        "Greatsword",
        "Graze",
    ),
    (
        "Halberd",
        "Cleave",
    ),
    (
        "Handaxe",
        "Vex",
    ),
    (
        "Javelin",
        "Slow",
    ),
    ("Light Hammer", "Nick"),
    (
        "Longsword",
        "Sap",
    ),
    (
        "Maul",
        "Topple",
    ),
    (
        "Morningstar",
        "Sap",
    ),
    (
        "Pike",
        "Push",
    ),
    (
        "Quarterstaff",
        "Topple",
    ),
    (
        "Rapier",
        "Vex",
    ),
    (
        "Scimitar",
        "Nick",
    ),
    (
        "Shortsword",
        "Vex",
    ),
    (
        "Sickle",
        "Nick",
    ),
    (
        "Spear",
        "Sap",
    ),
    (
        "Trident",
        "Topple",
    ),
    ("War Pick", "Sap"),
    (
        "Warhammer",
        "Push",
    ),
    (
        "Whip",
        "Slow",
    ),
    (
        "Blowgun",
        "Vex",
    ),
    ("Hand Crossbow", "Vex"),
    ("Heavy Crossbow", "Push"),
    ("Light Crossbow", "Slow"),
    (
        "Dart",
        "Vex",
    ),
    (
        "Longbow",
        "Slow",
    ),
    (
        "Shortbow",
        "Vex",
    ),
    (
        "Sling",
        "Slow",
    ),
    (
        "Musket",
        "Slow",
    ),
    (
        "Pistol",
        "Vex",
    ),
    (
        "Greatclub",
        "Push",
    ),
    (
        "Lance",
        "Topple",
    ),
    (
        "Mace",
        "Sap",
    ),
];

/// The two mastery tables disagree
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Weapon '{weapon}' maps to unknown mastery '{effect}'")]
    UnknownEffect { weapon: String, effect: String },
}

/// Validated, pre-indexed mastery tables
#[derive(Debug, Clone)]
pub struct MasteryRegistry {
    effects: HashMap<String, Mastery>,
    /// Lower-cased weapon name to resolved effect
    by_weapon: HashMap<String, Mastery>,
}

impl MasteryRegistry {
    /// Build a registry, rejecting weapons mapped to an effect that doesn't exist.
    pub fn from_tables(
        effects: &[(&str, &str)],
        weapons: &[(&str, &str)],
    ) -> Result<Self, RegistryError> {
        let effects: HashMap<String, Mastery> = effects
            .iter()
            .map(|(name, description)| (name.to_string(), Mastery::new(*name, *description)))
            .collect();

        let mut by_weapon = HashMap::with_capacity(weapons.len());
        for (weapon, effect) in weapons {
            let mastery = effects.get(*effect).ok_or_else(|| RegistryError::UnknownEffect {
                weapon: weapon.to_string(),
                effect: effect.to_string(),
            })?;
            by_weapon.insert(weapon.to_lowercase(), mastery.clone());
        }

        Ok(Self { effects, by_weapon })
    }

    /// The process-wide registry built from the static tables.
    ///
    /// # Panics
    /// If a weapon in `WEAPON_MASTERIES` names an effect missing from
    /// `MASTERY_EFFECTS`. The tables are compiled in, so this is a build defect.
    pub fn global() -> &'static MasteryRegistry {
        static REGISTRY: OnceLock<MasteryRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            match MasteryRegistry::from_tables(MASTERY_EFFECTS, WEAPON_MASTERIES) {
                Ok(registry) => registry,
                Err(e) => panic!("Mastery tables are out of sync: {}", e),
            }
        })
    }

    /// Mastery granted by `weapon_name`, ignoring case. `None` if it grants none.
    pub fn lookup(&self, weapon_name: &str) -> Option<&Mastery> {
        self.by_weapon.get(&weapon_name.to_lowercase())
    }

    /// Effect definition by exact effect name
    pub fn effect(&self, name: &str) -> Option<&Mastery> {
        self.effects.get(name)
    }

    /// All effect definitions, in no particular order
    pub fn effects(&self) -> impl Iterator<Item = &Mastery> {
        self.effects.values()
    }

    /// Number of weapons with a registered mastery
    pub fn len(&self) -> usize {
        self.by_weapon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_weapon.is_empty()
    }
}
