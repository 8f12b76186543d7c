//! Conversion from Open5e records to catalog items

use armory_core::{Item, ItemKind};
use armory_integration::types::{Open5eArmor, Open5eMagicItem};
use serde_json::Value;

/// Rarity given to armor, which has no rarity upstream
pub const ARMOR_RARITY: &str = "Common";

/// Convert an Open5e armor record to a catalog item
pub fn armor_to_item(armor: &Open5eArmor) -> Item {
    let mut item = Item::new(
        armor.slug.clone(),
        armor.name.clone(),
        ItemKind::Equipment,
        armor_description(armor),
    );
    item.rarity = Some(ARMOR_RARITY.to_string());
    item.cost = armor.cost.clone();
    item.weight = armor.weight.clone();
    item.source = armor.document_title.clone();
    item
}

/// Convert an Open5e magic item record to a catalog item
pub fn magic_item_to_item(magic: &Open5eMagicItem) -> Item {
    let mut item = Item::new(
        magic.slug.clone(),
        magic.name.clone(),
        ItemKind::MagicItem,
        magic.desc.clone().unwrap_or_default(),
    );
    item.original_type = magic.item_type.clone();
    item.rarity = magic.rarity.clone();
    item.attunement = Some(is_truthy(&magic.requires_attunement));
    item.source = magic.document_title.clone();
    item
}

/// "<category>. AC: <ac>." then the stealth clause, then the strength clause.
/// Missing text fields render empty and a missing stealth flag reads as false.
fn armor_description(armor: &Open5eArmor) -> String {
    let mut description = format!(
        "{}. AC: {}.",
        armor.category.as_deref().unwrap_or_default(),
        armor.ac_string.as_deref().unwrap_or_default()
    );
    if armor.stealth_disadvantage.unwrap_or(false) {
        description.push_str(" Stealth Disadvantage.");
    }
    if let Some(strength) = armor.strength_requirement.filter(|s| *s > 0) {
        description.push_str(&format!(" Str Req: {}", strength));
    }
    description
}

/// Loose truthiness: null, false, zero and "" are false, anything else is true.
/// The string "false" is therefore true.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
