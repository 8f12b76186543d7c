use serde::{Deserialize, Serialize};

/// One page of a paginated Open5e collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether the server holds more records than this page returned
    pub fn is_truncated(&self) -> bool {
        self.next.is_some()
    }
}

/// An armor record from `/armor/`
///
/// Upstream sends `null` for fields it has no value for, so everything past
/// the identifiers is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Open5eArmor {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub ac_string: Option<String>,
    #[serde(default)]
    pub strength_requirement: Option<u32>,
    #[serde(default)]
    pub stealth_disadvantage: Option<bool>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(rename = "document__title", default)]
    pub document_title: Option<String>,
}

/// A magic item record from `/magicitems/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Open5eMagicItem {
    pub slug: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    /// Usually a free-text string such as "requires attunement by a wizard"
    #[serde(default)]
    pub requires_attunement: serde_json::Value,
    #[serde(rename = "document__title", default)]
    pub document_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armor_page_deserialize() {
        let json = r#"{
            "count": 2,
            "next": null,
            "results": [
                {
                    "slug": "plate",
                    "name": "Plate",
                    "category": "Heavy Armor",
                    "cost": "1500 gp",
                    "ac_string": "18",
                    "strength_requirement": 15,
                    "stealth_disadvantage": true,
                    "weight": "65 lb.",
                    "document__title": "5e Core Rules"
                },
                {
                    "slug": "leather",
                    "name": "Leather",
                    "category": "Light Armor",
                    "cost": "10 gp",
                    "ac_string": "11 + Dex modifier",
                    "strength_requirement": null,
                    "stealth_disadvantage": false,
                    "weight": "10 lb.",
                    "document__title": "5e Core Rules"
                }
            ]
        }"#;

        let page: Page<Open5eArmor> = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, Some(2));
        assert!(!page.is_truncated());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].slug, "plate");
        assert_eq!(page.results[0].strength_requirement, Some(15));
        assert_eq!(page.results[0].document_title.as_deref(), Some("5e Core Rules"));
        assert!(page.results[1].strength_requirement.is_none());
        assert_eq!(page.results[1].stealth_disadvantage, Some(false));
    }

    #[test]
    fn test_magic_item_minimal_json() {
        let json = r#"{"slug": "x", "name": "X"}"#;
        let item: Open5eMagicItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.slug, "x");
        assert!(item.desc.is_none());
        assert!(item.rarity.is_none());
        assert!(item.requires_attunement.is_null());
    }

    #[test]
    fn test_magic_item_type_rename() {
        let json = r#"{
            "slug": "bag-of-holding",
            "name": "Bag of Holding",
            "type": "Wondrous item",
            "desc": "This bag has an interior space.",
            "rarity": "uncommon",
            "requires_attunement": "",
            "document__title": "5e Core Rules"
        }"#;
        let item: Open5eMagicItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type.as_deref(), Some("Wondrous item"));
        assert_eq!(item.requires_attunement, serde_json::Value::String(String::new()));
    }

    #[test]
    fn test_null_fields_keep_the_whole_page() {
        let armor = r#"{
            "count": 2,
            "next": null,
            "results": [
                {"slug": "padded", "name": "Padded", "category": "Light Armor",
                 "ac_string": "11 + Dex modifier", "stealth_disadvantage": true},
                {"slug": "ring-mail", "name": "Ring Mail", "category": null,
                 "ac_string": null, "strength_requirement": null,
                 "stealth_disadvantage": null, "cost": null, "weight": null}
            ]
        }"#;
        let page: Page<Open5eArmor> = serde_json::from_str(armor).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].stealth_disadvantage, Some(true));
        assert_eq!(page.results[1].slug, "ring-mail");
        assert!(page.results[1].category.is_none());
        assert!(page.results[1].stealth_disadvantage.is_none());

        let magic = r#"{
            "results": [
                {"slug": "wand-of-web", "name": "Wand of Web", "desc": "This wand has 7 charges."},
                {"slug": "mystery-box", "name": "Mystery Box", "type": null, "desc": null,
                 "rarity": null, "requires_attunement": null, "document__title": null}
            ]
        }"#;
        let page: Page<Open5eMagicItem> = serde_json::from_str(magic).unwrap();
        let slugs: Vec<_> = page.results.iter().map(|m| m.slug.as_str()).collect();
        assert_eq!(slugs, vec!["wand-of-web", "mystery-box"]);
        assert!(page.results[1].desc.is_none());
        assert!(page.results[1].requires_attunement.is_null());
    }

    #[test]
    fn test_page_with_next_link_is_truncated() {
        let json = r#"{
            "count": 3,
            "next": "https://api.open5e.com/v1/armor/?limit=1&offset=1",
            "results": [{"slug": "hide", "name": "Hide"}]
        }"#;
        let page: Page<Open5eArmor> = serde_json::from_str(json).unwrap();
        assert!(page.is_truncated());
        assert_eq!(page.count, Some(3));
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn test_page_without_results_is_rejected() {
        let json = r#"{"detail": "Not found."}"#;
        assert!(serde_json::from_str::<Page<Open5eArmor>>(json).is_err());
    }
}
