//! Connection settings for the Open5e API

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.open5e.com/v1";
pub const DEFAULT_ARMOR_PAGE_SIZE: u32 = 500;
pub const DEFAULT_MAGIC_ITEM_PAGE_SIZE: u32 = 5000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to fetch remote collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root, without a trailing collection path
    pub base_url: String,
    /// `limit` sent with the armor request
    pub armor_page_size: u32,
    /// `limit` sent with the magic item request
    pub magic_item_page_size: u32,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            armor_page_size: DEFAULT_ARMOR_PAGE_SIZE,
            magic_item_page_size: DEFAULT_MAGIC_ITEM_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Config pointing at another API root, keeping default page sizes
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// URL for one page of `collection`
    pub fn collection_url(&self, collection: &str, limit: u32) -> String {
        format!("{}/{}/?limit={}", self.base_url.trim_end_matches('/'), collection, limit)
    }
}
