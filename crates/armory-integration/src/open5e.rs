//! Open5e collection client for armor and magic items

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::IntegrationError;
use crate::types::{Open5eArmor, Open5eMagicItem, Page};

const ARMOR_COLLECTION: &str = "armor";
const MAGIC_ITEM_COLLECTION: &str = "magicitems";

/// Read-only API client for the Open5e collections
pub struct Open5eApi {
    client: Client,
    config: ApiConfig,
}

impl Open5eApi {
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Fetch one page of armor records
    pub async fn list_armor(&self) -> Result<Vec<Open5eArmor>, IntegrationError> {
        self.list(ARMOR_COLLECTION, self.config.armor_page_size).await
    }

    /// Fetch one page of magic item records
    pub async fn list_magic_items(&self) -> Result<Vec<Open5eMagicItem>, IntegrationError> {
        self.list(MAGIC_ITEM_COLLECTION, self.config.magic_item_page_size).await
    }

    async fn list<T: DeserializeOwned>(
        &self,
        collection: &str,
        limit: u32,
    ) -> Result<Vec<T>, IntegrationError> {
        let url = self.config.collection_url(collection, limit);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        let page: Page<T> = handle_response(response).await?;
        debug!("Fetched {} {} records", page.results.len(), collection);
        if page.is_truncated() {
            warn!(
                "Only {} of {} {} records fit in one page; raise the page size above {}",
                page.results.len(),
                page.count.map_or_else(|| "more".to_string(), |c| c.to_string()),
                collection,
                limit
            );
        }
        Ok(page.results)
    }
}

async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, IntegrationError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(IntegrationError::ServerError {
            status: status.as_u16(),
            message: text,
        });
    }
    // Decode separately so a malformed body reports as a serialization error
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
