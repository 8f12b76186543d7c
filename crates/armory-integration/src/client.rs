use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::IntegrationError;
use crate::open5e::Open5eApi;
use crate::types::{Open5eArmor, Open5eMagicItem};

/// A non-blocking handle to an in-flight async request.
/// Call `wait()` at the join point.
pub struct PendingRequest<T> {
    receiver: mpsc::Receiver<Result<T, IntegrationError>>,
}

impl<T> PendingRequest<T> {
    /// Wrap the receiving end of a channel some task will answer on.
    pub fn from_receiver(receiver: mpsc::Receiver<Result<T, IntegrationError>>) -> Self {
        Self { receiver }
    }

    /// A request that has already finished with `result`.
    pub fn ready(result: Result<T, IntegrationError>) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Blocking wait for the result.
    /// A task that dies without answering reports as a network error.
    pub fn wait(self) -> Result<T, IntegrationError> {
        self.receiver.recv().map_err(|_| IntegrationError::Network("Channel closed".into()))?
    }
}

/// Facade for all Open5e interactions.
/// Owns a background tokio runtime and dispatches async work via channels.
pub struct IntegrationClient {
    runtime: tokio::runtime::Runtime,
    api: Arc<Open5eApi>,
    online: Arc<AtomicBool>,
}

impl IntegrationClient {
    /// Create a new integration client with a background tokio runtime.
    pub fn new(config: ApiConfig) -> Result<Self, IntegrationError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| IntegrationError::Network(format!("Failed to create runtime: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                IntegrationError::Network(format!("Failed to create HTTP client: {}", e))
            })?;

        debug!("Integration client targeting {}", config.base_url);

        Ok(Self {
            runtime,
            api: Arc::new(Open5eApi::new(client, config)),
            online: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Start fetching the armor collection.
    pub fn fetch_armor(&self) -> PendingRequest<Vec<Open5eArmor>> {
        let (tx, rx) = mpsc::channel();
        let api = Arc::clone(&self.api);
        let online = Arc::clone(&self.online);

        self.runtime.spawn(async move {
            let result = api.list_armor().await;
            record_reachability(&online, &result);
            let _ = tx.send(result);
        });

        PendingRequest { receiver: rx }
    }

    /// Start fetching the magic item collection.
    pub fn fetch_magic_items(&self) -> PendingRequest<Vec<Open5eMagicItem>> {
        let (tx, rx) = mpsc::channel();
        let api = Arc::clone(&self.api);
        let online = Arc::clone(&self.online);

        self.runtime.spawn(async move {
            let result = api.list_magic_items().await;
            record_reachability(&online, &result);
            let _ = tx.send(result);
        });

        PendingRequest { receiver: rx }
    }

    /// Whether the server appears to be online (based on last request result).
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }
}

fn record_reachability<T>(online: &AtomicBool, result: &Result<T, IntegrationError>) {
    match result {
        Ok(_) => online.store(true, Ordering::Relaxed),
        Err(IntegrationError::Offline) | Err(IntegrationError::Timeout) => {
            online.store(false, Ordering::Relaxed)
        }
        _ => {}
    }
}
