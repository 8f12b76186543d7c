//! Armory Integration - Open5e API client
//!
//! Fetches the armor and magic item collections that complement the local weapon table.

pub mod error;
pub mod config;
pub mod types;
pub mod open5e;
pub mod client;

pub use client::{IntegrationClient, PendingRequest};
pub use config::ApiConfig;
pub use error::IntegrationError;
pub use open5e::Open5eApi;
pub use types::*;
