use std::sync::Arc;
use tracing::info;

use super::CatalogConfig;
use crate::clients::{ActorClient, ActressClient};
use crate::framework::{ConfigError, DiagnosticSink, HttpTransport, TracingSink, Transport};
use crate::pairing::{self, Couple};

/// Wires one transport and one diagnostic sink into both entity clients.
///
/// `CatalogSystem` is responsible for:
/// - **Dependency Wiring**: both clients share the same transport and sink
/// - **Cross-kind operations**: pairing needs both collections
///
/// Nothing here holds state between calls; cloning the system is cheap.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(CatalogConfig::from_env()?)?;
///
/// let actress = system.actress_client.fetch_actress_by_id(1).await;
/// let actors = system.actor_client.fetch_actors_by_ids(&[1, 2, 3]).await;
/// let couple = system.create_random_couple().await;
/// ```
#[derive(Clone)]
pub struct CatalogSystem {
    /// Client for the `actresses` collection
    pub actress_client: ActressClient,

    /// Client for the `actors` collection
    pub actor_client: ActorClient,
}

impl CatalogSystem {
    /// Builds an HTTP-backed system that logs diagnostics through `tracing`.
    pub fn new(config: CatalogConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder().build()?;
        info!(base_url = %config.base_url, "Catalog system configured");
        let transport = HttpTransport::new(client, config.base_url);
        Ok(Self::with_transport(Arc::new(transport), Arc::new(TracingSink)))
    }

    /// Builds a system over any transport and sink (used by tests with `MockTransport`).
    pub fn with_transport(transport: Arc<dyn Transport>, sink: Arc<dyn DiagnosticSink>) -> Self {
        let actress_client = crate::actresses::new(transport.clone(), sink.clone());
        let actor_client = crate::actors::new(transport, sink);
        Self {
            actress_client,
            actor_client,
        }
    }

    /// Pairs a random actress with a random actor, or `None` if either collection is empty.
    pub async fn create_random_couple(&self) -> Option<Couple> {
        pairing::create_random_couple(&self.actress_client, &self.actor_client).await
    }
}
