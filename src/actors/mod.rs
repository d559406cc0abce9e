//! Actor-specific resource wiring.

pub mod entity;

use std::sync::Arc;

use crate::clients::ActorClient;
use crate::framework::{random_local_id, DiagnosticSink, ResourceClient, Transport};

/// Creates a new Actor client over `transport`, reporting to `sink`.
pub fn new(transport: Arc<dyn Transport>, sink: Arc<dyn DiagnosticSink>) -> ActorClient {
    let generic_client = ResourceClient::new(transport, sink, random_local_id);
    ActorClient::new(generic_client)
}
