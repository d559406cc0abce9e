//! Actress-specific resource wiring.

pub mod entity;

use std::sync::Arc;

use crate::clients::ActressClient;
use crate::framework::{random_local_id, DiagnosticSink, ResourceClient, Transport};

/// Creates a new Actress client over `transport`, reporting to `sink`.
pub fn new(transport: Arc<dyn Transport>, sink: Arc<dyn DiagnosticSink>) -> ActressClient {
    let generic_client = ResourceClient::new(transport, sink, random_local_id);
    ActressClient::new(generic_client)
}
