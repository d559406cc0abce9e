//! Generic resource framework for remote performer collections.
//!
//! This module provides the building blocks for reading type-safe records from
//! a remote JSON service and reconciling them locally.
//!
//! # Main Components
//!
//! - [`RemoteEntity`] - Trait that record kinds implement to be served by a client
//! - [`ResourceClient`] - Generic client: fetch by id / all / many, local create / update
//! - [`Transport`] - Seam to the remote service ([`HttpTransport`] in production)
//! - [`DiagnosticSink`] - Where absorbed failures are reported
//! - [`FetchError`], [`ValidationError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for a transport that answers from canned responses.

pub mod client;
pub mod diagnostics;
pub mod entity;
pub mod error;
pub mod ids;
pub mod mock;
pub mod transport;

// Re-export core types for convenience
pub use client::ResourceClient;
pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, TracingSink};
pub use entity::RemoteEntity;
pub use error::{ConfigError, FetchError, ValidationError};
pub use ids::{random_local_id, LOCAL_ID_RANGE};
pub use transport::{HttpTransport, Transport, TransportResponse};
