//! # System Lifecycle & Wiring
//!
//! This module builds the runtime: configuration, the [`CatalogSystem`] that
//! wires the transport and diagnostic sink into both clients, and the tracing
//! subscriber.
//!
//! ## Dependency Injection
//!
//! Both clients receive their transport and sink at construction time through
//! [`CatalogSystem::with_transport`]. Production code goes through
//! [`CatalogSystem::new`], which builds a `reqwest` transport and a
//! [`TracingSink`](crate::framework::TracingSink); tests pass a
//! [`MockTransport`](crate::framework::mock::MockTransport) and a
//! [`MemorySink`](crate::framework::MemorySink) instead.

pub mod catalog;
pub mod config;
pub mod tracing;

pub use catalog::*;
pub use config::*;
pub use self::tracing::*;
