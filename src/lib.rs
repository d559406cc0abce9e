//! # Performer Recipe
//!
//! > **A typed data-access layer for a remote performer catalogue.**
//!
//! This crate reads Actress and Actor records from a read-oriented JSON HTTP
//! service, validates every payload before trusting it, and offers local
//! create/update helpers plus a random pairing utility.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Validate at the boundary
//! Remote JSON is untrusted. Nothing becomes an [`Actress`](model::Actress) or
//! [`Actor`](model::Actor) without passing [`validation`]. The check is a
//! structural subset match, so extra remote fields are ignored.
//!
//! ### Absorb failures, report them aside
//! Fetch operations never return errors. A missing record, a network failure,
//! an undecodable body and a malformed payload all become `None` (or an empty
//! list). The reason goes to an injected
//! [`DiagnosticSink`](framework::DiagnosticSink).
//!
//! ### Generics: write it once
//! You'll see `ResourceClient<T: RemoteEntity>` everywhere. The fetch, batch,
//! create and update logic is written **once** and works for both kinds.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Generic plumbing: entity trait, client, transport, diagnostics, errors.
//! - **Key items**: [`RemoteEntity`](framework::RemoteEntity), [`ResourceClient`](framework::ResourceClient).
//!
//! ### 2. The Data ([`model`], [`validation`])
//! - **Role**: Record types, allow-lists, and the payload validators.
//!
//! ### 3. The Interface ([`clients`], [`pairing`])
//! - **Role**: Named per-kind operations (`fetch_actress_by_id`, `update_actor`, …) and random couples.
//! - **Key items**: [`ActressClient`](clients::ActressClient), [`ActorClient`](clients::ActorClient).
//!
//! ### 4. The Wiring ([`lifecycle`])
//! - **Role**: Configuration, tracing setup, and the [`CatalogSystem`](lifecycle::CatalogSystem).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo against the public service
//! RUST_LOG=info cargo run
//!
//! # Point at another deployment
//! PERFORMER_API_BASE_URL=http://localhost:3000 cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod actors;
pub mod actresses;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod pairing;
pub mod validation;
