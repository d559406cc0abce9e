//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); the
//! `resource` field already says which collection a line is about.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Couples and discarded payloads only
//! RUST_LOG=info cargo run
//!
//! # Every request, create and update with its payload
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework
//! RUST_LOG=performer_recipe::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Requests**: `GET` lines with the full URL at `debug`
//! - **Collections**: total vs valid element counts at `debug`
//! - **Discarded payloads**: one `warn` per absorbed failure, via [`TracingSink`](crate::framework::TracingSink)
//! - **Pairing**: the chosen couple at `info`
//!
//! **With `RUST_LOG=info`** a batch with one missing id looks like:
//!
//! ```text
//! WARN fetch_actresses_by_ids:fetch_by_ids:get_many:get: Discarded remote payload resource="actresses" path=actresses/-1 error=Unexpected status: 404
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
