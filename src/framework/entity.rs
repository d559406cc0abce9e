//! # RemoteEntity Trait
//!
//! The `RemoteEntity` trait defines the contract that every performer kind must
//! implement to be served by the generic [`ResourceClient`](super::ResourceClient).
//!
//! # Architecture Note
//! By defining a contract that both record kinds (Actress, Actor) satisfy, the
//! fetch, batch, create and update logic is written *once* and reused for each.
//!
//! Associated types keep the payloads apart: an `Actress` is created from an
//! `ActressCreate` and can never be handed an `ActorUpdate`. The compiler rules
//! that class of mistake out.

use serde_json::Value;
use std::fmt::Debug;

use super::ValidationError;
use crate::model::PersonId;

/// Trait that any performer record must implement to be served by `ResourceClient`.
pub trait RemoteEntity: Clone + Debug + Send + Sync + 'static {
    /// The data required to create a new record locally (everything but the id).
    type Create: Send + Sync + Debug;

    /// Field overrides accepted by [`RemoteEntity::merged`].
    type Update: Send + Sync + Debug + Default;

    /// Collection segment of the remote URL scheme, e.g. `actresses`.
    const COLLECTION: &'static str;

    fn id(&self) -> PersonId;

    /// Validates an untrusted decoded payload and narrows it to `Self`.
    fn validate(value: &Value) -> Result<Self, ValidationError>;

    /// Construct the full record from a generated id and the payload.
    fn from_create_params(id: PersonId, params: Self::Create) -> Self;

    /// Returns a new record equal to `self` with `update` applied.
    fn merged(&self, update: Self::Update) -> Self;
}
