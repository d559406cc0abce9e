//! RemoteEntity trait implementation for the Actor domain type.

use serde_json::Value;

use crate::framework::{RemoteEntity, ValidationError};
use crate::model::{Actor, ActorCreate, ActorUpdate, PersonId};
use crate::validation::validate_actor;

impl RemoteEntity for Actor {
    type Create = ActorCreate;
    type Update = ActorUpdate;

    const COLLECTION: &'static str = "actors";

    fn id(&self) -> PersonId {
        self.person.id
    }

    fn validate(value: &Value) -> Result<Self, ValidationError> {
        validate_actor(value)
    }

    fn from_create_params(id: PersonId, params: ActorCreate) -> Self {
        Actor::new(id, params)
    }

    /// Same as [`RemoteEntity for Actress`](crate::model::Actress), minus `name`.
    fn merged(&self, update: ActorUpdate) -> Self {
        Actor::merged(self, update)
    }
}
