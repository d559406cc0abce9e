//! RemoteEntity trait implementation for the Actress domain type.
//!
//! This module contains the [`RemoteEntity`] trait implementation
//! that enables [`Actress`] to be served by the generic [`crate::framework::ResourceClient`].

use serde_json::Value;

use crate::framework::{RemoteEntity, ValidationError};
use crate::model::{Actress, ActressCreate, ActressUpdate, PersonId};
use crate::validation::validate_actress;

impl RemoteEntity for Actress {
    type Create = ActressCreate;
    type Update = ActressUpdate;

    const COLLECTION: &'static str = "actresses";

    fn id(&self) -> PersonId {
        self.person.id
    }

    fn validate(value: &Value) -> Result<Self, ValidationError> {
        validate_actress(value)
    }

    fn from_create_params(id: PersonId, params: ActressCreate) -> Self {
        Actress::new(id, params)
    }

    /// Applies overrides for `name`, `birth_year`, `death_year`, `biography`,
    /// `image`, `most_famous_movies`, `awards` and `nationality`.
    fn merged(&self, update: ActressUpdate) -> Self {
        Actress::merged(self, update)
    }
}
