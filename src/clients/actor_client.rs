use crate::clients::entity_client::EntityClient;
use crate::framework::ResourceClient;
use crate::model::{Actor, ActorCreate, ActorUpdate, PersonId};
use tracing::instrument;

/// Client for the `actors` collection.
#[derive(Clone)]
pub struct ActorClient {
    inner: ResourceClient<Actor>,
}

impl ActorClient {
    pub fn new(inner: ResourceClient<Actor>) -> Self {
        Self { inner }
    }
}

impl EntityClient<Actor> for ActorClient {
    fn inner(&self) -> &ResourceClient<Actor> {
        &self.inner
    }
}

impl ActorClient {
    #[instrument(skip(self))]
    pub async fn fetch_actor_by_id(&self, id: PersonId) -> Option<Actor> {
        self.fetch_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_all_actors(&self) -> Vec<Actor> {
        self.fetch_all().await
    }

    #[instrument(skip(self))]
    pub async fn fetch_actors_by_ids(&self, ids: &[PersonId]) -> Vec<Option<Actor>> {
        self.fetch_by_ids(ids).await
    }

    pub fn create_actor(&self, params: ActorCreate) -> Actor {
        self.create(params)
    }

    /// `ActorUpdate` has no `name` field, so the name cannot change here.
    pub fn update_actor(&self, existing: &Actor, update: ActorUpdate) -> Actor {
        self.update(existing, update)
    }
}
