use crate::clients::entity_client::EntityClient;
use crate::framework::ResourceClient;
use crate::model::{Actress, ActressCreate, ActressUpdate, PersonId};
use tracing::instrument;

/// Client for the `actresses` collection.
#[derive(Clone)]
pub struct ActressClient {
    inner: ResourceClient<Actress>,
}

impl ActressClient {
    pub fn new(inner: ResourceClient<Actress>) -> Self {
        Self { inner }
    }
}

impl EntityClient<Actress> for ActressClient {
    fn inner(&self) -> &ResourceClient<Actress> {
        &self.inner
    }
}

impl ActressClient {
    /// `None` when the record is missing, unreachable or malformed.
    #[instrument(skip(self))]
    pub async fn fetch_actress_by_id(&self, id: PersonId) -> Option<Actress> {
        self.fetch_by_id(id).await
    }

    /// Possibly empty; malformed entries are dropped.
    #[instrument(skip(self))]
    pub async fn fetch_all_actresses(&self) -> Vec<Actress> {
        self.fetch_all().await
    }

    #[instrument(skip(self))]
    pub async fn fetch_actresses_by_ids(&self, ids: &[PersonId]) -> Vec<Option<Actress>> {
        self.fetch_by_ids(ids).await
    }

    pub fn create_actress(&self, params: ActressCreate) -> Actress {
        self.create(params)
    }

    pub fn update_actress(&self, existing: &Actress, update: ActressUpdate) -> Actress {
        self.update(existing, update)
    }
}
