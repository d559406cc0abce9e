use crate::framework::{RemoteEntity, ResourceClient};
use crate::model::PersonId;
use async_trait::async_trait;

/// Trait for kind-specific clients to inherit the standard operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// fetching, batch fetching and local reconciliation on top of the inner
/// [`ResourceClient`].
#[async_trait]
pub trait EntityClient<T: RemoteEntity>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn fetch_by_id(&self, id: PersonId) -> Option<T> {
        tracing::debug!("Sending request");
        self.inner().get(id).await
    }

    /// Fetch every record of the collection that validates.
    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self) -> Vec<T> {
        tracing::debug!("Sending request");
        self.inner().get_all().await
    }

    /// Fetch several records concurrently, one result slot per input id.
    #[tracing::instrument(skip(self))]
    async fn fetch_by_ids(&self, ids: &[PersonId]) -> Vec<Option<T>> {
        tracing::debug!("Sending requests");
        self.inner().get_many(ids).await
    }

    /// Build a record locally with a generated id.
    fn create(&self, params: T::Create) -> T {
        self.inner().create(params)
    }

    /// Apply overrides to a record locally.
    fn update(&self, existing: &T, update: T::Update) -> T {
        self.inner().update(existing, update)
    }
}
