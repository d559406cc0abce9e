//! # Generic Client
//!
//! This module defines the generic client for reading one kind of record from
//! the remote catalogue.
//!
//! ## Failure policy
//!
//! Every public fetch operation absorbs failures into its return value:
//!
//! | Operation | On failure |
//! |-----------|------------|
//! | [`get`](ResourceClient::get) | `None` |
//! | [`get_all`](ResourceClient::get_all) | empty `Vec` |
//! | [`get_many`](ResourceClient::get_many) | `None` at the failed position, or all `None` if the fan-out itself fails |
//!
//! A non-success status, an undecodable body and a schema-invalid payload all
//! look the same to the caller. The reason is reported to the [`DiagnosticSink`].
//! Use [`try_get`](ResourceClient::try_get) / [`try_get_all`](ResourceClient::try_get_all)
//! when the reason matters.

use futures::future::join_all;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::{Diagnostic, DiagnosticSink, FetchError, RemoteEntity, Transport};
use crate::model::PersonId;

/// A type-safe client for one remote collection.
///
/// * **Cloneable** – holds only shared handles, so cloning is inexpensive.
/// * **Stateless** – nothing is cached between calls.
/// * **Generic** – works with any record kind that implements `RemoteEntity`.
pub struct ResourceClient<T: RemoteEntity> {
    transport: Arc<dyn Transport>,
    sink: Arc<dyn DiagnosticSink>,
    next_id_fn: Arc<dyn Fn() -> PersonId + Send + Sync>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: RemoteEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            sink: self.sink.clone(),
            next_id_fn: self.next_id_fn.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: RemoteEntity> ResourceClient<T> {
    pub fn new(
        transport: Arc<dyn Transport>,
        sink: Arc<dyn DiagnosticSink>,
        next_id_fn: impl Fn() -> PersonId + Send + Sync + 'static,
    ) -> Self {
        Self {
            transport,
            sink,
            next_id_fn: Arc::new(next_id_fn),
            _entity: PhantomData,
        }
    }

    fn item_path(id: PersonId) -> String {
        format!("{}/{}", T::COLLECTION, id)
    }

    fn report(&self, path: String, error: FetchError) {
        self.sink.record(Diagnostic {
            resource: T::COLLECTION,
            path,
            error,
        });
    }

    /// Performs the request and decodes the body, rejecting non-success statuses.
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        let response = self.transport.get(path).await?;
        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Fetches and validates one record, keeping the failure reason.
    pub async fn try_get(&self, id: PersonId) -> Result<T, FetchError> {
        let value = self.fetch_json(&Self::item_path(id)).await?;
        Ok(T::validate(&value)?)
    }

    /// Fetches the whole collection.
    ///
    /// Fails only when the response as a whole is unusable. Elements that do
    /// not validate are reported individually and left out.
    pub async fn try_get_all(&self) -> Result<Vec<T>, FetchError> {
        let value = self.fetch_json(T::COLLECTION).await?;
        let Value::Array(items) = value else {
            return Err(FetchError::NotAList);
        };

        let total = items.len();
        let mut valid = Vec::with_capacity(total);
        for (index, item) in items.iter().enumerate() {
            match T::validate(item) {
                Ok(entity) => valid.push(entity),
                Err(e) => self.report(format!("{}[{}]", T::COLLECTION, index), e.into()),
            }
        }
        debug!(resource = T::COLLECTION, total, valid = valid.len(), "Fetched collection");
        Ok(valid)
    }

    /// Fetches one record, or `None` when it is not available for any reason.
    #[instrument(skip(self), fields(resource = T::COLLECTION))]
    pub async fn get(&self, id: PersonId) -> Option<T> {
        match self.try_get(id).await {
            Ok(entity) => {
                debug!("Found");
                Some(entity)
            }
            Err(e) => {
                self.report(Self::item_path(id), e);
                None
            }
        }
    }

    /// Fetches the whole collection, or an empty one when it is not available.
    #[instrument(skip(self), fields(resource = T::COLLECTION))]
    pub async fn get_all(&self) -> Vec<T> {
        match self.try_get_all().await {
            Ok(entities) => entities,
            Err(e) => {
                self.report(T::COLLECTION.to_string(), e);
                Vec::new()
            }
        }
    }

    /// Fetches every id concurrently. The result has one slot per input id, in order.
    ///
    /// Repeated ids are fetched once per occurrence. Returns only after every
    /// fetch task has settled. If a task cannot be joined, the batch as a whole
    /// is discarded and every slot is `None`.
    #[instrument(skip(self), fields(resource = T::COLLECTION, count = ids.len()))]
    pub async fn get_many(&self, ids: &[PersonId]) -> Vec<Option<T>> {
        let tasks = ids.iter().map(|&id| {
            let client = self.clone();
            tokio::spawn(async move { client.get(id).await })
        });

        let joined: Result<Vec<Option<T>>, _> = join_all(tasks).await.into_iter().collect();
        match joined {
            Ok(results) => results,
            Err(e) => {
                self.report(T::COLLECTION.to_string(), FetchError::BatchAborted(e.to_string()));
                vec![None; ids.len()]
            }
        }
    }

    /// Builds a new record locally with a freshly generated id.
    /// The remote service is not contacted.
    pub fn create(&self, params: T::Create) -> T {
        let id = (self.next_id_fn)();
        debug!(resource = T::COLLECTION, id, ?params, "Create");
        T::from_create_params(id, params)
    }

    /// Returns `existing` with `update` applied. The remote service is not contacted.
    pub fn update(&self, existing: &T, update: T::Update) -> T {
        debug!(resource = T::COLLECTION, id = existing.id(), ?update, "Update");
        existing.merged(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockTransport;
    use crate::framework::{MemorySink, TransportResponse, ValidationError};
    use crate::model::{Actress, ActressCreate, ActressNationality, ActressUpdate};
    use serde_json::{json, Value};

    fn actress_json(id: i64) -> Value {
        json!({
            "id": id,
            "name": format!("Actress {id}"),
            "birth_year": 1970,
            "biography": "Bio",
            "image": "img.jpg",
            "most_famous_movies": ["A", "B", "C"],
            "awards": "Several",
            "nationality": "Indian"
        })
    }

    fn client(mock: &MockTransport, sink: &MemorySink) -> ResourceClient<Actress> {
        ResourceClient::new(Arc::new(mock.clone()), Arc::new(sink.clone()), || 42)
    }

    #[tokio::test]
    async fn test_get_returns_validated_entity() {
        let (mock, sink) = (MockTransport::new(), MemorySink::new());
        mock.expect_get("actresses/3").return_json(actress_json(3));

        let actress = client(&mock, &sink).get(3).await.unwrap();
        assert_eq!(actress.person.id, 3);
        assert_eq!(actress.nationality, ActressNationality::Indian);
        assert!(sink.is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_absorbs_every_failure_kind() {
        let (mock, sink) = (MockTransport::new(), MemorySink::new());
        mock.expect_get("actresses/1").return_status(404);
        mock.expect_get("actresses/2").return_body(200, "<html>oops</html>");
        mock.expect_get("actresses/3").return_json(json!({ "id": 3 }));
        mock.expect_get("actresses/4")
            .return_err(FetchError::Transport("connection refused".into()));

        let client = client(&mock, &sink);
        for id in 1..=4 {
            assert!(client.get(id).await.is_none(), "id {id}");
        }

        let errors: Vec<FetchError> = sink.events().into_iter().map(|d| d.error).collect();
        assert_eq!(errors[0], FetchError::Status(404));
        assert!(matches!(errors[1], FetchError::Decode(_)));
        assert_eq!(
            errors[2],
            FetchError::Invalid(ValidationError::MissingField("name"))
        );
        assert_eq!(errors[3], FetchError::Transport("connection refused".into()));
        assert_eq!(sink.events()[0].path, "actresses/1");
        assert_eq!(sink.events()[0].resource, "actresses");
        mock.verify();
    }

    #[tokio::test]
    async fn test_try_get_keeps_reason() {
        let (mock, sink) = (MockTransport::new(), MemorySink::new());
        mock.expect_get("actresses/8").return_status(500);

        let result = client(&mock, &sink).try_get(8).await;
        assert_eq!(result.unwrap_err(), FetchError::Status(500));
        // try_* never reports on its own
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_filters_invalid_elements() {
        let (mock, sink) = (MockTransport::new(), MemorySink::new());
        let mut bad_nationality = actress_json(2);
        bad_nationality["nationality"] = json!("Canadian");
        mock.expect_get("actresses").return_json(json!([
            actress_json(1),
            bad_nationality,
            "not an object",
            actress_json(4),
        ]));

        let all = client(&mock, &sink).get_all().await;
        let ids: Vec<_> = all.iter().map(|a| a.person.id).collect();
        assert_eq!(ids, vec![1, 4]);

        let paths: Vec<_> = sink.events().into_iter().map(|d| d.path).collect();
        assert_eq!(paths, vec!["actresses[1]", "actresses[2]"]);
    }

    #[tokio::test]
    async fn test_get_all_non_array_is_empty() {
        let (mock, sink) = (MockTransport::new(), MemorySink::new());
        mock.expect_get("actresses").return_json(actress_json(1));
        mock.expect_get("actresses").return_status(503);

        let client = client(&mock, &sink);
        assert!(client.get_all().await.is_empty());
        assert!(client.get_all().await.is_empty());

        let errors: Vec<_> = sink.events().into_iter().map(|d| d.error).collect();
        assert_eq!(errors, vec![FetchError::NotAList, FetchError::Status(503)]);
    }

    #[tokio::test]
    async fn test_get_many_preserves_order_and_gaps() {
        let (mock, sink) = (MockTransport::new(), MemorySink::new());
        mock.expect_get("actresses/1").return_json(actress_json(1));
        mock.expect_get("actresses/-1").return_status(404);
        mock.expect_get("actresses/2").return_json(actress_json(2));

        let results = client(&mock, &sink).get_many(&[1, -1, 2]).await;
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().person.id, 1);
        assert!(results[1].is_none());
        assert_eq!(results[2].as_ref().unwrap().person.id, 2);
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_many_fetches_repeated_ids_each_time() {
        let (mock, sink) = (MockTransport::new(), MemorySink::new());
        mock.expect_get("actresses/5").return_json(actress_json(5));
        mock.expect_get("actresses/5").return_json(actress_json(5));

        let results = client(&mock, &sink).get_many(&[5, 5]).await;
        assert!(results.iter().all(Option::is_some));
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_many_empty_input() {
        let (mock, sink) = (MockTransport::new(), MemorySink::new());
        assert!(client(&mock, &sink).get_many(&[]).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_many_orchestration_failure_clears_batch() {
        let (mock, sink) = (MockTransport::new(), MemorySink::new());
        mock.expect_get("actresses/1").return_json(actress_json(1));
        // No expectation for id 2: the mock panics inside the fetch task.

        let results = client(&mock, &sink).get_many(&[1, 2]).await;
        assert_eq!(results, vec![None, None]);
        assert!(sink
            .events()
            .iter()
            .any(|d| matches!(d.error, FetchError::BatchAborted(_))));
    }

    /// Answers `actresses/1` with a 404 after a delay and panics on anything else.
    struct SlowThenPanicking;

    #[async_trait::async_trait]
    impl Transport for SlowThenPanicking {
        async fn get(&self, path: &str) -> Result<TransportResponse, FetchError> {
            if path != "actresses/1" {
                panic!("Unexpected request: GET {}", path);
            }
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            Ok(TransportResponse {
                status: 404,
                body: String::new(),
            })
        }
    }

    #[tokio::test]
    async fn test_get_many_waits_for_every_task_before_aborting() {
        let sink = MemorySink::new();
        let client: ResourceClient<Actress> =
            ResourceClient::new(Arc::new(SlowThenPanicking), Arc::new(sink.clone()), || 42);

        let results = client.get_many(&[1, 2]).await;
        assert_eq!(results, vec![None, None]);

        // The slow fetch settled before the batch returned, so nothing lands later
        let settled: Vec<FetchError> = sink.events().into_iter().map(|d| d.error).collect();
        assert_eq!(settled.len(), 2);
        assert_eq!(settled[0], FetchError::Status(404));
        assert!(matches!(settled[1], FetchError::BatchAborted(_)));

        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        assert_eq!(sink.events().len(), 2);
    }

    #[test]
    fn test_create_uses_id_generator() {
        let (mock, sink) = (MockTransport::new(), MemorySink::new());
        let actress = client(&mock, &sink).create(ActressCreate {
            name: "New".into(),
            birth_year: 2000,
            death_year: None,
            biography: "b".into(),
            image: "i".into(),
            most_famous_movies: ["1".into(), "2".into(), "3".into()],
            awards: "a".into(),
            nationality: ActressNationality::Chinese,
        });
        assert_eq!(actress.person.id, 42);
        assert_eq!(actress.person.name, "New");
        assert_eq!(mock.remaining(), 0);
    }

    #[test]
    fn test_update_is_local_merge() {
        let (mock, sink) = (MockTransport::new(), MemorySink::new());
        let client = client(&mock, &sink);
        let original = Actress::validate(&actress_json(6)).unwrap();
        let updated = client.update(
            &original,
            ActressUpdate {
                awards: Some("None".into()),
                ..Default::default()
            },
        );
        assert_eq!(updated.awards, "None");
        assert_eq!(updated.person, original.person);
    }
}
