//! # Mock Transport & Testing Guide
//!
//! `MockTransport` implements the same [`Transport`] API as the HTTP transport
//! but answers from canned responses registered up front. It lets you test
//! clients, batch fan-out and pairing deterministically without a network.
//!
//! ## When to use the mock vs the real service
//!
//! | Feature | MockTransport | HttpTransport |
//! |---------|---------------|---------------|
//! | **Speed** | Instant (in-memory) | Network bound |
//! | **Determinism** | 100% Deterministic | Subject to remote data |
//! | **Error Injection** | Easy (`return_status`, `return_body`, `return_err`) | Hard |
//!
//! ## Matching
//!
//! Expectations are matched by **path**, not by arrival order, because batch
//! fetches issue their requests concurrently. Each expectation answers exactly
//! one request; register the same path twice to answer it twice.
//!
//! A request with no matching expectation panics, mirroring an unexpected
//! message in a mocked actor. [`MockTransport::requests`] keeps every path in
//! arrival order for tests that care about sequencing.
//!
//! ```rust
//! use performer_recipe::framework::mock::MockTransport;
//! use performer_recipe::framework::Transport;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect_get("actresses/1").return_status(404);
//!
//!     let response = mock.get("actresses/1").await.unwrap();
//!     assert_eq!(response.status, 404);
//!
//!     mock.verify(); // Ensures all expectations were met
//! }
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use super::{FetchError, Transport, TransportResponse};

/// A registered request and the answer it should get.
struct Expectation {
    path: String,
    response: Result<TransportResponse, FetchError>,
}

/// A transport with expectation tracking for fluent testing.
///
/// Clones share the same expectation list, so a test can keep one handle for
/// [`verify`](MockTransport::verify) while the system under test owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<Vec<Expectation>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    /// Creates a new mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `GET` on `path` (relative to the base URL, e.g. `actors/3`).
    pub fn expect_get(&self, path: impl Into<String>) -> GetExpectationBuilder {
        GetExpectationBuilder {
            path: path.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let paths: Vec<&str> = exps.iter().map(|e| e.path.as_str()).collect();
            panic!("Not all expectations were met. {} remaining: {:?}", exps.len(), paths);
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str) -> Result<TransportResponse, FetchError> {
        self.requests.lock().unwrap().push(path.to_string());
        let mut exps = self.expectations.lock().unwrap();
        match exps.iter().position(|e| e.path == path) {
            Some(index) => exps.remove(index).response,
            None => {
                drop(exps); // Release lock before panicking so verify() still works
                panic!("Unexpected request: GET {}", path);
            }
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder {
    path: String,
    expectations: Arc<Mutex<Vec<Expectation>>>,
}

impl GetExpectationBuilder {
    fn push(self, response: Result<TransportResponse, FetchError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push(Expectation {
            path: self.path,
            response,
        });
    }

    /// Answers with `200 OK` and `value` as the body.
    pub fn return_json(self, value: Value) {
        self.return_body(200, value.to_string());
    }

    /// Answers with `status` and an empty body.
    pub fn return_status(self, status: u16) {
        self.return_body(status, String::new());
    }

    /// Answers with an arbitrary status and raw body.
    pub fn return_body(self, status: u16, body: impl Into<String>) {
        self.push(Ok(TransportResponse {
            status,
            body: body.into(),
        }));
    }

    /// Fails the request before any response arrives.
    pub fn return_err(self, error: FetchError) {
        self.push(Err(error));
    }
}
