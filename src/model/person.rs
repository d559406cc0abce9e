use serde::{Deserialize, Serialize};

/// Identifier of a performer record.
///
/// Remote records carry server-assigned ids; locally created records get a
/// random id from [`random_local_id`](crate::framework::random_local_id).
pub type PersonId = i64;

/// Fields shared by every performer record.
///
/// `id` is fixed once a record exists. The other fields can be replaced through
/// the kind-specific update payloads, except an actor's `name`, which
/// [`ActorUpdate`](crate::model::ActorUpdate) has no field for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth_year: i32,
    /// Present only when the person is deceased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,
    pub biography: String,
    /// URI or path of a portrait.
    pub image: String,
}

impl Person {
    /// Whether a death year is recorded.
    pub fn is_deceased(&self) -> bool {
        self.death_year.is_some()
    }
}
