//! Structural validation of untrusted JSON payloads.
//!
//! [`validate_actress`] and [`validate_actor`] check a decoded value field by
//! field and return either the typed entity or the first [`ValidationError`]
//! found. The check is a structural subset match: fields the schema does not
//! name are ignored, so new remote fields never break validation.
//!
//! The `is_*` predicates are thin boolean views over the same checks.

mod fields;

use serde_json::Value;

use crate::framework::ValidationError;
use crate::model::{Actor, ActorAwards, ActorNationality, Actress, ActressNationality, Person};
use fields::Fields;

fn person(fields: &Fields<'_>) -> Result<Person, ValidationError> {
    let id = fields.integer("id")?;
    let name = fields.string("name")?;
    let biography = fields.string("biography")?;
    let image = fields.string("image")?;
    let birth_year = fields.year("birth_year")?;
    let death_year = fields.optional_year("death_year")?;

    Ok(Person {
        id,
        name,
        birth_year,
        death_year,
        biography,
        image,
    })
}

/// Checks that `value` is a well-formed actress record.
pub fn validate_actress(value: &Value) -> Result<Actress, ValidationError> {
    let fields = Fields::new(value)?;
    let person = person(&fields)?;
    let most_famous_movies = fields.triple("most_famous_movies")?;
    let awards = fields.string("awards")?;
    let nationality = fields.allowed::<ActressNationality>("nationality")?;

    Ok(Actress {
        person,
        most_famous_movies,
        awards,
        nationality,
    })
}

/// Checks that `value` is a well-formed actor record.
pub fn validate_actor(value: &Value) -> Result<Actor, ValidationError> {
    let fields = Fields::new(value)?;
    let person = person(&fields)?;
    let known_for = fields.triple("known_for")?;
    let awards = fields.strings("awards", 1..=2, "1 or 2")?;
    let found = awards.len();
    let awards = ActorAwards::try_from(awards).map_err(|_| ValidationError::WrongArity {
        field: "awards",
        expected: "1 or 2",
        found,
    })?;
    let nationality = fields.allowed::<ActorNationality>("nationality")?;

    Ok(Actor {
        person,
        known_for,
        awards,
        nationality,
    })
}

pub fn is_actress(value: &Value) -> bool {
    validate_actress(value).is_ok()
}

pub fn is_actor(value: &Value) -> bool {
    validate_actor(value).is_ok()
}

pub fn is_valid_actress_nationality(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|label| label.parse::<ActressNationality>().is_ok())
}

pub fn is_valid_actor_nationality(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|label| label.parse::<ActorNationality>().is_ok())
}
