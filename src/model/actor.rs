use serde::{Deserialize, Serialize};

use super::{ActorNationality, Person, PersonId};

/// An actor record as served by the remote catalogue.
///
/// # Resource Framework
/// This struct implements the [`RemoteEntity`](crate::framework::RemoteEntity) trait,
/// so it can be fetched and validated by a [`ResourceClient`](crate::framework::ResourceClient).
///
/// Unlike [`Actress`](crate::model::Actress), awards are a list of one or two
/// entries and the nationality allow-list is wider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(flatten)]
    pub person: Person,
    pub known_for: [String; 3],
    pub awards: ActorAwards,
    pub nationality: ActorNationality,
}

/// One or two award entries. Serialized as a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub enum ActorAwards {
    One(String),
    Two(String, String),
}

/// An award list with a length other than one or two.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Actor awards must hold 1 or 2 entries, got {0}")]
pub struct AwardCountError(pub usize);

impl ActorAwards {
    pub fn len(&self) -> usize {
        match self {
            ActorAwards::One(_) => 1,
            ActorAwards::Two(_, _) => 2,
        }
    }

    /// Always `false`: an actor holds at least one award.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let (first, second) = match self {
            ActorAwards::One(first) => (first, None),
            ActorAwards::Two(first, second) => (first, Some(second)),
        };
        std::iter::once(first.as_str()).chain(second.map(String::as_str))
    }
}

impl TryFrom<Vec<String>> for ActorAwards {
    type Error = AwardCountError;

    fn try_from(awards: Vec<String>) -> Result<Self, Self::Error> {
        let count = awards.len();
        let mut awards = awards.into_iter();
        match (awards.next(), awards.next(), count) {
            (Some(first), None, 1) => Ok(ActorAwards::One(first)),
            (Some(first), Some(second), 2) => Ok(ActorAwards::Two(first, second)),
            _ => Err(AwardCountError(count)),
        }
    }
}

impl From<ActorAwards> for Vec<String> {
    fn from(awards: ActorAwards) -> Self {
        match awards {
            ActorAwards::One(first) => vec![first],
            ActorAwards::Two(first, second) => vec![first, second],
        }
    }
}

/// Payload for creating a new actor locally. The id is generated.
#[derive(Debug, Clone)]
pub struct ActorCreate {
    pub name: String,
    pub birth_year: i32,
    pub death_year: Option<i32>,
    pub biography: String,
    pub image: String,
    pub known_for: [String; 3],
    pub awards: ActorAwards,
    pub nationality: ActorNationality,
}

/// Field overrides for an existing actor.
///
/// There is no `name` field: an actor keeps the name it was created with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorUpdate {
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub biography: Option<String>,
    pub image: Option<String>,
    pub known_for: Option<[String; 3]>,
    pub awards: Option<ActorAwards>,
    pub nationality: Option<ActorNationality>,
}

impl Actor {
    /// Builds an actor from a creation payload and an already chosen id.
    pub fn new(id: PersonId, params: ActorCreate) -> Self {
        Self {
            person: Person {
                id,
                name: params.name,
                birth_year: params.birth_year,
                death_year: params.death_year,
                biography: params.biography,
                image: params.image,
            },
            known_for: params.known_for,
            awards: params.awards,
            nationality: params.nationality,
        }
    }

    /// Returns a copy of this record with the overrides applied.
    pub fn merged(&self, update: ActorUpdate) -> Self {
        let mut next = self.clone();
        if let Some(birth_year) = update.birth_year {
            next.person.birth_year = birth_year;
        }
        if let Some(death_year) = update.death_year {
            next.person.death_year = Some(death_year);
        }
        if let Some(biography) = update.biography {
            next.person.biography = biography;
        }
        if let Some(image) = update.image {
            next.person.image = image;
        }
        if let Some(known_for) = update.known_for {
            next.known_for = known_for;
        }
        if let Some(awards) = update.awards {
            next.awards = awards;
        }
        if let Some(nationality) = update.nationality {
            next.nationality = nationality;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denzel() -> Actor {
        Actor::new(
            3,
            ActorCreate {
                name: "Denzel Washington".into(),
                birth_year: 1954,
                death_year: None,
                biography: "American actor.".into(),
                image: "https://example.com/denzel.jpg".into(),
                known_for: ["Training Day".into(), "Glory".into(), "Malcolm X".into()],
                awards: ActorAwards::Two("Academy Award".into(), "Golden Globe".into()),
                nationality: ActorNationality::American,
            },
        )
    }

    #[test]
    fn test_awards_from_vec() {
        assert_eq!(
            ActorAwards::try_from(vec!["Oscar".to_string()]),
            Ok(ActorAwards::One("Oscar".into()))
        );
        assert_eq!(ActorAwards::try_from(Vec::new()), Err(AwardCountError(0)));
        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(ActorAwards::try_from(three), Err(AwardCountError(3)));
    }

    #[test]
    fn test_awards_serialize_as_array() {
        let awards = ActorAwards::Two("Oscar".into(), "BAFTA".into());
        assert_eq!(awards.len(), 2);
        assert!(!awards.is_empty());
        assert_eq!(awards.iter().collect::<Vec<_>>(), vec!["Oscar", "BAFTA"]);
        let json = serde_json::to_value(&awards).unwrap();
        assert_eq!(json, serde_json::json!(["Oscar", "BAFTA"]));
        let err = serde_json::from_value::<ActorAwards>(serde_json::json!([])).unwrap_err();
        assert!(err.to_string().contains("1 or 2"));
    }

    #[test]
    fn test_update_merges_and_keeps_name() {
        let original = denzel();
        let updated = original.merged(ActorUpdate {
            death_year: Some(2090),
            nationality: Some(ActorNationality::Canadian),
            ..Default::default()
        });
        assert_eq!(updated.person.name, original.person.name);
        assert_eq!(updated.person.id, original.person.id);
        assert_eq!(updated.person.death_year, Some(2090));
        assert_eq!(updated.nationality, ActorNationality::Canadian);
        assert_eq!(updated.known_for, original.known_for);
    }

    #[test]
    fn test_empty_update_yields_equal_record() {
        let original = denzel();
        assert_eq!(original.merged(ActorUpdate::default()), original);
    }
}
