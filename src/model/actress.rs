use serde::{Deserialize, Serialize};

use super::{ActressNationality, Person, PersonId};

/// An actress record as served by the remote catalogue.
///
/// # Resource Framework
/// This struct implements the [`RemoteEntity`](crate::framework::RemoteEntity) trait,
/// so it can be fetched and validated by a [`ResourceClient`](crate::framework::ResourceClient).
///
/// See [`impl RemoteEntity for Actress`](#impl-RemoteEntity-for-Actress) for details on:
/// - Creation parameters ([`ActressCreate`])
/// - Update parameters ([`ActressUpdate`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actress {
    #[serde(flatten)]
    pub person: Person,
    pub most_famous_movies: [String; 3],
    /// Free-form description of the awards won.
    pub awards: String,
    pub nationality: ActressNationality,
}

/// Payload for creating a new actress locally. The id is generated.
#[derive(Debug, Clone)]
pub struct ActressCreate {
    pub name: String,
    pub birth_year: i32,
    pub death_year: Option<i32>,
    pub biography: String,
    pub image: String,
    pub most_famous_movies: [String; 3],
    pub awards: String,
    pub nationality: ActressNationality,
}

/// Field overrides for an existing actress.
/// Every field left as `None` keeps the original value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActressUpdate {
    pub name: Option<String>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub biography: Option<String>,
    pub image: Option<String>,
    pub most_famous_movies: Option<[String; 3]>,
    pub awards: Option<String>,
    pub nationality: Option<ActressNationality>,
}

impl Actress {
    /// Builds an actress from a creation payload and an already chosen id.
    pub fn new(id: PersonId, params: ActressCreate) -> Self {
        Self {
            person: Person {
                id,
                name: params.name,
                birth_year: params.birth_year,
                death_year: params.death_year,
                biography: params.biography,
                image: params.image,
            },
            most_famous_movies: params.most_famous_movies,
            awards: params.awards,
            nationality: params.nationality,
        }
    }

    /// Returns a copy of this record with the overrides applied.
    pub fn merged(&self, update: ActressUpdate) -> Self {
        let mut next = self.clone();
        if let Some(name) = update.name {
            next.person.name = name;
        }
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
        if let Some(movies) = update.most_famous_movies {
            next.most_famous_movies = movies;
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

    fn meryl() -> Actress {
        Actress::new(
            7,
            ActressCreate {
                name: "Meryl Streep".into(),
                birth_year: 1949,
                death_year: None,
                biography: "American actress.".into(),
                image: "https://example.com/meryl.jpg".into(),
                most_famous_movies: [
                    "Sophie's Choice".into(),
                    "The Iron Lady".into(),
                    "Kramer vs. Kramer".into(),
                ],
                awards: "3 Academy Awards".into(),
                nationality: ActressNationality::American,
            },
        )
    }

    #[test]
    fn test_empty_update_yields_equal_record() {
        let original = meryl();
        let updated = original.merged(ActressUpdate::default());
        assert_eq!(updated, original);
    }

    #[test]
    fn test_update_replaces_only_given_fields() {
        let original = meryl();
        let updated = original.merged(ActressUpdate {
            biography: Some("X".into()),
            ..Default::default()
        });

        assert_eq!(updated.person.biography, "X");
        let mut expected = original.clone();
        expected.person.biography = "X".into();
        assert_eq!(updated, expected);
        // The source record is untouched.
        assert_eq!(original.person.biography, "American actress.");
    }

    #[test]
    fn test_update_keeps_id() {
        let updated = meryl().merged(ActressUpdate {
            name: Some("M. Streep".into()),
            nationality: Some(ActressNationality::British),
            ..Default::default()
        });
        assert_eq!(updated.person.id, 7);
        assert_eq!(updated.person.name, "M. Streep");
        assert_eq!(updated.nationality, ActressNationality::British);
    }

    #[test]
    fn test_serializes_to_flat_remote_shape() {
        let value = serde_json::to_value(meryl()).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Meryl Streep");
        assert_eq!(value["nationality"], "American");
        assert!(value.get("death_year").is_none());
        assert!(value.get("person").is_none());
    }
}
