//! Nationality allow-lists.
//!
//! Each entity kind accepts a closed set of nationality labels. Actors accept
//! every label an Actress accepts plus six more, so [`ActressNationality`]
//! converts losslessly into [`ActorNationality`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A nationality label that is not part of the allow-list it was checked against.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown nationality: {0}")]
pub struct UnknownNationality(pub String);

macro_rules! allow_list {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every permitted value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire label of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownNationality;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(UnknownNationality(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

allow_list! {
    /// Nationalities accepted on an [`Actress`](crate::model::Actress) record.
    ActressNationality {
        American => "American",
        British => "British",
        Australian => "Australian",
        IsraeliAmerican => "Israeli-American",
        SouthAfrican => "South African",
        French => "French",
        Indian => "Indian",
        Israeli => "Israeli",
        Spanish => "Spanish",
        SouthKorean => "South Korean",
        Chinese => "Chinese",
    }
}

allow_list! {
    /// Nationalities accepted on an [`Actor`](crate::model::Actor) record.
    ActorNationality {
        American => "American",
        British => "British",
        Australian => "Australian",
        IsraeliAmerican => "Israeli-American",
        SouthAfrican => "South African",
        French => "French",
        Indian => "Indian",
        Israeli => "Israeli",
        Spanish => "Spanish",
        SouthKorean => "South Korean",
        Chinese => "Chinese",
        Scottish => "Scottish",
        NewZealand => "New Zealand",
        HongKong => "Hong Kong",
        German => "German",
        Canadian => "Canadian",
        Irish => "Irish",
    }
}

impl From<ActressNationality> for ActorNationality {
    fn from(nationality: ActressNationality) -> Self {
        match nationality {
            ActressNationality::American => ActorNationality::American,
            ActressNationality::British => ActorNationality::British,
            ActressNationality::Australian => ActorNationality::Australian,
            ActressNationality::IsraeliAmerican => ActorNationality::IsraeliAmerican,
            ActressNationality::SouthAfrican => ActorNationality::SouthAfrican,
            ActressNationality::French => ActorNationality::French,
            ActressNationality::Indian => ActorNationality::Indian,
            ActressNationality::Israeli => ActorNationality::Israeli,
            ActressNationality::Spanish => ActorNationality::Spanish,
            ActressNationality::SouthKorean => ActorNationality::SouthKorean,
            ActressNationality::Chinese => ActorNationality::Chinese,
        }
    }
}
