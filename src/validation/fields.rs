//! Typed field readers over a decoded JSON object.
//!
//! Every reader either returns the converted value or the [`ValidationError`]
//! describing the first problem it saw. Unknown fields are never inspected.

use serde_json::{Map, Value};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::framework::ValidationError;
use crate::model::UnknownNationality;

pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(value: &'a Value) -> Result<Self, ValidationError> {
        value
            .as_object()
            .map(|map| Self { map })
            .ok_or(ValidationError::NotAnObject)
    }

    fn required(&self, field: &'static str) -> Result<&'a Value, ValidationError> {
        self.map
            .get(field)
            .ok_or(ValidationError::MissingField(field))
    }

    pub(crate) fn integer(&self, field: &'static str) -> Result<i64, ValidationError> {
        self.required(field)?
            .as_i64()
            .ok_or(ValidationError::WrongType {
                field,
                expected: "an integer",
            })
    }

    pub(crate) fn year(&self, field: &'static str) -> Result<i32, ValidationError> {
        as_year(field, self.required(field)?)
    }

    /// Absent is fine; present with any non-year value (including `null`) is not.
    pub(crate) fn optional_year(&self, field: &'static str) -> Result<Option<i32>, ValidationError> {
        self.map
            .get(field)
            .map(|value| as_year(field, value))
            .transpose()
    }

    pub(crate) fn string(&self, field: &'static str) -> Result<String, ValidationError> {
        self.required(field)?
            .as_str()
            .map(str::to_string)
            .ok_or(ValidationError::WrongType {
                field,
                expected: "a string",
            })
    }

    /// Reads an array of strings whose length lies in `arity`.
    pub(crate) fn strings(
        &self,
        field: &'static str,
        arity: RangeInclusive<usize>,
        expected: &'static str,
    ) -> Result<Vec<String>, ValidationError> {
        let items = self
            .required(field)?
            .as_array()
            .ok_or(ValidationError::WrongType {
                field,
                expected: "an array",
            })?;

        if !arity.contains(&items.len()) {
            return Err(ValidationError::WrongArity {
                field,
                expected,
                found: items.len(),
            });
        }

        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or(ValidationError::WrongType {
                        field,
                        expected: "an array of strings",
                    })
            })
            .collect()
    }

    /// Reads exactly three strings.
    pub(crate) fn triple(&self, field: &'static str) -> Result<[String; 3], ValidationError> {
        let items = self.strings(field, 3..=3, "exactly 3")?;
        let found = items.len();
        <[String; 3]>::try_from(items).map_err(|_| ValidationError::WrongArity {
            field,
            expected: "exactly 3",
            found,
        })
    }

    /// Reads a string and checks it against an allow-list.
    pub(crate) fn allowed<N>(&self, field: &'static str) -> Result<N, ValidationError>
    where
        N: FromStr<Err = UnknownNationality>,
    {
        let label = self.string(field)?;
        label
            .parse::<N>()
            .map_err(|UnknownNationality(label)| ValidationError::UnknownNationality(label))
    }
}

fn as_year(field: &'static str, value: &Value) -> Result<i32, ValidationError> {
    value
        .as_i64()
        .and_then(|year| i32::try_from(year).ok())
        .ok_or(ValidationError::WrongType {
            field,
            expected: "an integer year",
        })
}
