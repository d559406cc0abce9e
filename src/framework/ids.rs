//! Identifier generation for locally created records.
//!
//! Ids are drawn independently per call and are NOT checked against ids the
//! remote service already uses. Collisions are possible and accepted: local
//! records are never synchronized back, so nothing relies on global uniqueness.

use rand::Rng;
use std::ops::RangeInclusive;

use crate::model::PersonId;

/// Range local ids are drawn from, both ends included.
pub const LOCAL_ID_RANGE: RangeInclusive<PersonId> = 1..=10_000;

/// Draws a uniformly random id from [`LOCAL_ID_RANGE`].
pub fn random_local_id() -> PersonId {
    rand::thread_rng().gen_range(LOCAL_ID_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_stay_in_range() {
        for _ in 0..1_000 {
            assert!(LOCAL_ID_RANGE.contains(&random_local_id()));
        }
    }
}
