//! Random Actress/Actor pairing.
//!
//! [`create_random_couple`] re-fetches both full collections on every call,
//! actresses first, and picks one record from each with a uniform index. If
//! either collection comes back empty (or could not be fetched) the whole
//! operation yields `None`; there is never a half-filled pair.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::clients::{ActorClient, ActressClient};
use crate::model::{Actor, Actress};

/// One actress and one actor picked together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Couple {
    pub actress: Actress,
    pub actor: Actor,
}

/// Picks one element from each slice, each index uniform over `[0, len)`.
///
/// Returns `None` when either slice is empty.
pub fn pick_couple<R: Rng + ?Sized>(
    actresses: &[Actress],
    actors: &[Actor],
    rng: &mut R,
) -> Option<Couple> {
    if actresses.is_empty() || actors.is_empty() {
        return None;
    }
    let actress = &actresses[rng.gen_range(0..actresses.len())];
    let actor = &actors[rng.gen_range(0..actors.len())];
    Some(Couple {
        actress: actress.clone(),
        actor: actor.clone(),
    })
}

/// Fetches both collections and pairs a random actress with a random actor.
#[instrument(skip_all)]
pub async fn create_random_couple(
    actress_client: &ActressClient,
    actor_client: &ActorClient,
) -> Option<Couple> {
    let actresses = actress_client.fetch_all_actresses().await;
    let actors = actor_client.fetch_all_actors().await;

    let couple = pick_couple(&actresses, &actors, &mut rand::thread_rng());
    match &couple {
        Some(c) => info!(
            actress = %c.actress.person.name,
            actor = %c.actor.person.name,
            "Couple created"
        ),
        None => debug!(
            actresses = actresses.len(),
            actors = actors.len(),
            "Couple unavailable"
        ),
    }
    couple
}
