//! Demo: exercises every catalogue operation once against the configured service.

use performer_recipe::lifecycle::{setup_tracing, CatalogConfig, CatalogSystem};
use performer_recipe::model::{ActressCreate, ActressNationality, ActressUpdate};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CatalogConfig::from_env().map_err(|e| e.to_string())?;
    let system = CatalogSystem::new(config).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("fetching");
    async {
        match system.actress_client.fetch_actress_by_id(1).await {
            Some(actress) => info!(
                name = %actress.person.name,
                deceased = actress.person.is_deceased(),
                "Actress 1"
            ),
            None => warn!("Actress 1 unavailable"),
        }

        let actresses = system.actress_client.fetch_all_actresses().await;
        info!(count = actresses.len(), "All actresses");

        let actors = system.actor_client.fetch_actors_by_ids(&[1, -1, 2]).await;
        let found = actors.iter().filter(|a| a.is_some()).count();
        info!(requested = actors.len(), found, "Actors by id");
    }
    .instrument(span)
    .await;

    let created = system.actress_client.create_actress(ActressCreate {
        name: "Local Actress".to_string(),
        birth_year: 1990,
        death_year: None,
        biography: "Created locally, never sent to the service.".to_string(),
        image: "local.jpg".to_string(),
        most_famous_movies: [
            "First".to_string(),
            "Second".to_string(),
            "Third".to_string(),
        ],
        awards: "None yet".to_string(),
        nationality: ActressNationality::Spanish,
    });
    let updated = system.actress_client.update_actress(
        &created,
        ActressUpdate {
            awards: Some("One festival prize".to_string()),
            ..Default::default()
        },
    );
    info!(id = updated.person.id, awards = %updated.awards, "Local actress");

    match system.create_random_couple().await {
        Some(couple) => {
            let json = serde_json::to_string_pretty(&couple).map_err(|e| e.to_string())?;
            info!("Random couple:\n{json}");
        }
        None => warn!("Random couple unavailable"),
    }

    Ok(())
}
