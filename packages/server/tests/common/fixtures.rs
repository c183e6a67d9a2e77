//! Test fixtures for creating test data.
//!
//! These fixtures go through the same mutation wrapper as the handlers.

use anyhow::Result;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use server_core::common::mutations;
use server_core::domains::artists::models::{Artist, ArtistDraft};
use server_core::domains::shows::models::{Show, ShowDraft};
use server_core::domains::venues::models::{Venue, VenueDraft};

/// Create a venue with the required fields and a single genre
pub async fn create_test_venue(
    pool: &PgPool,
    name: &str,
    city: &str,
    state: &str,
) -> Result<Venue> {
    let draft = VenueDraft::builder()
        .name(name)
        .city(city)
        .state(state)
        .genres(vec!["Jazz".to_string()])
        .build();

    let venue = mutations::execute(pool, move |conn| {
        Box::pin(async move { Venue::create(draft, conn).await })
    })
    .await?;
    Ok(venue)
}

/// Create an artist with the required fields and a single genre
pub async fn create_test_artist(pool: &PgPool, name: &str) -> Result<Artist> {
    let draft = ArtistDraft::builder()
        .name(name)
        .city("Boston")
        .state("MA")
        .genres(vec!["Jazz".to_string()])
        .build();

    let artist = mutations::execute(pool, move |conn| {
        Box::pin(async move { Artist::create(draft, conn).await })
    })
    .await?;
    Ok(artist)
}

/// Create a show linking an existing venue and artist
pub async fn create_test_show(
    pool: &PgPool,
    venue_id: i32,
    artist_id: i32,
    start_time: NaiveDateTime,
) -> Result<Show> {
    let draft = ShowDraft::builder()
        .venue_id(venue_id)
        .artist_id(artist_id)
        .start_time(start_time)
        .build();

    let show = mutations::execute(pool, move |conn| {
        Box::pin(async move { Show::create(draft, conn).await })
    })
    .await?;
    Ok(show)
}
