//! View-model shapes for the venue pages, built by pure functions over
//! repository rows plus an injected `now`. Nothing here touches a clock or
//! the database.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::common::format_start_time;
use crate::domains::shows::models::ShowWithArtist;
use crate::domains::venues::models::Venue;

/// One (city, state) bucket in the grouped venue listing
#[derive(Debug, Clone, Serialize)]
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Group venues by their exact (city, state) pair, verbatim and
/// case-sensitive. Group order is first appearance among the input; member
/// order within a group follows input order. `upcoming_counts` comes from
/// `Show::upcoming_counts_by_venue` (strict `> now`).
pub fn group_by_location(
    venues: Vec<Venue>,
    upcoming_counts: &HashMap<i32, i64>,
) -> Vec<CityGroup> {
    let mut groups: Vec<CityGroup> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for venue in venues {
        let key = (venue.city.clone(), venue.state.clone());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(CityGroup {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].venues.push(VenueSummary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: upcoming_counts.get(&venue.id).copied().unwrap_or(0),
        });
    }

    groups
}

/// A show entry on the venue detail page, carrying the artist side
#[derive(Debug, Clone, Serialize)]
pub struct ArtistShowEntry {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Venue detail page: the venue's fields plus its shows partitioned into
/// past and upcoming
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShowEntry>,
    pub upcoming_shows: Vec<ArtistShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    /// Partition rule: a show is upcoming iff `start_time >= now`. A show
    /// starting exactly at `now` is upcoming - this boundary is inclusive
    /// here and strict in the grouped listing's count, deliberately.
    pub fn build(venue: Venue, shows: Vec<ShowWithArtist>, now: NaiveDateTime) -> Self {
        let mut past_shows = Vec::new();
        let mut upcoming_shows = Vec::new();

        for show in shows {
            let entry = ArtistShowEntry {
                artist_id: show.artist_id,
                artist_name: show.artist_name,
                artist_image_link: show.artist_image_link,
                start_time: format_start_time(show.start_time),
            };
            if show.start_time >= now {
                upcoming_shows.push(entry);
            } else {
                past_shows.push(entry);
            }
        }

        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            website: venue.website,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
