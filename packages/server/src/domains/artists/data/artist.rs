//! View-model shapes for the artist detail page. Pure functions; `now` is
//! always injected.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::common::format_start_time;
use crate::domains::artists::models::Artist;
use crate::domains::shows::models::ShowWithVenue;

/// A show entry on the artist detail page, carrying the venue side
#[derive(Debug, Clone, Serialize)]
pub struct VenueShowEntry {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

/// Artist detail page: the artist's fields plus its shows partitioned into
/// past and upcoming
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShowEntry>,
    pub upcoming_shows: Vec<VenueShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    /// Same partition rule as the venue detail: upcoming iff
    /// `start_time >= now`.
    pub fn build(artist: Artist, shows: Vec<ShowWithVenue>, now: NaiveDateTime) -> Self {
        let mut past_shows = Vec::new();
        let mut upcoming_shows = Vec::new();

        for show in shows {
            let entry = VenueShowEntry {
                venue_id: show.venue_id,
                venue_name: show.venue_name,
                venue_image_link: show.venue_image_link,
                start_time: format_start_time(show.start_time),
            };
            if show.start_time >= now {
                upcoming_shows.push(entry);
            } else {
                past_shows.push(entry);
            }
        }

        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
