//! View-model shape for the show listing page.

use serde::Serialize;

use crate::common::format_start_time;
use crate::domains::shows::models::ShowListing;

/// One row on the show listing page: both sides resolved, time formatted
#[derive(Debug, Clone, Serialize)]
pub struct ShowListEntry {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// One entry per show, no filtering, repository order preserved.
pub fn build_show_list(shows: Vec<ShowListing>) -> Vec<ShowListEntry> {
    shows
        .into_iter()
        .map(|show| ShowListEntry {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_start_time(show.start_time),
        })
        .collect()
}
