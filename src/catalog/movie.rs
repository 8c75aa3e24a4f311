//! Movie record

use serde::{Deserialize, Serialize};

/// A single movie entry.
///
/// Serializes with exactly the ten keys of the published dataset:
/// `filmtv_ID, film_title, year, genre, duration, country, director,
/// actors, avg_vote, votes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "filmtv_ID")]
    pub filmtv_id: i64,

    pub film_title: String,

    pub year: i32,

    /// One or more genre names, e.g. "Comedy" or "Romantic, Comedy"
    pub genre: String,

    /// Running time in minutes
    pub duration: u32,

    pub country: String,

    #[serde(default)]
    pub director: String,

    #[serde(default)]
    pub actors: String,

    /// Average user vote on a 0-10 scale
    pub avg_vote: f64,

    pub votes: u64,
}
