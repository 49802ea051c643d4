//! Output records consumed by the front-end.
//!
//! - [`MovieRecord`] - one entry of `movies_real.json`
//! - [`MusicRecord`] - one entry of `music_real.json`
//!
//! Field order in the structs is the field order in the written JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// Movies
// =============================================================================

/// A movie with its derived moods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// 1-based position of the source row
    pub id: u64,
    pub title: String,
    /// Genres in source order
    pub genre: Vec<String>,
    /// Never empty; `{"Neutral"}` when no genre is recognized
    pub mood: BTreeSet<String>,
    pub overview: String,
    pub release_year: Option<i32>,
    pub poster_url: String,
    pub rating: Option<f64>,
    pub popularity: f64,
    pub vote_count: i64,
}

// =============================================================================
// Music
// =============================================================================

/// A music track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicRecord {
    /// 1-based position of the source row
    pub id: u64,
    pub title: String,
    /// First listed artist
    pub artist: String,
    /// Title-cased genre
    pub genre: String,
    pub album: String,
    pub cover_url: String,
    /// `M:SS`
    pub duration: String,
    pub popularity: i64,
    pub danceability: f64,
    pub energy: f64,
    pub valence: f64,
    pub tempo: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_field_names_and_order() {
        let movie = MovieRecord {
            id: 1,
            title: "Heat".into(),
            genre: vec!["Crime".into()],
            mood: ["Dark".to_string()].into_iter().collect(),
            overview: String::new(),
            release_year: None,
            poster_url: String::new(),
            rating: Some(7.9),
            popularity: 0.0,
            vote_count: 0,
        };

        let json = serde_json::to_string(&movie).unwrap();
        let keys = [
            "\"id\"", "\"title\"", "\"genre\"", "\"mood\"", "\"overview\"",
            "\"releaseYear\"", "\"posterUrl\"", "\"rating\"", "\"popularity\"", "\"voteCount\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains("\"releaseYear\":null"));
    }

    #[test]
    fn test_music_uses_camel_case() {
        let track = MusicRecord {
            id: 2,
            title: "Song".into(),
            artist: "A".into(),
            genre: "Pop".into(),
            album: "Unknown Album".into(),
            cover_url: "https://example.com/c.jpeg".into(),
            duration: "3:00".into(),
            popularity: 50,
            danceability: 0.5,
            energy: 0.5,
            valence: 0.5,
            tempo: 120.0,
        };

        let value = serde_json::to_value(&track).unwrap();
        assert_eq!(value["coverUrl"], "https://example.com/c.jpeg");
        assert_eq!(value["tempo"], 120.0);
    }
}
