//! Run statistics printed after a successful conversion.

use std::collections::{BTreeSet, HashMap};

use crate::logs::{log_info, log_info_indent, log_success};
use crate::models::{MovieRecord, MusicRecord};

/// Number of leading movies sampled for the mood summary
pub const MOOD_SAMPLE_SIZE: usize = 10;

/// Number of artists listed in the music summary
pub const TOP_ARTISTS: usize = 10;

/// Moods seen in the first `limit` movies
pub fn sample_moods(movies: &[MovieRecord], limit: usize) -> BTreeSet<String> {
    movies
        .iter()
        .take(limit)
        .flat_map(|m| m.mood.iter().cloned())
        .collect()
}

/// Track count per artist, most tracks first; ties keep first-appearance order
pub fn artist_counts(tracks: &[MusicRecord]) -> Vec<(String, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for track in tracks {
        let known = positions.get(track.artist.as_str()).copied();
        match known {
            Some(pos) => counts[pos].1 += 1,
            None => {
                positions.insert(&track.artist, counts.len());
                counts.push((track.artist.clone(), 1));
            }
        }
    }

    // Stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn report_movies(movies: &[MovieRecord]) {
    log_success(format!("{} movies converted", movies.len()));

    let moods: Vec<String> = sample_moods(movies, MOOD_SAMPLE_SIZE).into_iter().collect();
    log_info(format!("Sample moods: {}", moods.join(", ")));
}

pub fn report_music(tracks: &[MusicRecord]) {
    let counts = artist_counts(tracks);

    log_success(format!("{} tracks converted", tracks.len()));
    log_info(format!("Total unique artists: {}", counts.len()));
    log_info(format!("Top {} artists by track count:", TOP_ARTISTS));
    for (artist, count) in counts.iter().take(TOP_ARTISTS) {
        log_info_indent(format!("- {}: {} tracks", artist, count), 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(artist: &str) -> MusicRecord {
        MusicRecord {
            id: 1,
            title: String::new(),
            artist: artist.to_string(),
            genre: "Pop".into(),
            album: "Unknown Album".into(),
            cover_url: String::new(),
            duration: "3:00".into(),
            popularity: 0,
            danceability: 0.5,
            energy: 0.5,
            valence: 0.5,
            tempo: 120.0,
        }
    }

    fn movie(moods: &[&str]) -> MovieRecord {
        MovieRecord {
            id: 1,
            title: String::new(),
            genre: Vec::new(),
            mood: moods.iter().map(|m| m.to_string()).collect(),
            overview: String::new(),
            release_year: None,
            poster_url: String::new(),
            rating: None,
            popularity: 0.0,
            vote_count: 0,
        }
    }

    #[test]
    fn test_artist_counts_sorted_with_stable_ties() {
        let tracks: Vec<MusicRecord> = ["B", "A", "C", "A", "C", "D"].iter().map(|a| track(a)).collect();
        let counts = artist_counts(&tracks);

        assert_eq!(
            counts,
            vec![
                ("A".to_string(), 2),
                ("C".to_string(), 2),
                ("B".to_string(), 1),
                ("D".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_sample_moods_only_first_movies() {
        let movies = vec![movie(&["Happy"]), movie(&["Dark", "Tense"]), movie(&["Bold"])];
        let moods = sample_moods(&movies, 2);

        assert_eq!(moods.len(), 3);
        assert!(!moods.contains("Bold"));
    }
}
