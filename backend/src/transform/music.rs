//! Music rows (`music_dataset.csv`) → [`MusicRecord`].

use super::fields::{cell_f64_or, cell_truncated_i64_or};
use super::{outcome, RowOutcome};
use crate::error::{RowError, RowResult};
use crate::models::MusicRecord;
use crate::parser::Row;

pub const ARTISTS: &str = "artists";
pub const TRACK_GENRE: &str = "track_genre";
pub const DURATION_MS: &str = "duration_ms";
pub const TRACK_NAME: &str = "track_name";
pub const ALBUM_NAME: &str = "album_name";
pub const POPULARITY: &str = "popularity";
pub const DANCEABILITY: &str = "danceability";
pub const ENERGY: &str = "energy";
pub const VALENCE: &str = "valence";
pub const TEMPO: &str = "tempo";

pub const DEFAULT_GENRE: &str = "Pop";
pub const DEFAULT_ALBUM: &str = "Unknown Album";
pub const DEFAULT_DURATION: &str = "3:00";

/// Cover art assigned to tracks in rotation
pub const COVER_IMAGES: [&str; 7] = [
    "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/167636/pexels-photo-167636.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/164938/pexels-photo-164938.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/257904/pexels-photo-257904.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/164821/pexels-photo-164821.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/712970/pexels-photo-712970.jpeg?auto=compress&cs=tinysrgb&w=400",
    "https://images.pexels.com/photos/1763075/pexels-photo-1763075.jpeg?auto=compress&cs=tinysrgb&w=400",
];

/// Transform one music row. `index` is the 1-based row position.
///
/// Rows without an artist are filtered out silently; unparseable numeric
/// fields skip the row as an error. Album, genre and the numeric columns get
/// their default only when the column is missing: a blank album or genre
/// stays blank and a blank number is unparseable.
pub fn transform_music_row(index: usize, row: &Row) -> RowOutcome<MusicRecord> {
    let Some(artist) = row.field(ARTISTS).and_then(first_artist) else {
        return RowOutcome::filtered(index, "no artist");
    };
    outcome(index, build_track(index, artist, row))
}

fn build_track(index: usize, artist: &str, row: &Row) -> RowResult<MusicRecord> {
    Ok(MusicRecord {
        id: index as u64,
        title: row.text(TRACK_NAME),
        artist: artist.to_string(),
        genre: row
            .trimmed(TRACK_GENRE)
            .map(title_case)
            .unwrap_or_else(|| DEFAULT_GENRE.to_string()),
        album: row.trimmed(ALBUM_NAME).unwrap_or(DEFAULT_ALBUM).to_string(),
        cover_url: cover_for(index).to_string(),
        duration: duration(row)?,
        popularity: cell_truncated_i64_or(row, POPULARITY, 0)?,
        danceability: cell_f64_or(row, DANCEABILITY, 0.5)?,
        energy: cell_f64_or(row, ENERGY, 0.5)?,
        valence: cell_f64_or(row, VALENCE, 0.5)?,
        tempo: cell_f64_or(row, TEMPO, 120.0)?,
    })
}

/// First of a `;`-separated artist list, `None` if it is blank
fn first_artist(raw: &str) -> Option<&str> {
    raw.split(';').next().map(str::trim).filter(|a| !a.is_empty())
}

fn cover_for(index: usize) -> &'static str {
    COVER_IMAGES[index % COVER_IMAGES.len()]
}

fn duration(row: &Row) -> RowResult<String> {
    match row.field(DURATION_MS) {
        Some(raw) => raw
            .parse::<u64>()
            .map(format_duration)
            .map_err(|_| RowError::invalid_integer(DURATION_MS, raw)),
        None => Ok(DEFAULT_DURATION.to_string()),
    }
}

/// Milliseconds → `M:SS`, seconds zero-padded
pub fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Upper-case the first letter of every run of letters, lower-case the rest.
///
/// `hip-hop` → `Hip-Hop`, `r&b` → `R&B`, `SAD` → `Sad`.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;

    for c in raw.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
