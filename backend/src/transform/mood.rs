//! Genre → mood derivation for movies.

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

/// Mood used when none of a movie's genres is known
pub const NEUTRAL_MOOD: &str = "Neutral";

/// Moods associated with each known genre
pub const GENRE_MOODS: [(&str, [&str; 3]); 18] = [
    ("Action", ["Excited", "Adventurous", "Energetic"]),
    ("Adventure", ["Adventurous", "Excited", "Curious"]),
    ("Animation", ["Happy", "Joyful", "Cheerful"]),
    ("Comedy", ["Happy", "Joyful", "Cheerful"]),
    ("Crime", ["Tense", "Mysterious", "Dark"]),
    ("Documentary", ["Thoughtful", "Curious", "Inspired"]),
    ("Drama", ["Emotional", "Thoughtful", "Intense"]),
    ("Family", ["Happy", "Warm", "Joyful"]),
    ("Fantasy", ["Magical", "Adventurous", "Curious"]),
    ("History", ["Thoughtful", "Inspired", "Reflective"]),
    ("Horror", ["Scared", "Tense", "Thrilling"]),
    ("Music", ["Joyful", "Energetic", "Inspired"]),
    ("Mystery", ["Mysterious", "Curious", "Tense"]),
    ("Romance", ["Romantic", "Emotional", "Warm"]),
    ("Science Fiction", ["Curious", "Excited", "Adventurous"]),
    ("Thriller", ["Tense", "Excited", "Thrilling"]),
    ("War", ["Intense", "Emotional", "Thoughtful"]),
    ("Western", ["Adventurous", "Intense", "Bold"]),
];

static MOOD_TABLE: Lazy<HashMap<&'static str, [&'static str; 3]>> =
    Lazy::new(|| GENRE_MOODS.iter().copied().collect());

/// Moods for a genre, if the genre is known. Matching is exact.
pub fn moods_for(genre: &str) -> Option<&'static [&'static str; 3]> {
    MOOD_TABLE.get(genre)
}

/// Union of the moods of all known genres; `{"Neutral"}` if there are none.
pub fn resolve_moods<S: AsRef<str>>(genres: &[S]) -> BTreeSet<String> {
    let mut moods: BTreeSet<String> = genres
        .iter()
        .filter_map(|g| moods_for(g.as_ref()))
        .flatten()
        .map(|m| m.to_string())
        .collect();

    if moods.is_empty() {
        moods.insert(NEUTRAL_MOOD.to_string());
    }
    moods
}
