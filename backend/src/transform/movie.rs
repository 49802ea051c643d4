//! Movie rows (`movies.csv`) → [`MovieRecord`].

use super::fields::{f64_or, i64_or, optional_f64, year_prefix};
use super::mood::resolve_moods;
use super::{outcome, RowOutcome};
use crate::error::RowResult;
use crate::models::MovieRecord;
use crate::parser::Row;

pub const RELEASE_DATE: &str = "Release_Date";
pub const GENRE: &str = "Genre";
pub const TITLE: &str = "Title";
pub const OVERVIEW: &str = "Overview";
pub const POSTER_URL: &str = "Poster_Url";
pub const VOTE_AVERAGE: &str = "Vote_Average";
pub const POPULARITY: &str = "Popularity";
pub const VOTE_COUNT: &str = "Vote_Count";

/// Transform one movie row. `index` is the 1-based row position and becomes the id.
///
/// Any unparseable numeric field skips the whole row.
pub fn transform_movie_row(index: usize, row: &Row) -> RowOutcome<MovieRecord> {
    outcome(index, build_movie(index, row))
}

fn build_movie(index: usize, row: &Row) -> RowResult<MovieRecord> {
    let genre = split_genres(row.get(GENRE).unwrap_or(""));
    let mood = resolve_moods(genre.as_slice());

    Ok(MovieRecord {
        id: index as u64,
        title: row.text(TITLE),
        mood,
        genre,
        overview: row.text(OVERVIEW),
        release_year: year_prefix(row, RELEASE_DATE)?,
        poster_url: row.text(POSTER_URL),
        rating: optional_f64(row, VOTE_AVERAGE)?,
        popularity: f64_or(row, POPULARITY, 0.0)?,
        vote_count: i64_or(row, VOTE_COUNT, 0)?,
    })
}

/// Comma-separated genres, trimmed, empties dropped, order kept
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RowError;
    use crate::transform::SkipReason;

    fn heat() -> Vec<(&'static str, &'static str)> {
        vec![
            (RELEASE_DATE, "1995-12-15"),
            (TITLE, "  Heat "),
            (OVERVIEW, "Obsessive master thief Neil McCauley leads a crew."),
            (POPULARITY, "41.3"),
            (VOTE_COUNT, "6290"),
            (VOTE_AVERAGE, "7.9"),
            (GENRE, "Action, Crime, Drama, Thriller"),
            (POSTER_URL, "https://image.tmdb.org/t/p/original/heat.jpg"),
        ]
    }

    fn row_with(overrides: &[(&'static str, &'static str)]) -> Row {
        let mut fields = heat();
        for (column, value) in overrides {
            fields.retain(|(c, _)| c != column);
            fields.push((*column, *value));
        }
        fields.into_iter().collect()
    }

    fn movie(row: &Row) -> MovieRecord {
        transform_movie_row(3, row).record().unwrap()
    }

    #[test]
    fn test_full_row() {
        let m = movie(&row_with(&[]));

        assert_eq!(m.id, 3);
        assert_eq!(m.title, "Heat");
        assert_eq!(m.genre, vec!["Action", "Crime", "Drama", "Thriller"]);
        assert_eq!(m.release_year, Some(1995));
        assert_eq!(m.rating, Some(7.9));
        assert_eq!(m.popularity, 41.3);
        assert_eq!(m.vote_count, 6290);
        assert!(m.mood.contains("Dark"));
        assert!(m.mood.contains("Energetic"));
    }

    #[test]
    fn test_release_year_from_date() {
        let m = movie(&row_with(&[(RELEASE_DATE, "1994-10-14")]));
        assert_eq!(m.release_year, Some(1994));
    }

    #[test]
    fn test_release_year_missing_or_not_numeric() {
        assert_eq!(movie(&row_with(&[(RELEASE_DATE, "")])).release_year, None);
        assert_eq!(movie(&row_with(&[(RELEASE_DATE, "TBA")])).release_year, None);
    }

    #[test]
    fn test_numeric_defaults() {
        let m = movie(&row_with(&[(VOTE_AVERAGE, ""), (POPULARITY, ""), (VOTE_COUNT, " ")]));

        assert_eq!(m.rating, None);
        assert_eq!(m.popularity, 0.0);
        assert_eq!(m.vote_count, 0);
    }

    #[test]
    fn test_genre_tokens_trimmed_and_empties_dropped() {
        let m = movie(&row_with(&[(GENRE, " Drama ,, Romance ,")]));
        assert_eq!(m.genre, vec!["Drama", "Romance"]);
    }

    #[test]
    fn test_unknown_genres_give_neutral_mood() {
        let m = movie(&row_with(&[(GENRE, "TV Movie")]));
        assert_eq!(m.mood.len(), 1);
        assert!(m.mood.contains("Neutral"));

        let m = movie(&row_with(&[(GENRE, "")]));
        assert!(m.genre.is_empty());
        assert!(m.mood.contains("Neutral"));
    }

    #[test]
    fn test_bad_rating_skips_row() {
        let outcome = transform_movie_row(4, &row_with(&[(VOTE_AVERAGE, "seven")]));
        let skipped = outcome.skipped().unwrap();

        assert_eq!(skipped.row, 4);
        assert_eq!(
            skipped.reason,
            SkipReason::Invalid(RowError::invalid_float(VOTE_AVERAGE, "seven"))
        );
    }

    #[test]
    fn test_bad_vote_count_skips_row() {
        let outcome = transform_movie_row(5, &row_with(&[(VOTE_COUNT, "12.5")]));
        assert!(outcome.skipped().unwrap().is_error());
    }

    #[test]
    fn test_digit_led_garbage_date_skips_row() {
        let outcome = transform_movie_row(6, &row_with(&[(RELEASE_DATE, "2O21-01-01")]));
        assert!(outcome.skipped().unwrap().is_error());
    }

    #[test]
    fn test_missing_text_columns_default_to_empty() {
        let row: Row = [(GENRE, "Comedy")].into_iter().collect();
        let m = movie(&row);

        assert_eq!(m.title, "");
        assert_eq!(m.overview, "");
        assert_eq!(m.poster_url, "");
        assert_eq!(m.release_year, None);
    }
}
