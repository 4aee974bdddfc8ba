use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::MovieDetail;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchedError {
    #[error("Rating {rating} is outside 1..={max}")]
    InvalidRating { rating: u8, max: u8 },

    #[error("'{imdb_id}' is already on the watched list")]
    AlreadyWatched { imdb_id: String },
}

/// A movie on the watched list.
///
/// Serialized with the field names the list has always been stored under,
/// so existing slots keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedEntry {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: f64,
    /// Minutes.
    pub runtime: u32,
    #[serde(rename = "userRating")]
    pub user_rating: u8,
}

impl WatchedEntry {
    /// Builds an entry from a loaded detail and the user's stars.
    ///
    /// Unparseable runtime or rating text ("N/A", missing) becomes 0.
    pub fn from_detail(
        detail: &MovieDetail,
        user_rating: u8,
        max_rating: u8,
    ) -> Result<Self, WatchedError> {
        if user_rating == 0 || user_rating > max_rating {
            return Err(WatchedError::InvalidRating {
                rating: user_rating,
                max: max_rating,
            });
        }

        let runtime = parse_runtime_minutes(&detail.runtime).unwrap_or_else(|| {
            tracing::warn!(
                imdb_id = %detail.imdb_id,
                runtime = %detail.runtime,
                "Runtime is not '<minutes> <unit>', storing 0"
            );
            0
        });
        let imdb_rating = parse_rating(&detail.imdb_rating).unwrap_or_else(|| {
            tracing::warn!(
                imdb_id = %detail.imdb_id,
                rating = %detail.imdb_rating,
                "IMDb rating is not numeric, storing 0"
            );
            0.0
        });

        Ok(Self {
            imdb_id: detail.imdb_id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster: detail.poster.clone(),
            imdb_rating,
            runtime,
            user_rating,
        })
    }
}

/// First whitespace-separated token of e.g. "142 min", as minutes.
pub fn parse_runtime_minutes(runtime: &str) -> Option<u32> {
    runtime.split_whitespace().next()?.parse().ok()
}

/// Numeric rating from a string such as "8.1"; rejects NaN and infinities.
pub fn parse_rating(rating: &str) -> Option<f64> {
    rating
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rush() -> MovieDetail {
        MovieDetail {
            imdb_id: "tt1979320".to_string(),
            title: "Rush".to_string(),
            year: "2013".to_string(),
            poster: "p.jpg".to_string(),
            runtime: "123 min".to_string(),
            imdb_rating: "8.1".to_string(),
            ..MovieDetail::default()
        }
    }

    #[test]
    fn copies_identity_and_parses_numbers() {
        let entry = WatchedEntry::from_detail(&rush(), 9, 10).unwrap();
        assert_eq!(entry.imdb_id, "tt1979320");
        assert_eq!(entry.title, "Rush");
        assert_eq!(entry.year, "2013");
        assert_eq!(entry.poster, "p.jpg");
        assert_eq!(entry.runtime, 123);
        assert_eq!(entry.imdb_rating, 8.1);
        assert_eq!(entry.user_rating, 9);
    }

    #[test]
    fn zero_rating_is_rejected() {
        let err = WatchedEntry::from_detail(&rush(), 0, 10).unwrap_err();
        assert_eq!(err, WatchedError::InvalidRating { rating: 0, max: 10 });
    }

    #[test]
    fn rating_above_max_is_rejected() {
        assert!(WatchedEntry::from_detail(&rush(), 6, 5).is_err());
    }

    #[test]
    fn unparseable_runtime_becomes_zero() {
        let mut detail = rush();
        detail.runtime = "N/A".to_string();
        let entry = WatchedEntry::from_detail(&detail, 5, 10).unwrap();
        assert_eq!(entry.runtime, 0);

        detail.runtime = String::new();
        let entry = WatchedEntry::from_detail(&detail, 5, 10).unwrap();
        assert_eq!(entry.runtime, 0);
    }

    #[test]
    fn unparseable_imdb_rating_becomes_zero() {
        let mut detail = rush();
        detail.imdb_rating = "N/A".to_string();
        let entry = WatchedEntry::from_detail(&detail, 5, 10).unwrap();
        assert_eq!(entry.imdb_rating, 0.0);
    }

    #[test]
    fn runtime_takes_first_token() {
        assert_eq!(parse_runtime_minutes("142 min"), Some(142));
        assert_eq!(parse_runtime_minutes("  90   min "), Some(90));
        assert_eq!(parse_runtime_minutes("min 90"), None);
    }

    #[test]
    fn serializes_with_stored_field_names() {
        let entry = WatchedEntry::from_detail(&rush(), 9, 10).unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["imdbID"], "tt1979320");
        assert_eq!(json["userRating"], 9);
        assert_eq!(json["imdbRating"], 8.1);
        assert_eq!(json["runtime"], 123);
    }
}
