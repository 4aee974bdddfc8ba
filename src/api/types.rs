use serde::{Deserialize, Serialize};

/// One row of a search result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// Full record for a single title, as returned by the `i=` lookup.
///
/// OMDb sends every field as a string and uses "N/A" for unknown values;
/// absent fields deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
}

/// Envelope of the `s=` search endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<MovieSummary>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// Just enough of a detail payload to tell success from `Response:"False"`.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseFlag {
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

pub(crate) fn is_affirmative(response: &str) -> bool {
    response.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_omdb_field_names() {
        let json = r#"{"Title":"Rush","Year":"2013","Poster":"p.jpg","imdbID":"tt1979320","Type":"movie"}"#;
        let summary: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.imdb_id, "tt1979320");
        assert_eq!(summary.title, "Rush");
        assert_eq!(summary.year, "2013");
        assert_eq!(summary.poster, "p.jpg");
    }

    #[test]
    fn detail_missing_fields_default_to_empty() {
        let json = r#"{"Title":"Rush","Runtime":"123 min","imdbRating":"8.1","Response":"True"}"#;
        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.title, "Rush");
        assert_eq!(detail.runtime, "123 min");
        assert_eq!(detail.imdb_rating, "8.1");
        assert!(detail.director.is_empty());
        assert!(detail.imdb_id.is_empty());
    }

    #[test]
    fn search_envelope_false_has_no_rows() {
        let json = r#"{"Response":"False","Error":"Movie not found!"}"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        assert!(!is_affirmative(&envelope.response));
        assert!(envelope.search.is_empty());
        assert_eq!(envelope.error.as_deref(), Some("Movie not found!"));
    }
}
