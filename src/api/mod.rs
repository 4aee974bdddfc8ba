//! Client for the OMDb movie database.
//!
//! Two endpoints are used:
//!
//! ```text
//! GET <base>/?apikey=<key>&s=<query>   → { Search: [..], Response }
//! GET <base>/?apikey=<key>&i=<id>      → { Title, Year, Runtime, .. }
//! ```

mod client;
mod error;
mod types;

pub use client::OmdbClient;
pub use error::{ApiError, DETAIL_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE, SEARCH_NOT_FOUND_MESSAGE};
pub use types::{MovieDetail, MovieSummary};
