use crate::api::MovieSummary;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Query too short to search: results and error are cleared, nothing is fetched.
    Cleared { query: String, generation: u64 },
    /// A fetch for `query` was issued under `generation`.
    Started { query: String, generation: u64 },
    /// Fetch completed with rows.
    Loaded {
        generation: u64,
        results: Vec<MovieSummary>,
    },
    /// Fetch completed with a user-facing error.
    Failed { generation: u64, message: String },
    MoveUp,
    MoveDown,
}

impl Intent for SearchIntent {}
