use crate::api::MovieDetail;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// A lookup for `imdb_id` was issued under `generation`.
    Opened { imdb_id: String, generation: u64 },
    /// Detail view dismissed (back, Esc, new query, add).
    Closed,
    Loaded { generation: u64, detail: MovieDetail },
    Failed { generation: u64, message: String },
    /// User picked a star count. Ignored unless a detail is loaded.
    SetRating { rating: u8 },
}

impl Intent for DetailIntent {}
