use crate::api::MovieDetail;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Loading {
        imdb_id: String,
        generation: u64,
    },
    Loaded {
        detail: MovieDetail,
        /// Pending stars, 0 until the user picks some.
        user_rating: u8,
    },
    /// Lookup failed; the pane stays open until closed or re-selected.
    Failed {
        imdb_id: String,
        message: String,
    },
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Identifier the pane is showing (or trying to show).
    pub fn imdb_id(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Loading { imdb_id, .. } | Self::Failed { imdb_id, .. } => Some(imdb_id),
            Self::Loaded { detail, .. } => Some(&detail.imdb_id),
        }
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        match self {
            Self::Loaded { detail, .. } => Some(detail),
            _ => None,
        }
    }

    pub fn user_rating(&self) -> u8 {
        match self {
            Self::Loaded { user_rating, .. } => *user_rating,
            _ => 0,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
