use crate::api::MovieSummary;
use crate::ui::mvi::UiState;

/// Transient search state. Replaced wholesale on every query change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<MovieSummary>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Generation of the latest issued request; older results are dropped.
    pub generation: u64,
    /// Highlighted row in `results`.
    pub selected: usize,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.results.get(self.selected)
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}
