use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Cleared { query, generation } => SearchState {
                query,
                generation,
                ..SearchState::default()
            },
            SearchIntent::Started { query, generation } => SearchState {
                query,
                generation,
                is_loading: true,
                // Rows of the previous query stay until the new ones land.
                results: state.results,
                error: None,
                selected: 0,
            },
            SearchIntent::Loaded {
                generation,
                results,
            } => {
                if generation != state.generation {
                    tracing::trace!(generation, current = state.generation, "Dropping stale search result");
                    return state;
                }
                SearchState {
                    results,
                    is_loading: false,
                    error: None,
                    selected: 0,
                    ..state
                }
            }
            SearchIntent::Failed {
                generation,
                message,
            } => {
                if generation != state.generation {
                    tracing::trace!(generation, current = state.generation, "Dropping stale search error");
                    return state;
                }
                SearchState {
                    results: Vec::new(),
                    is_loading: false,
                    error: Some(message),
                    selected: 0,
                    ..state
                }
            }
            SearchIntent::MoveUp => {
                let selected = if state.selected == 0 {
                    state.results.len().saturating_sub(1)
                } else {
                    state.selected - 1
                };
                SearchState { selected, ..state }
            }
            SearchIntent::MoveDown => {
                let selected = if state.selected + 1 >= state.results.len() {
                    0
                } else {
                    state.selected + 1
                };
                SearchState { selected, ..state }
            }
        }
    }
}
