use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Opened {
                imdb_id,
                generation,
            } => DetailState::Loading {
                imdb_id,
                generation,
            },

            DetailIntent::Closed => DetailState::Closed,

            DetailIntent::Loaded { generation, detail } => match state {
                DetailState::Loading {
                    generation: current,
                    ..
                } if current == generation => DetailState::Loaded {
                    detail,
                    user_rating: 0,
                },
                other => {
                    tracing::trace!(generation, "Dropping stale detail result");
                    other
                }
            },

            DetailIntent::Failed {
                generation,
                message,
            } => match state {
                DetailState::Loading {
                    imdb_id,
                    generation: current,
                } if current == generation => DetailState::Failed { imdb_id, message },
                other => other,
            },

            DetailIntent::SetRating { rating } => match state {
                DetailState::Loaded { detail, .. } => DetailState::Loaded {
                    detail,
                    user_rating: rating,
                },
                other => other,
            },
        }
    }
}
