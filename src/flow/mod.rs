//! Effect runners behind the search and detail reducers.
//!
//! Each flow turns a user intent into a background fetch and returns the
//! intent `App` should dispatch right away; the fetch reports its outcome
//! later as an `AppEvent`.

mod detail;
mod search;
mod task;

pub use detail::DetailFlow;
pub use search::{is_searchable, SearchFlow};
pub use task::LatestTask;
