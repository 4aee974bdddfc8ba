/// Marker for anything a reducer can consume: key-driven actions such as a
/// query edit, and completions reported by background fetches.
pub trait Intent: Send + 'static {}
