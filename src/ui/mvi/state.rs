/// Marker for reducer-owned state.
///
/// `Default` is the state before any intent; `App` swaps it out with
/// `std::mem::take` while reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
