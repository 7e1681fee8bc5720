/// Marker trait for component state.
///
/// `Default` is the closed/initial state; `App` swaps the current value out
/// with `std::mem::take` before handing it to the reducer.
pub trait UiState: Clone + PartialEq + Default + 'static {}
