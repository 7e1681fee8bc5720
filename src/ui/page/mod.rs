//! Preferences pages (dock, drawer): static row lists, focus handling, and
//! the list view.

mod catalog;
mod intent;
mod reducer;
mod state;
mod view;

pub use catalog::{PageId, Section};
pub use intent::PageIntent;
pub use reducer::PageReducer;
pub use state::PageState;
pub use view::render_page;
