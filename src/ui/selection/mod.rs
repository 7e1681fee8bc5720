//! Selection dialog for choice-typed preferences: single choice (int or
//! string keyed) and multi choice (string set).

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_selection_dialog;
pub use intent::SelectionIntent;
pub use reducer::SelectionReducer;
pub use state::{ChoiceKey, ChoiceMode, ChoiceRow, SelectionDialogState, WorkingSelection};
