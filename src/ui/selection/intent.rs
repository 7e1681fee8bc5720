use crate::prefs::{PrefDef, PrefValue};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SelectionIntent {
    /// Open the dialog for `def`, seeding the working copy from `current`
    /// (the committed store value).
    Open {
        def: &'static PrefDef,
        current: PrefValue,
    },
    MoveUp,
    MoveDown,
    /// Tap on row `index`: select it (single) or toggle it (multi).
    Select { index: usize },
    /// Tap on the focused row.
    SelectFocused,
    /// Close after the caller has written the working value.
    Confirm,
    /// Close and drop the working value.
    Cancel,
}

impl Intent for SelectionIntent {}
