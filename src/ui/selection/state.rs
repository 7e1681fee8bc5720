use std::collections::BTreeSet;

use crate::prefs::{PrefId, PrefValue};
use crate::ui::mvi::UiState;

/// Key of one entry in a selection dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKey {
    Int(i32),
    Str(&'static str),
}

/// One rendered entry of a selection dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceRow {
    pub key: ChoiceKey,
    pub label: &'static str,
    /// Only filled for multi-choice preferences that declare icons.
    pub icon: Option<&'static str>,
}

/// Row layout of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMode {
    /// Radio rows, exactly one selected.
    Single,
    /// Checkbox rows, any subset selected.
    Multi { with_icons: bool },
}

/// Dialog-local working copy of the preference value.
///
/// Built fresh on every open and dropped on close; only `App::confirm_dialog`
/// turns it into a store write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkingSelection {
    Int(i32),
    Str(String),
    Multi(BTreeSet<String>),
}

impl WorkingSelection {
    pub fn contains(&self, key: ChoiceKey) -> bool {
        match (self, key) {
            (Self::Int(current), ChoiceKey::Int(key)) => *current == key,
            (Self::Str(current), ChoiceKey::Str(key)) => current == key,
            (Self::Multi(set), ChoiceKey::Str(key)) => set.contains(key),
            _ => false,
        }
    }

    /// Single choice: replace the selection. Multi choice: strict toggle.
    pub fn select(&mut self, key: ChoiceKey) {
        match (self, key) {
            (Self::Int(current), ChoiceKey::Int(key)) => *current = key,
            (Self::Str(current), ChoiceKey::Str(key)) => *current = key.to_string(),
            (Self::Multi(set), ChoiceKey::Str(key)) => {
                if !set.remove(key) {
                    set.insert(key.to_string());
                }
            }
            _ => {}
        }
    }

    pub fn to_value(&self) -> PrefValue {
        match self {
            Self::Int(v) => PrefValue::Int(*v),
            Self::Str(v) => PrefValue::Str(v.clone()),
            Self::Multi(set) => PrefValue::StrSet(set.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionDialogState {
    #[default]
    Hidden,
    Visible {
        target: PrefId,
        title: &'static str,
        rows: Vec<ChoiceRow>,
        mode: ChoiceMode,
        working: WorkingSelection,
        focused: usize,
    },
}

impl UiState for SelectionDialogState {}

impl SelectionDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Preference the open dialog edits.
    pub fn target(&self) -> Option<PrefId> {
        match self {
            Self::Visible { target, .. } => Some(*target),
            Self::Hidden => None,
        }
    }

    /// Whether row `index` is selected in the current working copy.
    ///
    /// Always derived from `working`, never cached per row.
    pub fn is_selected(&self, index: usize) -> bool {
        match self {
            Self::Visible { rows, working, .. } => rows
                .get(index)
                .is_some_and(|row| working.contains(row.key)),
            Self::Hidden => false,
        }
    }

    pub fn selected_count(&self) -> usize {
        match self {
            Self::Visible { rows, .. } => (0..rows.len()).filter(|&i| self.is_selected(i)).count(),
            Self::Hidden => 0,
        }
    }

    pub fn working(&self) -> Option<&WorkingSelection> {
        match self {
            Self::Visible { working, .. } => Some(working),
            Self::Hidden => None,
        }
    }

    /// The write a confirm would perform: target preference and working value.
    pub fn pending_commit(&self) -> Option<(PrefId, PrefValue)> {
        match self {
            Self::Visible {
                target, working, ..
            } => Some((*target, working.to_value())),
            Self::Hidden => None,
        }
    }
}
