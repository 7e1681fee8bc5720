use crate::prefs::{icon_for, PrefDef, PrefKind, PrefValue};
use crate::ui::mvi::Reducer;
use crate::ui::selection::intent::SelectionIntent;
use crate::ui::selection::state::{
    ChoiceKey, ChoiceMode, ChoiceRow, SelectionDialogState, WorkingSelection,
};

pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionDialogState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::Open { def, current } => open(def, current),
            SelectionIntent::Confirm | SelectionIntent::Cancel => SelectionDialogState::Hidden,
            SelectionIntent::MoveUp => match state {
                SelectionDialogState::Visible {
                    target,
                    title,
                    rows,
                    mode,
                    working,
                    focused,
                } => {
                    let focused = if focused == 0 {
                        rows.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    SelectionDialogState::Visible {
                        target,
                        title,
                        rows,
                        mode,
                        working,
                        focused,
                    }
                }
                other => other,
            },
            SelectionIntent::MoveDown => match state {
                SelectionDialogState::Visible {
                    target,
                    title,
                    rows,
                    mode,
                    working,
                    focused,
                } => {
                    let focused = if focused + 1 >= rows.len() {
                        0
                    } else {
                        focused + 1
                    };
                    SelectionDialogState::Visible {
                        target,
                        title,
                        rows,
                        mode,
                        working,
                        focused,
                    }
                }
                other => other,
            },
            SelectionIntent::Select { index } => select(state, index),
            SelectionIntent::SelectFocused => {
                let index = match &state {
                    SelectionDialogState::Visible { focused, .. } => Some(*focused),
                    SelectionDialogState::Hidden => None,
                };
                match index {
                    Some(index) => select(state, index),
                    None => state,
                }
            }
        }
    }
}

/// Selecting a row also moves focus onto it.
fn select(state: SelectionDialogState, index: usize) -> SelectionDialogState {
    match state {
        SelectionDialogState::Visible {
            target,
            title,
            rows,
            mode,
            mut working,
            focused,
        } => {
            let focused = match rows.get(index) {
                Some(row) => {
                    working.select(row.key);
                    index
                }
                None => focused,
            };
            SelectionDialogState::Visible {
                target,
                title,
                rows,
                mode,
                working,
                focused,
            }
        }
        other => other,
    }
}

/// Build a fresh dialog from the committed value.
///
/// A committed value of the wrong shape, or with a key outside the entry list,
/// falls back to the declared default, so a single-choice dialog always opens
/// with one row selected. Non-choice
/// preferences leave the dialog hidden.
fn open(def: &'static PrefDef, current: PrefValue) -> SelectionDialogState {
    let current = def
        .kind
        .normalize(current)
        .unwrap_or_else(|| def.kind.default_value());
    let (rows, mode, working): (Vec<ChoiceRow>, ChoiceMode, WorkingSelection) = match def.kind {
        PrefKind::IntSelection { entries, default } => {
            let rows = entries
                .iter()
                .map(|(key, label)| ChoiceRow {
                    key: ChoiceKey::Int(*key),
                    label: label.resolve(),
                    icon: None,
                })
                .collect();
            let value = current.as_int().unwrap_or(default);
            (rows, ChoiceMode::Single, WorkingSelection::Int(value))
        }
        PrefKind::StringSelection { entries, default } => {
            let rows = entries
                .iter()
                .map(|(key, label)| ChoiceRow {
                    key: ChoiceKey::Str(*key),
                    label: label.resolve(),
                    icon: None,
                })
                .collect();
            let value = current
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| default.to_string());
            (rows, ChoiceMode::Single, WorkingSelection::Str(value))
        }
        PrefKind::StringMultiSelection {
            entries,
            with_icons,
            ..
        } => {
            let rows = entries
                .iter()
                .map(|(key, label)| ChoiceRow {
                    key: ChoiceKey::Str(*key),
                    label: label.resolve(),
                    icon: if with_icons { icon_for(key) } else { None },
                })
                .collect();
            let value = match current {
                PrefValue::StrSet(set) => set,
                _ => def
                    .kind
                    .default_value()
                    .as_set()
                    .cloned()
                    .unwrap_or_default(),
            };
            (
                rows,
                ChoiceMode::Multi { with_icons },
                WorkingSelection::Multi(value),
            )
        }
        PrefKind::Boolean { .. } | PrefKind::Float { .. } => return SelectionDialogState::Hidden,
    };

    let focused = match mode {
        ChoiceMode::Single => rows
            .iter()
            .position(|row| working.contains(row.key))
            .unwrap_or(0),
        ChoiceMode::Multi { .. } => 0,
    };

    SelectionDialogState::Visible {
        target: def.id,
        title: def.title,
        rows,
        mode,
        working,
        focused,
    }
}
