mod common;

use common::str_set;
use neoprefs::prefs::{PrefId, PrefValue};
use neoprefs::ui::mvi::Reducer;
use neoprefs::ui::selection::{
    ChoiceMode, SelectionDialogState, SelectionIntent, SelectionReducer,
};

fn open(id: PrefId, current: PrefValue) -> SelectionDialogState {
    SelectionReducer::reduce(
        SelectionDialogState::Hidden,
        SelectionIntent::Open {
            def: id.def(),
            current,
        },
    )
}

fn reduce_all(state: SelectionDialogState, intents: Vec<SelectionIntent>) -> SelectionDialogState {
    intents
        .into_iter()
        .fold(state, |state, intent| SelectionReducer::reduce(state, intent))
}

#[test]
fn single_choice_has_exactly_one_selected_row() {
    let mut state = open(PrefId::DockNumIcons, PrefValue::Int(4));
    assert_eq!(state.selected_count(), 1);
    for index in 0..5 {
        state = SelectionReducer::reduce(state, SelectionIntent::Select { index });
        assert_eq!(state.selected_count(), 1);
        assert!(state.is_selected(index));
    }
}

#[test]
fn single_choice_preselects_current_value() {
    let state = open(PrefId::DockNumIcons, PrefValue::Int(6));
    // entries are 3..=7, so 6 is index 3
    assert!(state.is_selected(3));
    assert_eq!(
        state.pending_commit(),
        Some((PrefId::DockNumIcons, PrefValue::Int(6)))
    );
}

#[test]
fn single_choice_with_unknown_key_opens_on_default() {
    let state = open(PrefId::DrawerSortMode, PrefValue::Int(42));
    assert_eq!(state.selected_count(), 1);
    assert!(state.is_selected(0));
    assert_eq!(
        state.pending_commit(),
        Some((PrefId::DrawerSortMode, PrefValue::Int(0)))
    );
}

#[test]
fn multi_choice_with_unknown_key_opens_on_default() {
    let state = open(PrefId::DrawerPopup, str_set(&["edit", "launch"]));
    assert_eq!(
        state.pending_commit(),
        Some((PrefId::DrawerPopup, str_set(&["edit", "uninstall"])))
    );
}

#[test]
fn string_single_choice_commits_key_not_label() {
    let state = reduce_all(
        open(PrefId::DockBackgroundColor, PrefValue::Str("surface".into())),
        vec![SelectionIntent::Select { index: 1 }],
    );
    assert_eq!(
        state.pending_commit(),
        Some((PrefId::DockBackgroundColor, PrefValue::Str("primary".into())))
    );
}

#[test]
fn multi_choice_toggle_twice_restores_set() {
    let initial = open(PrefId::DrawerPopup, str_set(&["edit", "uninstall"]));
    let before = initial.pending_commit();
    let state = reduce_all(
        initial,
        vec![
            SelectionIntent::Select { index: 0 },
            SelectionIntent::Select { index: 0 },
        ],
    );
    assert_eq!(state.pending_commit(), before);
}

#[test]
fn multi_choice_can_become_empty() {
    let state = reduce_all(
        open(PrefId::DrawerPopup, str_set(&["edit"])),
        vec![SelectionIntent::Select { index: 1 }],
    );
    assert_eq!(state.selected_count(), 0);
    assert_eq!(
        state.pending_commit(),
        Some((PrefId::DrawerPopup, str_set(&[])))
    );
}

#[test]
fn popup_dialog_uses_icon_rows() {
    let state = open(PrefId::DrawerPopup, str_set(&[]));
    let SelectionDialogState::Visible { mode, rows, .. } = &state else {
        panic!("dialog should be visible");
    };
    assert_eq!(*mode, ChoiceMode::Multi { with_icons: true });
    assert!(rows.iter().any(|row| row.icon.is_some()));
    assert!(rows.iter().any(|row| row.icon.is_none()));
}

#[test]
fn out_of_range_select_is_ignored() {
    let state = open(PrefId::DrawerSortMode, PrefValue::Int(0));
    let after = SelectionReducer::reduce(state.clone(), SelectionIntent::Select { index: 99 });
    assert_eq!(after, state);
}

#[test]
fn cancel_and_confirm_both_hide() {
    let state = open(PrefId::DrawerColumns, PrefValue::Int(5));
    assert_eq!(
        SelectionReducer::reduce(state.clone(), SelectionIntent::Cancel),
        SelectionDialogState::Hidden
    );
    assert_eq!(
        SelectionReducer::reduce(state, SelectionIntent::Confirm),
        SelectionDialogState::Hidden
    );
}

#[test]
fn navigation_wraps() {
    let state = reduce_all(
        open(PrefId::DrawerSortMode, PrefValue::Int(0)),
        vec![SelectionIntent::MoveUp, SelectionIntent::SelectFocused],
    );
    assert_eq!(
        state.pending_commit(),
        Some((PrefId::DrawerSortMode, PrefValue::Int(3)))
    );
}

mod scenarios {
    use super::*;
    use crate::common::{str_set, RecordingStore};
    use neoprefs::config::PreferenceStore;
    use neoprefs::prefs::{Label, PrefDef, PrefKind};

    static SIZE: PrefDef = PrefDef {
        id: PrefId::DrawerColumns,
        title: "Size",
        summary: None,
        kind: PrefKind::IntSelection {
            entries: &[
                (1, Label::Text("Small")),
                (2, Label::Text("Medium")),
                (3, Label::Text("Large")),
            ],
            default: 1,
        },
    };

    static FLAGS: PrefDef = PrefDef {
        id: PrefId::DrawerPopup,
        title: "Flags",
        summary: None,
        kind: PrefKind::StringMultiSelection {
            entries: &[("a", Label::Text("A")), ("b", Label::Text("B"))],
            default: &[],
            with_icons: false,
        },
    };

    /// Mirrors the host: write the pending value, then close.
    fn confirm(state: SelectionDialogState, store: &mut dyn PreferenceStore) -> SelectionDialogState {
        if let Some((id, value)) = state.pending_commit() {
            store.set(id, value);
        }
        SelectionReducer::reduce(state, SelectionIntent::Confirm)
    }

    #[test]
    fn int_choice_select_and_confirm() {
        let (mut store, writes) = RecordingStore::new();
        let state = SelectionReducer::reduce(
            SelectionDialogState::Hidden,
            SelectionIntent::Open {
                def: &SIZE,
                current: PrefValue::Int(2),
            },
        );
        assert!(state.is_selected(1));
        let state = SelectionReducer::reduce(state, SelectionIntent::Select { index: 2 });
        let state = confirm(state, &mut store);

        assert_eq!(state, SelectionDialogState::Hidden);
        assert_eq!(*writes.borrow(), vec![(SIZE.id, PrefValue::Int(3))]);
    }

    #[test]
    fn multi_choice_toggles_then_cancel_keeps_store() {
        let (store, writes) = RecordingStore::new();
        let store = store.with(FLAGS.id, str_set(&["a"]));
        let state = SelectionReducer::reduce(
            SelectionDialogState::Hidden,
            SelectionIntent::Open {
                def: &FLAGS,
                current: store.get(FLAGS.id),
            },
        );
        let state = SelectionReducer::reduce(state, SelectionIntent::Select { index: 1 });
        assert_eq!(state.pending_commit(), Some((FLAGS.id, str_set(&["a", "b"]))));
        let state = SelectionReducer::reduce(state, SelectionIntent::Select { index: 0 });
        assert_eq!(state.pending_commit(), Some((FLAGS.id, str_set(&["b"]))));
        let state = SelectionReducer::reduce(state, SelectionIntent::Cancel);

        assert_eq!(state, SelectionDialogState::Hidden);
        assert!(writes.borrow().is_empty());
        assert_eq!(store.get(FLAGS.id), str_set(&["a"]));
    }
}
