mod common;

use common::{recording_app, RecordingStore};
use neoprefs::prefs::{PrefId, PrefValue};
use neoprefs::ui::mvi::Reducer;
use neoprefs::ui::page::{PageId, PageIntent, PageReducer, PageState};

#[test]
fn dock_page_lists_dock_preferences_in_order() {
    assert_eq!(
        PageId::Dock.prefs(),
        vec![
            PrefId::DockHide,
            PrefId::DockBackground,
            PrefId::DockBackgroundColor,
            PrefId::DockOpacity,
            PrefId::DockScale,
            PrefId::DockNumIcons,
            PrefId::DockSearchBar,
        ]
    );
}

#[test]
fn focus_wraps_around_page() {
    let state = PageReducer::reduce(PageState::new(PageId::Dock), PageIntent::MoveUp);
    assert_eq!(state.focused_pref(), Some(PrefId::DockSearchBar));
    let state = PageReducer::reduce(state, PageIntent::MoveDown);
    assert_eq!(state.focused_pref(), Some(PrefId::DockHide));
}

#[test]
fn switching_page_resets_focus() {
    let state = PageReducer::reduce(PageState::new(PageId::Dock), PageIntent::MoveDown);
    let state = PageReducer::reduce(state, PageIntent::NextPage);
    assert_eq!(state, PageState::new(PageId::Drawer));
}

#[test]
fn toggling_switch_twice_writes_twice() {
    let (store, writes) = RecordingStore::new();
    let mut app = recording_app(PageId::Drawer, store);
    while app.page().focused_pref() != Some(PrefId::DrawerHideAppLabels) {
        app.dispatch_page(PageIntent::MoveDown);
    }
    app.activate_focused();
    app.activate_focused();
    assert_eq!(
        *writes.borrow(),
        vec![
            (PrefId::DrawerHideAppLabels, PrefValue::Bool(true)),
            (PrefId::DrawerHideAppLabels, PrefValue::Bool(false)),
        ]
    );
}

#[test]
fn slider_at_limit_does_not_write() {
    let (store, writes) = RecordingStore::new();
    let store = store.with(PrefId::DockOpacity, PrefValue::Float(1.0));
    let mut app = recording_app(PageId::Dock, store);
    while app.page().focused_pref() != Some(PrefId::DockOpacity) {
        app.dispatch_page(PageIntent::MoveDown);
    }
    app.adjust_focused(1);
    assert!(writes.borrow().is_empty());
}
