use crate::config::PreferenceStore;
use crate::prefs::PrefId;
use crate::ui::mvi::Reducer;
use crate::ui::page::{PageId, PageIntent, PageReducer, PageState};
use crate::ui::rows::{self, RowActivation};
use crate::ui::selection::{SelectionDialogState, SelectionIntent, SelectionReducer};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Page,
    Dialog,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Host of the preferences UI.
///
/// Owns the store, the page state, and the single selection dialog. The
/// dialog state is the only record of which preference is being edited, so
/// at most one dialog can be open.
pub struct App {
    should_quit: bool,
    store: Box<dyn PreferenceStore>,
    page: PageState,
    dialog: SelectionDialogState,
}

impl App {
    pub fn new(store: Box<dyn PreferenceStore>, page: PageId) -> Self {
        Self {
            should_quit: false,
            store,
            page: PageState::new(page),
            dialog: SelectionDialogState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Theme is re-read from the store so radius changes apply immediately.
    pub fn theme(&self) -> Theme {
        Theme::from_store(self.store.as_ref())
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn dialog(&self) -> &SelectionDialogState {
        &self.dialog
    }

    pub fn focus(&self) -> Focus {
        if self.dialog.is_visible() {
            Focus::Dialog
        } else {
            Focus::Page
        }
    }

    pub fn dispatch_page(&mut self, intent: PageIntent) {
        if self.dialog.is_visible() {
            return;
        }
        dispatch_mvi!(self, page, PageReducer, intent);
    }

    /// Dispatch a dialog intent that has no side effects.
    ///
    /// `Open` and `Confirm` go through `open_dialog` / `confirm_dialog`.
    pub fn dispatch_dialog(&mut self, intent: SelectionIntent) {
        match intent {
            SelectionIntent::Open { def, .. } => self.open_dialog(def.id),
            SelectionIntent::Confirm => self.confirm_dialog(),
            other => {
                dispatch_mvi!(self, dialog, SelectionReducer, other);
            }
        }
    }

    /// Enter / Space on the focused row.
    pub fn activate_focused(&mut self) {
        if self.dialog.is_visible() {
            return;
        }
        let Some(id) = self.page.focused_pref() else {
            return;
        };
        match rows::activate(id.def(), &self.store.get(id)) {
            RowActivation::Write(value) => self.store.set(id, value),
            RowActivation::OpenDialog => self.open_dialog(id),
            RowActivation::Nothing => {}
        }
    }

    /// Left / Right on the focused row.
    pub fn adjust_focused(&mut self, steps: i32) {
        if self.dialog.is_visible() {
            return;
        }
        let Some(id) = self.page.focused_pref() else {
            return;
        };
        if let Some(value) = rows::adjust(id.def(), &self.store.get(id), steps) {
            self.store.set(id, value);
        }
    }

    /// Open the selection dialog for `id`, seeded from the committed value.
    ///
    /// Ignored while another dialog is open.
    pub fn open_dialog(&mut self, id: PrefId) {
        if self.dialog.is_visible() {
            tracing::debug!(pref = id.as_str(), "Dialog already open, ignoring");
            return;
        }
        let current = self.store.get(id);
        dispatch_mvi!(
            self,
            dialog,
            SelectionReducer,
            SelectionIntent::Open {
                def: id.def(),
                current,
            }
        );
        if self.dialog.is_visible() {
            tracing::debug!(pref = id.as_str(), "Selection dialog opened");
        }
    }

    /// Write the working selection to the store (once) and close.
    pub fn confirm_dialog(&mut self) {
        let Some((id, value)) = self.dialog.pending_commit() else {
            return;
        };
        tracing::debug!(pref = id.as_str(), ?value, "Selection dialog confirmed");
        self.store.set(id, value);
        dispatch_mvi!(self, dialog, SelectionReducer, SelectionIntent::Confirm);
    }

    /// Close without writing.
    pub fn cancel_dialog(&mut self) {
        if let Some(id) = self.dialog.target() {
            tracing::debug!(pref = id.as_str(), "Selection dialog cancelled");
        }
        dispatch_mvi!(self, dialog, SelectionReducer, SelectionIntent::Cancel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrefStore;
    use crate::prefs::PrefValue;

    fn make_app(page: PageId) -> App {
        App::new(Box::new(PrefStore::in_memory()), page)
    }

    fn focus_on(app: &mut App, id: PrefId) {
        while app.page().focused_pref() != Some(id) {
            app.dispatch_page(PageIntent::MoveDown);
        }
    }

    #[test]
    fn starts_on_requested_page_with_page_focus() {
        let app = make_app(PageId::Drawer);
        assert_eq!(app.page().page, PageId::Drawer);
        assert_eq!(app.focus(), Focus::Page);
    }

    #[test]
    fn activating_switch_writes_immediately() {
        let mut app = make_app(PageId::Dock);
        app.activate_focused();
        assert_eq!(app.store().get(PrefId::DockHide), PrefValue::Bool(true));
        assert_eq!(app.focus(), Focus::Page);
    }

    #[test]
    fn activating_choice_row_opens_dialog_for_it() {
        let mut app = make_app(PageId::Dock);
        focus_on(&mut app, PrefId::DockNumIcons);
        app.activate_focused();
        assert_eq!(app.focus(), Focus::Dialog);
        assert_eq!(app.dialog().target(), Some(PrefId::DockNumIcons));
    }

    #[test]
    fn page_ignores_navigation_while_dialog_open() {
        let mut app = make_app(PageId::Dock);
        focus_on(&mut app, PrefId::DockBackgroundColor);
        app.activate_focused();
        let before = *app.page();
        app.dispatch_page(PageIntent::MoveDown);
        app.adjust_focused(1);
        assert_eq!(*app.page(), before);
    }

    #[test]
    fn second_open_is_ignored() {
        let mut app = make_app(PageId::Drawer);
        app.open_dialog(PrefId::DrawerSortMode);
        app.open_dialog(PrefId::DrawerColumns);
        assert_eq!(app.dialog().target(), Some(PrefId::DrawerSortMode));
    }

    #[test]
    fn adjusting_slider_writes_step() {
        let mut app = make_app(PageId::Dock);
        focus_on(&mut app, PrefId::DockScale);
        app.adjust_focused(-1);
        assert_eq!(app.store().get(PrefId::DockScale), PrefValue::Float(0.95));
    }

    #[test]
    fn theme_follows_store() {
        let mut app = make_app(PageId::Dock);
        assert_eq!(app.theme(), Theme::default());
        app.store.set(PrefId::ThemeCornerRadiusOverride, PrefValue::Bool(true));
        app.store.set(PrefId::ThemeCornerRadius, PrefValue::Float(4.0));
        assert_eq!(app.theme().corner_radius, 4.0);
    }
}
