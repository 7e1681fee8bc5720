use crate::prefs::PrefId;
use crate::ui::mvi::UiState;
use crate::ui::page::catalog::PageId;

/// Which page is shown and which of its rows has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    pub page: PageId,
    pub focused: usize,
}

impl UiState for PageState {}

impl PageState {
    pub fn new(page: PageId) -> Self {
        Self { page, focused: 0 }
    }

    pub fn focused_pref(&self) -> Option<PrefId> {
        self.page.prefs().get(self.focused).copied()
    }
}
