use crate::ui::mvi::Reducer;
use crate::ui::page::intent::PageIntent;
use crate::ui::page::state::PageState;

pub struct PageReducer;

impl Reducer for PageReducer {
    type State = PageState;
    type Intent = PageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let len = state.page.prefs().len();
        match intent {
            PageIntent::MoveUp => PageState {
                focused: if state.focused == 0 {
                    len.saturating_sub(1)
                } else {
                    state.focused - 1
                },
                ..state
            },
            PageIntent::MoveDown => PageState {
                focused: if state.focused + 1 >= len {
                    0
                } else {
                    state.focused + 1
                },
                ..state
            },
            PageIntent::NextPage => PageState::new(state.page.next()),
        }
    }
}
