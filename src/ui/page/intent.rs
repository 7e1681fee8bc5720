use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIntent {
    MoveUp,
    MoveDown,
    NextPage,
}

impl Intent for PageIntent {}
