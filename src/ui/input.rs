use crate::ui::app::{App, Focus};
use crate::ui::page::PageIntent;
use crate::ui::selection::SelectionIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press to the dialog when one is open, otherwise to the page.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Dialog => handle_dialog_key(app, key),
        Focus::Page => handle_page_key(app, key),
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_dialog(SelectionIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_dialog(SelectionIntent::MoveDown),
        KeyCode::Char(' ') => app.dispatch_dialog(SelectionIntent::SelectFocused),
        KeyCode::Enter => app.confirm_dialog(),
        KeyCode::Esc => app.cancel_dialog(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            // 1-based shortcut; 0 is not a row.
            let number = ch.to_digit(10).unwrap_or(0) as usize;
            if number > 0 {
                app.dispatch_dialog(SelectionIntent::Select { index: number - 1 });
            }
        }
        _ => {}
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_page(PageIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_page(PageIntent::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        KeyCode::Left | KeyCode::Char('h') => app.adjust_focused(-1),
        KeyCode::Right | KeyCode::Char('l') => app.adjust_focused(1),
        KeyCode::Tab | KeyCode::BackTab => app.dispatch_page(PageIntent::NextPage),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
