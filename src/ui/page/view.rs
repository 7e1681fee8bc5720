use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::config::PreferenceStore;
use crate::ui::page::state::PageState;
use crate::ui::rows::{render_row, row_widget};
use crate::ui::theme::{Theme, ACCENT, GLOBAL_BORDER};

/// Render the focused page: section headers and one row block per preference,
/// read fresh from the store.
pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    state: &PageState,
    store: &dyn PreferenceStore,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type())
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;

    let (lines, focused_line) = page_lines(state, store, inner_width);

    // Scroll just enough to keep the focused row (and its summary) visible.
    let scroll = (focused_line + 2).saturating_sub(inner_height) as u16;
    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// All lines of the page plus the line index of the focused row.
fn page_lines(
    state: &PageState,
    store: &dyn PreferenceStore,
    width: usize,
) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut focused_line = 0;
    let mut index = 0;

    for section in state.page.sections() {
        if let Some(header) = section.header_text() {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!(" {}", header),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )));
        }
        for id in section.prefs {
            let def = id.def();
            let widget = row_widget(def, &store.get(*id));
            let focused = index == state.focused;
            if focused {
                focused_line = lines.len();
            }
            lines.extend(render_row(def, &widget, width, focused));
            index += 1;
        }
    }

    (lines, focused_line)
}
