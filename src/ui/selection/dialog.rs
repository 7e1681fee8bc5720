//! Rendering for the selection dialog overlay.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, Theme};

use super::state::{ChoiceMode, ChoiceRow, SelectionDialogState};

const MIN_DIALOG_WIDTH: u16 = 36;

/// Lines below the rows: spacer and buttons.
const FOOTER_LINES: u16 = 2;

/// Render the dialog centered in `area`. Does nothing when hidden.
pub fn render_selection_dialog(
    frame: &mut Frame,
    area: Rect,
    state: &SelectionDialogState,
    theme: &Theme,
) {
    let SelectionDialogState::Visible {
        title,
        rows,
        mode,
        focused,
        ..
    } = state
    else {
        return;
    };

    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    let width = (label_width as u16)
        .saturating_add(14)
        .max(MIN_DIALOG_WIDTH)
        .max(title.chars().count() as u16 + 6);
    let wanted_height = (rows.len() as u16)
        .saturating_add(FOOTER_LINES)
        .saturating_add(2);
    let dialog = centered_rect_by_size(area, width, wanted_height);

    // Keep the focused row inside the visible window.
    let visible_rows = dialog.height.saturating_sub(FOOTER_LINES + 2).max(1) as usize;
    let first = focused.saturating_sub(visible_rows - 1);

    let mut lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(first)
        .take(visible_rows)
        .map(|(index, row)| {
            let line = row_line(row, *mode, state.is_selected(index), label_width);
            if index == *focused {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(buttons_line(dialog.width.saturating_sub(2) as usize));

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(theme.border_type())
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}

/// One entry row.
///
/// - single choice: `(•) label`
/// - multi choice: `[x] label`
/// - multi choice with icons: `icon label [x]`, blank icon slot when the
///   lookup has nothing for the key
fn row_line(
    row: &ChoiceRow,
    mode: ChoiceMode,
    selected: bool,
    label_width: usize,
) -> Line<'static> {
    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let control_style = if selected {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let checkbox = if selected { "[x]" } else { "[ ]" };

    match mode {
        ChoiceMode::Single => {
            let radio = if selected { "(•)" } else { "( )" };
            Line::from(vec![
                Span::raw(" "),
                Span::styled(radio, control_style),
                Span::raw(" "),
                Span::styled(row.label, text_style),
            ])
        }
        ChoiceMode::Multi { with_icons: false } => Line::from(vec![
            Span::raw(" "),
            Span::styled(checkbox, control_style),
            Span::raw(" "),
            Span::styled(row.label, text_style),
        ]),
        ChoiceMode::Multi { with_icons: true } => {
            let padding = label_width.saturating_sub(row.label.chars().count());
            Line::from(vec![
                Span::raw(" "),
                Span::styled(row.icon.unwrap_or(" "), Style::default().fg(ACCENT)),
                Span::raw("  "),
                Span::styled(row.label, text_style),
                Span::raw(" ".repeat(padding + 2)),
                Span::styled(checkbox, control_style),
            ])
        }
    }
}

fn buttons_line(inner_width: usize) -> Line<'static> {
    let cancel = " Cancel (Esc) ";
    let ok = " OK (Enter) ";
    let gap = inner_width
        .saturating_sub(cancel.len())
        .saturating_sub(ok.len())
        .max(1);
    let button = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled(cancel, button),
        Span::raw(" ".repeat(gap)),
        Span::styled(ok, button),
    ])
}
