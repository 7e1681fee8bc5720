//! Preference row renderer.
//!
//! Picks the widget for a preference from its declared kind and decides what
//! activating the row does. Both are exhaustive matches over `PrefKind`, so a
//! new kind fails to compile until it has a widget.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::prefs::{PrefDef, PrefKind, PrefValue};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, SWITCH_OFF, SWITCH_ON};

const SLIDER_CELLS: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub enum RowWidget {
    Switch {
        on: bool,
    },
    Slider {
        value: f32,
        min: f32,
        max: f32,
        step: f32,
    },
    /// Row that opens a selection dialog; shows the current selection.
    Choice {
        summary: String,
    },
}

/// What activating a row (Enter / Space) does.
#[derive(Debug, Clone, PartialEq)]
pub enum RowActivation {
    /// Write this value to the store right away.
    Write(PrefValue),
    /// Ask the host to open the selection dialog for this preference.
    OpenDialog,
    Nothing,
}

pub fn row_widget(def: &PrefDef, value: &PrefValue) -> RowWidget {
    match def.kind {
        PrefKind::Boolean { default } => RowWidget::Switch {
            on: value.as_bool().unwrap_or(default),
        },
        PrefKind::Float {
            min,
            max,
            step,
            default,
        } => RowWidget::Slider {
            value: value.as_float().unwrap_or(default),
            min,
            max,
            step,
        },
        PrefKind::IntSelection { entries, default } => {
            let key = value.as_int().unwrap_or(default);
            let summary = entries
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, label)| label.resolve())
                .unwrap_or_default();
            RowWidget::Choice {
                summary: summary.to_string(),
            }
        }
        PrefKind::StringSelection { entries, default } => {
            let key = value.as_str().unwrap_or(default);
            let summary = entries
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, label)| label.resolve())
                .unwrap_or_default();
            RowWidget::Choice {
                summary: summary.to_string(),
            }
        }
        PrefKind::StringMultiSelection { entries, .. } => {
            let labels: Vec<&str> = match value.as_set() {
                Some(set) => entries
                    .iter()
                    .filter(|(k, _)| set.contains(*k))
                    .map(|(_, label)| label.resolve())
                    .collect(),
                None => Vec::new(),
            };
            let summary = if labels.is_empty() {
                "None".to_string()
            } else {
                labels.join(", ")
            };
            RowWidget::Choice { summary }
        }
    }
}

pub fn activate(def: &PrefDef, value: &PrefValue) -> RowActivation {
    match def.kind {
        PrefKind::Boolean { default } => {
            RowActivation::Write(PrefValue::Bool(!value.as_bool().unwrap_or(default)))
        }
        PrefKind::Float { .. } => RowActivation::Nothing,
        PrefKind::IntSelection { .. }
        | PrefKind::StringSelection { .. }
        | PrefKind::StringMultiSelection { .. } => RowActivation::OpenDialog,
    }
}

/// Left/Right on a row. Sliders move `steps` steps (clamped), switches turn
/// off (negative) or on (positive). `None` when nothing changes.
pub fn adjust(def: &PrefDef, value: &PrefValue, steps: i32) -> Option<PrefValue> {
    match def.kind {
        PrefKind::Float {
            min,
            max,
            step,
            default,
        } => {
            let current = value.as_float().unwrap_or(default);
            let next = (current + step * steps as f32).clamp(min, max);
            // Snap to 1/1000 so repeated steps don't drift.
            let next = (next * 1000.0).round() / 1000.0;
            (next != current).then_some(PrefValue::Float(next))
        }
        PrefKind::Boolean { default } => {
            let current = value.as_bool().unwrap_or(default);
            let next = steps > 0;
            (steps != 0 && next != current).then_some(PrefValue::Bool(next))
        }
        PrefKind::IntSelection { .. }
        | PrefKind::StringSelection { .. }
        | PrefKind::StringMultiSelection { .. } => None,
    }
}

/// Lines for one row: title and widget, then the summary if the preference
/// has one.
pub fn render_row(
    def: &PrefDef,
    widget: &RowWidget,
    width: usize,
    focused: bool,
) -> Vec<Line<'static>> {
    let title_style = Style::default().fg(HEADER_TEXT);
    let widget_spans = widget_spans(widget);
    let widget_width: usize = widget_spans.iter().map(|s| s.width()).sum();
    let padding = width
        .saturating_sub(def.title.chars().count())
        .saturating_sub(widget_width)
        .saturating_sub(4)
        .max(1);

    let mut spans = vec![
        Span::raw("  "),
        Span::styled(def.title, title_style),
        Span::raw(" ".repeat(padding)),
    ];
    spans.extend(widget_spans);
    spans.push(Span::raw("  "));

    let mut lines = vec![Line::from(spans)];
    if let Some(summary) = def.summary {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(summary, title_style.add_modifier(Modifier::DIM)),
        ]));
    }

    if focused {
        let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
        lines = lines.into_iter().map(|line| line.style(highlight)).collect();
    }
    lines
}

fn widget_spans(widget: &RowWidget) -> Vec<Span<'static>> {
    match widget {
        RowWidget::Switch { on: true } => {
            vec![Span::styled("[ ON ]", Style::default().fg(SWITCH_ON).add_modifier(Modifier::BOLD))]
        }
        RowWidget::Switch { on: false } => {
            vec![Span::styled("[ OFF ]", Style::default().fg(SWITCH_OFF))]
        }
        RowWidget::Slider {
            value,
            min,
            max,
            step,
        } => {
            let range = max - min;
            let fraction = if range > 0.0 {
                ((value - min) / range).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let knob = (fraction * (SLIDER_CELLS - 1) as f32).round() as usize;
            let text = if *step >= 1.0 {
                format!(" {:.0}", value)
            } else {
                format!(" {:.2}", value)
            };
            vec![
                Span::styled("━".repeat(knob), Style::default().fg(ACCENT)),
                Span::styled("●", Style::default().fg(ACCENT)),
                Span::styled(
                    "─".repeat(SLIDER_CELLS - 1 - knob),
                    Style::default().fg(SWITCH_OFF),
                ),
                Span::styled(text, Style::default().fg(HEADER_TEXT)),
            ]
        }
        RowWidget::Choice { summary } => vec![Span::styled(
            format!("{} ›", summary),
            Style::default().fg(ACCENT),
        )],
    }
}
