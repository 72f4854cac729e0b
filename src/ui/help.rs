//! Help overlay listing the live keybindings.
//!
//! One section per binding context. Keys bound to the same action share a
//! row, and the section for the focused panel is marked.

use crate::app::App;
use crate::keybindings::{Action, Context, KeybindingRegistry};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::input::focus_to_context;

/// Width of the key column.
const KEY_COLUMN: usize = 16;

/// One row of the overlay before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HelpRow {
    Section { title: &'static str, focused: bool },
    Binding { keys: String, description: &'static str },
    Gap,
}

/// Group bindings by context, merging keys that trigger the same action.
fn help_rows(keys: &KeybindingRegistry, focused: Context) -> Vec<HelpRow> {
    let bindings = keys.all_bindings();
    let mut rows = Vec::new();

    for ctx in Context::ALL {
        let mut merged: Vec<(Vec<String>, &'static str, Action)> = Vec::new();
        for (c, key, action, description) in &bindings {
            if *c != ctx {
                continue;
            }
            match merged.iter_mut().find(|(_, _, a)| a == action) {
                Some((held, _, _)) => held.push(key.clone()),
                None => merged.push((vec![key.clone()], *description, *action)),
            }
        }
        if merged.is_empty() {
            continue;
        }

        if !rows.is_empty() {
            rows.push(HelpRow::Gap);
        }
        rows.push(HelpRow::Section {
            title: ctx.when_active(),
            focused: ctx == focused,
        });
        rows.extend(merged.into_iter().map(|(keys, description, _)| HelpRow::Binding {
            keys: keys.join(", "),
            description,
        }));
    }

    rows
}

/// Render the help overlay on top of the board.
pub fn render(f: &mut Frame, app: &App) {
    let rows = help_rows(&app.keybindings, focus_to_context(app.focus));

    let overlay = overlay_area(f.area(), rows.len());
    if overlay.width < 20 || overlay.height < 5 {
        return;
    }

    let visible = overlay.height.saturating_sub(2) as usize;
    let max_scroll = rows.len().saturating_sub(visible);
    let scroll = app.help_scroll_offset.min(max_scroll);

    let lines: Vec<Line> = rows
        .into_iter()
        .skip(scroll)
        .take(visible)
        .map(|row| match row {
            HelpRow::Section { title, focused } => {
                let marker = if focused { "▶ " } else { "  " };
                Line::from(Span::styled(
                    format!("{}{}", marker, title),
                    app.style("help_heading").add_modifier(Modifier::BOLD),
                ))
            }
            HelpRow::Binding { keys, description } => Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", keys, width = KEY_COLUMN),
                    app.style("trending_rank"),
                ),
                Span::raw(description),
            ]),
            HelpRow::Gap => Line::from(""),
        })
        .collect();

    let title = if max_scroll > 0 {
        format!(" Keys {}/{} (j/k scroll, ? close) ", scroll + 1, max_scroll + 1)
    } else {
        " Keys (? close) ".to_string()
    };

    f.render_widget(Clear, overlay);
    f.render_widget(
        Paragraph::new(lines).style(app.style("help_body")).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border_focused"))
                .title(title),
        ),
        overlay,
    );
}

/// A box sized to its content, capped by the screen and centered in it.
fn overlay_area(screen: Rect, content_rows: usize) -> Rect {
    let width = screen.width.saturating_sub(4).min(64);
    let wanted = u16::try_from(content_rows.saturating_add(2)).unwrap_or(u16::MAX);
    let height = wanted.min(screen.height.saturating_sub(2));
    Rect::new(
        screen.x + (screen.width - width) / 2,
        screen.y + (screen.height - height) / 2,
        width,
        height,
    )
}
