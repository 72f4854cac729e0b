use crate::app::{App, Focus};
use crate::trending::{TrendingRow, LOADING_PLACEHOLDER};
use crate::util::{display_width, strip_control_chars, truncate_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Height of the trending panel for a given row limit (rows + borders).
pub fn panel_height(limit: usize) -> u16 {
    limit.clamp(1, 10) as u16 + 2
}

/// Render the trending leaderboard for the selected period.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    // Layout may produce zero-sized rects during extreme resizes
    if area.width < 3 || area.height < 3 {
        return;
    }

    let is_focused = app.focus == Focus::Trending;
    let available_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = app
        .trending
        .rows()
        .into_iter()
        .map(|row| match row {
            TrendingRow::Placeholder => ListItem::new(Line::from(Span::styled(
                LOADING_PLACEHOLDER,
                app.style("trending_placeholder"),
            ))),
            TrendingRow::Entry {
                rank,
                title,
                agree,
                disagree,
                views,
            } => {
                let rank_str = format!("{:>2}. ", rank);
                let stats = format!("  👍 {}  👎 {}  👁 {}", agree, disagree, views);

                let max_title = available_width
                    .saturating_sub(display_width(&rank_str))
                    .saturating_sub(display_width(&stats));
                // Titles may come from a user-supplied data file
                let title = strip_control_chars(&title);
                let title = truncate_to_width(&title, max_title).into_owned();

                ListItem::new(Line::from(vec![
                    Span::styled(rank_str, app.style("trending_rank")),
                    Span::styled(title, app.style("trending_title")),
                    Span::styled(stats, app.style("trending_views")),
                ]))
            }
        })
        .collect();

    let border_style = if is_focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let title = format!(
        " {} ({}/4) ",
        app.trending.label(),
        app.trending.selected_index() + 1
    );

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_height_includes_borders() {
        assert_eq!(panel_height(5), 7);
        assert_eq!(panel_height(0), 3);
        assert_eq!(panel_height(50), 12);
    }
}
