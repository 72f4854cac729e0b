use crate::app::{App, Focus, CARD_HEIGHT};
use crate::feed::TopicCard;
use crate::util::{display_width, group_thousands, truncate_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Braille spinner shown while a page is loading.
pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Text for a vote bar segment: the label when it fits, blanks otherwise.
fn segment(label: &str, width: usize, right_align: bool) -> String {
    if label.len() > width {
        " ".repeat(width)
    } else if right_align {
        format!("{:>width$}", label, width = width)
    } else {
        format!("{:<width$}", label, width = width)
    }
}

/// Split a bar of `width` cells into agree and disagree segments.
fn vote_bar(card: &TopicCard, width: usize) -> (String, String) {
    let agree_width = width * card.agree_percent() as usize / 100;
    let disagree_width = width - agree_width;
    (
        segment(&format!(" Agree {}%", card.agree_percent()), agree_width, false),
        segment(
            &format!("{}% Disagree ", card.disagree_percent()),
            disagree_width,
            true,
        ),
    )
}

/// The CARD_HEIGHT lines making up one card.
fn card_lines<'a>(app: &App, card: &'a TopicCard, width: usize, highlighted: bool) -> Vec<Line<'a>> {
    let heat = card.heat.label();
    let title_width = width.saturating_sub(display_width(heat) + 2);
    let title_style = if highlighted {
        app.style("topic_selected")
    } else {
        app.style("topic_title")
    };

    let (agree, disagree) = vote_bar(card, width);

    vec![
        Line::from(vec![
            Span::styled(heat, app.style(card.heat.style_role())),
            Span::raw("  "),
            Span::styled(truncate_to_width(&card.title, title_width), title_style),
        ]),
        Line::from(Span::styled(
            format!("{} · by {}", card.posted_at, card.author),
            app.style("topic_meta"),
        )),
        Line::from(vec![
            Span::styled(agree, app.style("vote_agree")),
            Span::styled(disagree, app.style("vote_disagree")),
        ]),
        Line::from(Span::styled(
            format!(
                "Total {} votes · 💬 {} · 👁 {}",
                group_thousands(card.total_votes),
                card.comment_count,
                card.view_count_label
            ),
            app.style("topic_meta"),
        )),
    ]
}

/// Render the topic feed panel with its loading/end footer.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    // Layout may produce zero-sized rects during extreme resizes
    if area.width < 3 || area.height < 3 {
        return;
    }

    let is_focused = app.focus == Focus::Feed;
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let cards = app.feed.cards();

    let visible = inner_height.div_ceil(CARD_HEIGHT);
    let mut lines: Vec<Line> = Vec::with_capacity(visible * CARD_HEIGHT + 1);
    for (i, card) in cards.iter().enumerate().skip(app.feed_scroll).take(visible) {
        let highlighted = is_focused && i == app.feed_scroll;
        lines.extend(card_lines(app, card, inner_width, highlighted));
    }

    if app.feed.is_loading() {
        lines.push(Line::from(Span::styled(
            format!("{} Loading more topics...", SPINNER[app.spinner_frame % SPINNER.len()]),
            app.style("feed_loading"),
        )));
    } else if !app.feed.has_more() {
        lines.push(Line::from(Span::styled(
            "No more topics",
            app.style("feed_end"),
        )));
    }

    let border_style = if is_focused {
        app.style("panel_border_focused")
    } else {
        app.style("panel_border")
    };

    let title = if cards.is_empty() {
        " Discussions ".to_string()
    } else {
        format!(
            " Discussions ({}/{}) ",
            (app.feed_scroll + 1).min(cards.len()),
            cards.len()
        )
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(paragraph, area);
}
