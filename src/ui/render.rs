//! Render functions for the TUI.
//!
//! Lays out the trending panel, the topic feed and the status bar, then
//! draws the help overlay on top when it is open.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use super::{help, status, topics, trending};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 16;

/// Main render function.
///
/// Takes `&mut App` because the feed panel height feeds back into the
/// scroll-proximity check.
pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let trending_height = trending::panel_height(app.trending.limit());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(trending_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    app.set_feed_viewport(chunks[1].height.saturating_sub(2) as usize);

    trending::render(f, app, chunks[0]);
    topics::render(f, app, chunks[1]);
    status::render(f, app, chunks[2]);

    if app.show_help {
        help::render(f, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::feed::{generate_batch, TopicCard, TopicSource};
    use crate::trending::{TrendingBoard, LOADING_PLACEHOLDER};
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    struct NoSource;

    #[async_trait]
    impl TopicSource for NoSource {
        async fn fetch_batch(&self, _page: u32) -> Vec<TopicCard> {
            Vec::new()
        }
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_small_terminal_shows_warning() {
        let mut app = App::new(&Config::default(), TrendingBoard::samples(), Arc::new(NoSource));
        let screen = draw(&mut app, 40, 10);
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn test_empty_board_shows_placeholder() {
        let mut app = App::new(&Config::default(), TrendingBoard::empty(), Arc::new(NoSource));
        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains(LOADING_PLACEHOLDER));
        assert!(screen.contains("Real-time Trending"));
    }

    #[test]
    fn test_help_overlay_marks_focused_panel() {
        let mut app = App::new(&Config::default(), TrendingBoard::samples(), Arc::new(NoSource));
        app.show_help = true;
        let screen = draw(&mut app, 100, 40);
        assert!(screen.contains("Anywhere"));
        assert!(screen.contains("▶ Feed focused"));
    }

    #[test]
    fn test_render_records_feed_viewport() {
        let mut app = App::new(&Config::default(), TrendingBoard::samples(), Arc::new(NoSource));
        draw(&mut app, 100, 30);
        // 30 rows - 7 trending - 1 status - 2 borders
        assert_eq!(app.feed_viewport_rows, 20);
    }

    #[test]
    fn test_feed_renders_cards_and_loading_footer() {
        let mut app = App::new(&Config::default(), TrendingBoard::samples(), Arc::new(NoSource));
        let page = app.request_more().unwrap();
        app.apply_batch(generate_batch(&mut StdRng::seed_from_u64(3), 1, 5));
        assert_eq!(page, 1);

        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("#1"));
        assert!(screen.contains("Discussions (1/5)"));

        // 5 cards exactly fill the 20-row viewport, so the next page starts
        assert_eq!(app.request_more(), Some(2));
        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("Loading more topics..."));
    }
}
