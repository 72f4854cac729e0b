use crate::config::Config;
use crate::feed::{near_bottom, FeedLoader, TopicCard, TopicSource};
use crate::keybindings::KeybindingRegistry;
use crate::theme::{StyleMap, ThemeVariant};
use crate::trending::{Step, TrendingBoard, TrendingCarousel};
use ratatui::style::Style;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::time::Instant;

/// Terminal rows one topic card occupies in the feed panel.
pub const CARD_HEIGHT: usize = 4;

/// How long a status message stays visible.
const STATUS_TTL_SECS: u64 = 3;

// ============================================================================
// Focus and Event Types
// ============================================================================

/// Which panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Trending,
    Feed,
}

/// Events from background tasks.
#[derive(Debug)]
pub enum AppEvent {
    /// A feed page finished its simulated fetch.
    BatchLoaded { page: u32, cards: Vec<TopicCard> },
    /// A background task panicked.
    ///
    /// Fields:
    /// - `task`: Name of the task that panicked (e.g. "feed_load")
    /// - `error`: The panic message extracted from the payload
    TaskPanicked { task: &'static str, error: String },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state. Owned by the UI task; never shared.
pub struct App {
    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,

    pub keybindings: KeybindingRegistry,

    // Data
    pub trending: TrendingCarousel,
    pub feed: FeedLoader,
    /// Backend the feed pages come from. Cloned into each load task.
    pub source: Arc<dyn TopicSource>,

    // UI State
    pub focus: Focus,
    /// Index of the first visible card.
    pub feed_scroll: usize,
    /// Rows available inside the feed panel, updated on every render.
    pub feed_viewport_rows: usize,
    /// Rows from the bottom at which the next page is requested.
    pub scroll_threshold: usize,
    /// Set by scrolling, resizes and arrivals; the tick handler evaluates the
    /// proximity predicate at most once per tick while this is set.
    pub proximity_check_pending: bool,

    // Search
    pub search_mode: bool,
    pub search_input: String,

    // Navigation
    pub site_url: String,
    pub open_links: bool,

    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Dirty flag to skip unnecessary frame renders
    pub needs_redraw: bool,

    /// Current frame of the loading spinner animation.
    pub spinner_frame: usize,

    pub show_help: bool,
    pub help_scroll_offset: usize,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("theme_variant", &self.theme_variant)
            .field("period", &self.trending.period())
            .field("feed", &self.feed.state())
            .field("cards", &self.feed.cards().len())
            .field("focus", &self.focus)
            .field("feed_scroll", &self.feed_scroll)
            .field("search_mode", &self.search_mode)
            .finish_non_exhaustive()
    }
}

impl App {
    pub fn new(config: &Config, board: TrendingBoard, source: Arc<dyn TopicSource>) -> Self {
        let theme_variant = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme, falling back to dark");
            ThemeVariant::Dark
        });

        let mut keybindings = KeybindingRegistry::new();
        for warning in keybindings.apply_overrides(&config.keybindings) {
            tracing::warn!("{}", warning);
        }

        Self {
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            keybindings,
            trending: TrendingCarousel::new(board, config.trending_limit),
            feed: FeedLoader::new(config.max_pages),
            source,
            focus: Focus::Feed,
            feed_scroll: 0,
            feed_viewport_rows: 0,
            scroll_threshold: config.scroll_threshold,
            proximity_check_pending: true,
            search_mode: false,
            search_input: String::new(),
            site_url: config.site_url.clone(),
            open_links: config.open_links,
            status_message: None,
            needs_redraw: true,
            spinner_frame: 0,
            show_help: false,
            help_scroll_offset: 0,
        }
    }

    /// Resolve a theme role to a concrete style.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    pub fn cycle_theme(&mut self) {
        self.theme_variant = self.theme_variant.next();
        self.theme = StyleMap::from_palette(&self.theme_variant.palette());
        self.set_status(format!("Theme: {}", self.theme_variant.name()));
    }

    // ------------------------------------------------------------------------
    // Trending
    // ------------------------------------------------------------------------

    pub fn select_period(&mut self, step: Step) {
        self.trending.select_period(step);
        self.needs_redraw = true;
    }

    // ------------------------------------------------------------------------
    // Feed scrolling and paging
    // ------------------------------------------------------------------------

    pub fn scroll_feed_down(&mut self, cards: usize) {
        let max = self.feed.cards().len().saturating_sub(1);
        self.feed_scroll = self.feed_scroll.saturating_add(cards).min(max);
        self.proximity_check_pending = true;
    }

    pub fn scroll_feed_up(&mut self, cards: usize) {
        self.feed_scroll = self.feed_scroll.saturating_sub(cards);
        self.proximity_check_pending = true;
    }

    /// Cards that fit in the feed panel, at least one.
    pub fn feed_page_size(&self) -> usize {
        (self.feed_viewport_rows / CARD_HEIGHT).max(1)
    }

    /// Record the feed panel height seen by the last render.
    pub fn set_feed_viewport(&mut self, rows: usize) {
        if rows != self.feed_viewport_rows {
            self.feed_viewport_rows = rows;
            self.proximity_check_pending = true;
        }
    }

    /// Scroll-proximity predicate in feed rows.
    pub fn feed_near_bottom(&self) -> bool {
        near_bottom(
            self.feed_viewport_rows,
            self.feed_scroll * CARD_HEIGHT,
            self.feed.cards().len() * CARD_HEIGHT,
            self.scroll_threshold,
        )
    }

    /// Evaluate a pending proximity check and start a load if it passes.
    ///
    /// Returns the page to fetch when the loader moved to Loading.
    pub fn request_more(&mut self) -> Option<u32> {
        if !std::mem::take(&mut self.proximity_check_pending) {
            return None;
        }
        if !self.feed_near_bottom() {
            return None;
        }
        let page = self.feed.begin_load()?;
        self.needs_redraw = true;
        Some(page)
    }

    /// Append a finished batch. More content may still leave the viewport
    /// unfilled, so another proximity check is queued.
    pub fn apply_batch(&mut self, cards: Vec<TopicCard>) -> bool {
        let applied = self.feed.finish_load(cards);
        if applied {
            self.proximity_check_pending = true;
            self.needs_redraw = true;
            if !self.feed.has_more() {
                self.set_status("You've reached the end of the feed");
            }
        }
        applied
    }

    // ------------------------------------------------------------------------
    // Status
    // ------------------------------------------------------------------------

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{HeatLevel, TopicSource};
    use crate::trending::TrendingPeriod;
    use async_trait::async_trait;
    use tokio::time::{self, Duration};

    struct NoSource;

    #[async_trait]
    impl TopicSource for NoSource {
        async fn fetch_batch(&self, _page: u32) -> Vec<TopicCard> {
            Vec::new()
        }
    }

    fn test_app() -> App {
        App::new(&Config::default(), TrendingBoard::samples(), Arc::new(NoSource))
    }

    fn cards(n: usize) -> Vec<TopicCard> {
        (0..n)
            .map(|i| {
                TopicCard::new(
                    format!("t{}", i),
                    "1m ago".into(),
                    "a".into(),
                    40,
                    10,
                    1,
                    "10".into(),
                    HeatLevel::Warm,
                )
            })
            .collect()
    }

    #[test]
    fn test_first_check_starts_page_one() {
        let mut app = test_app();
        assert_eq!(app.request_more(), Some(1));
        assert!(app.feed.is_loading());
    }

    #[test]
    fn test_check_without_pending_flag_is_skipped() {
        let mut app = test_app();
        app.proximity_check_pending = false;
        assert_eq!(app.request_more(), None);
        assert!(!app.feed.is_loading());
    }

    #[test]
    fn test_scroll_while_loading_is_dropped() {
        let mut app = test_app();
        assert_eq!(app.request_more(), Some(1));
        app.scroll_feed_down(1);
        assert_eq!(app.request_more(), None);
    }

    #[test]
    fn test_full_viewport_stops_loading_until_scrolled() {
        let mut app = test_app();
        app.set_feed_viewport(2 * CARD_HEIGHT);
        let _ = app.request_more();
        assert!(app.apply_batch(cards(5)));

        // 5 cards = 20 rows, viewport 8 rows, threshold 3: not near bottom
        assert_eq!(app.request_more(), None);

        app.scroll_feed_down(3);
        assert_eq!(app.request_more(), Some(2));
    }

    #[test]
    fn test_scroll_clamps_to_last_card() {
        let mut app = test_app();
        let _ = app.request_more();
        app.apply_batch(cards(5));
        app.scroll_feed_down(100);
        assert_eq!(app.feed_scroll, 4);
        app.scroll_feed_up(100);
        assert_eq!(app.feed_scroll, 0);
    }

    #[test]
    fn test_select_period_marks_redraw() {
        let mut app = test_app();
        app.needs_redraw = false;
        app.select_period(Step::Back);
        assert_eq!(app.trending.period(), TrendingPeriod::Monthly);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        let config = Config {
            theme: "neon".to_string(),
            ..Config::default()
        };
        let app = App::new(&config, TrendingBoard::empty(), Arc::new(NoSource));
        assert_eq!(app.theme_variant, ThemeVariant::Dark);
    }

    #[test]
    fn test_cycle_theme_sets_status() {
        let mut app = test_app();
        app.cycle_theme();
        assert_eq!(app.theme_variant, ThemeVariant::Light);
        assert!(app.status_message.is_some());
    }

    #[tokio::test]
    async fn test_status_expires_after_3_seconds() {
        time::pause();
        let mut app = test_app();
        app.set_status("Test message");

        time::advance(Duration::from_secs(2)).await;
        assert!(!app.clear_expired_status());
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        assert!(app.clear_expired_status());
        assert!(app.status_message.is_none());
    }
}
