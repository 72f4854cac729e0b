//! Paged feed loading with a single-flight guard.
//!
//! `FeedLoader` is a two-state machine (Idle / Loading). `begin_load` moves
//! Idle to Loading and hands back the page to fetch; `finish_load` appends the
//! batch and returns to Idle. Triggers while Loading, or after the page limit
//! has been passed, are dropped without side effects.
use super::TopicCard;

/// Pagination bookkeeping for the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedLoadState {
    /// Next page to fetch, starting at 1.
    pub current_page: u32,
    /// Set while a batch is in flight.
    pub is_loading: bool,
    /// Cleared for good once `current_page` passes the page limit.
    pub has_more_data: bool,
}

impl Default for FeedLoadState {
    fn default() -> Self {
        Self {
            current_page: 1,
            is_loading: false,
            has_more_data: true,
        }
    }
}

/// Scroll-proximity predicate: is the visible window within `threshold`
/// units of the end of the content?
///
/// Units are whatever the caller measures in (rows for the terminal feed).
pub fn near_bottom(viewport: usize, offset: usize, content: usize, threshold: usize) -> bool {
    viewport.saturating_add(offset) >= content.saturating_sub(threshold)
}

/// Owns the accumulated cards and the load state for one feed.
#[derive(Debug, Clone)]
pub struct FeedLoader {
    state: FeedLoadState,
    cards: Vec<TopicCard>,
    max_pages: u32,
}

impl FeedLoader {
    pub fn new(max_pages: u32) -> Self {
        Self {
            state: FeedLoadState::default(),
            cards: Vec::new(),
            max_pages,
        }
    }

    pub fn state(&self) -> FeedLoadState {
        self.state
    }

    pub fn cards(&self) -> &[TopicCard] {
        &self.cards
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn has_more(&self) -> bool {
        self.state.has_more_data
    }

    /// Idle -> Loading. Returns the page to fetch, or `None` if a load is
    /// already in flight or the feed is exhausted.
    pub fn begin_load(&mut self) -> Option<u32> {
        if self.state.is_loading || !self.state.has_more_data {
            return None;
        }
        self.state.is_loading = true;
        tracing::debug!(page = self.state.current_page, "Feed load started");
        Some(self.state.current_page)
    }

    /// Loading -> Idle. Appends `batch` and advances the page counter.
    ///
    /// Returns `false` (and changes nothing) if no load was in flight.
    pub fn finish_load(&mut self, batch: Vec<TopicCard>) -> bool {
        if !self.state.is_loading {
            tracing::warn!(count = batch.len(), "Batch arrived with no load in flight, dropping");
            return false;
        }

        self.cards.extend(batch);
        self.state.current_page += 1;
        self.state.is_loading = false;

        if self.state.current_page > self.max_pages {
            self.state.has_more_data = false;
            tracing::info!(total = self.cards.len(), "Feed exhausted");
        }

        tracing::debug!(
            page = self.state.current_page,
            total = self.cards.len(),
            "Feed load finished"
        );
        true
    }

    /// Release the guard after a load task died without producing a batch.
    /// The page counter is left alone so the same page is retried.
    pub fn abandon_load(&mut self) {
        if self.state.is_loading {
            self.state.is_loading = false;
            tracing::warn!(page = self.state.current_page, "Feed load abandoned");
        }
    }
}
