//! Application event handling.
//!
//! Processes completion events from background tasks: feed page arrivals and
//! task panics.

use crate::app::{App, AppEvent};

/// Handle an event sent back by a background task.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::BatchLoaded { page, cards } => {
            let count = cards.len();
            if app.apply_batch(cards) {
                tracing::debug!(page, count, "Feed batch applied");
            } else {
                tracing::warn!(page, "Feed batch arrived with no load in flight");
            }
        }
        AppEvent::TaskPanicked { task, error } => {
            tracing::error!(task, error, "Background task panicked");
            if task == "feed_load" {
                app.feed.abandon_load();
            }
            app.set_status(format!("Internal error in {} task", task));
        }
    }
}
