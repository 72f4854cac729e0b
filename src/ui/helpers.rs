//! Helper functions for UI operations.
//!
//! Shared between input, tick and event handling: panic-safe task wrapping,
//! the feed load spawner, and navigation to site destinations.

use crate::app::{App, AppEvent};
use crate::feed::TopicSource;
use crate::navigation::{navigate, Destination, Navigation};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Wraps a future to catch panics and convert them to errors.
///
/// Panics inside spawned tasks would otherwise vanish into the runtime. Here
/// they come back as `Err(String)` holding the panic message.
///
/// # Returns
///
/// - `Ok(result)` if the future completes normally
/// - `Err(panic_message)` if the future panics
pub(super) async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: std::future::Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|panic| {
            if let Some(s) = panic.downcast_ref::<&'static str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else if let Some(e) = panic.downcast_ref::<Box<dyn std::error::Error + Send>>() {
                e.to_string()
            } else {
                format!("Unknown panic: {:?}", (*panic).type_id())
            }
        })
}

/// Run a pending proximity check and spawn the next page load if it passes.
///
/// Called from the tick handler so scroll bursts collapse into one check.
pub(super) fn maybe_load_more(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    if let Some(page) = app.request_more() {
        spawn_feed_load(page, Arc::clone(&app.source), event_tx.clone());
    }
}

/// Spawn the fetch for one feed page.
///
/// Always reports back: either `BatchLoaded` or `TaskPanicked`, so the
/// loader's in-flight flag is released in both cases.
pub(super) fn spawn_feed_load(
    page: u32,
    source: Arc<dyn TopicSource>,
    tx: mpsc::Sender<AppEvent>,
) -> tokio::task::JoinHandle<()> {
    tracing::debug!(page, "Spawning feed load task");
    tokio::spawn(async move {
        let event = match catch_task_panic(source.fetch_batch(page)).await {
            Ok(cards) => AppEvent::BatchLoaded { page, cards },
            Err(panic_msg) => {
                tracing::error!(task = "feed_load", page, error = %panic_msg, "Background task panicked");
                AppEvent::TaskPanicked {
                    task: "feed_load",
                    error: panic_msg,
                }
            }
        };
        if let Err(e) = tx.send(event).await {
            tracing::warn!(error = %e, event = "BatchLoaded", "Channel send failed (receiver dropped)");
        }
    })
}

/// Navigate to a site destination and report the outcome in the status bar.
pub(super) fn go_to(app: &mut App, dest: Destination) {
    match navigate(&app.site_url, dest, app.open_links) {
        Ok(Navigation::Opened(url)) => app.set_status(format!("Opened {}", url)),
        Ok(Navigation::Shown(url)) => app.set_status(format!("Go to {}", url)),
        Err(e) => {
            tracing::warn!(path = dest.path(), error = %e, "Navigation failed");
            app.set_status(format!("Navigation failed: {}", e));
        }
    }
}
