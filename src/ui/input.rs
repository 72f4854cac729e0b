//! Input handling for the TUI.
//!
//! Keys resolve to actions through the keybinding registry, using the
//! focused panel (or search mode) as the lookup context.

use crate::app::{App, Focus};
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crate::navigation::{submit_search, Destination};
use crate::trending::Step;
use crossterm::event::{KeyCode, KeyModifiers};

use super::helpers::go_to;
use super::Action;

/// Maximum allowed search query length (UI layer validation)
const MAX_SEARCH_LENGTH: usize = 256;

/// Map the current focus panel to a keybinding context.
pub(super) fn focus_to_context(focus: Focus) -> KbContext {
    match focus {
        Focus::Trending => KbContext::Trending,
        Focus::Feed => KbContext::Feed,
    }
}

/// Main input dispatch function.
///
/// Overlays capture keys first, then search mode, then panel bindings.
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    // Help overlay captures all keys when visible
    if app.show_help {
        return handle_help_input(app, code);
    }

    if app.search_mode {
        handle_search_input(app, code, modifiers);
        return Action::Continue;
    }

    handle_browse_input(app, code, modifiers)
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
    Action::Continue
}

fn handle_browse_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    let context = focus_to_context(app.focus);
    let Some(action) = app.keybindings.action_for_key(code, modifiers, context) else {
        return Action::Continue;
    };

    match action {
        KbAction::Quit => return Action::Quit,
        KbAction::Back => app.status_message = None,
        KbAction::CycleFocus => {
            app.focus = match app.focus {
                Focus::Trending => Focus::Feed,
                Focus::Feed => Focus::Trending,
            };
        }
        KbAction::ScrollDown => app.scroll_feed_down(1),
        KbAction::ScrollUp => app.scroll_feed_up(1),
        KbAction::PageDown => {
            let page = app.feed_page_size();
            app.scroll_feed_down(page);
        }
        KbAction::PageUp => {
            let page = app.feed_page_size();
            app.scroll_feed_up(page);
        }
        KbAction::PrevPeriod => app.select_period(Step::Back),
        KbAction::NextPeriod => app.select_period(Step::Forward),
        KbAction::CreateTopic => go_to(app, Destination::NewTopic),
        KbAction::Login => go_to(app, Destination::Login),
        KbAction::Signup => go_to(app, Destination::Signup),
        KbAction::EnterSearch => {
            app.search_mode = true;
            app.search_input.clear();
        }
        KbAction::CycleTheme => app.cycle_theme(),
        KbAction::ShowHelp => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        // Search-only actions have no meaning outside the prompt
        KbAction::ExitSearch | KbAction::CommitSearch => {}
    }
    Action::Continue
}

/// Typing goes into the query; only the search-context actions are honored.
fn handle_search_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Search)
    {
        Some(KbAction::ExitSearch) => {
            app.search_mode = false;
            app.search_input.clear();
            return;
        }
        Some(KbAction::CommitSearch) => {
            app.search_mode = false;
            let query = std::mem::take(&mut app.search_input);
            if let Some(q) = submit_search(&query) {
                app.set_status(format!("Searching for \"{}\" is not available yet", q));
            }
            return;
        }
        _ => {}
    }

    match code {
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            if app.search_input.chars().count() >= MAX_SEARCH_LENGTH {
                app.set_status(format!(
                    "Search query at max length ({} chars)",
                    MAX_SEARCH_LENGTH
                ));
                return;
            }
            app.search_input.push(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::feed::{TopicCard, TopicSource};
    use crate::trending::{TrendingBoard, TrendingPeriod};
    use async_trait::async_trait;
    use std::sync::Arc;

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

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_input(app, code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_q_quits() {
        let mut app = test_app();
        assert!(matches!(press(&mut app, KeyCode::Char('q')), Action::Quit));
    }

    #[test]
    fn test_l_and_h_rotate_period() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.trending.period(), TrendingPeriod::Today);
        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.trending.period(), TrendingPeriod::Monthly);
    }

    #[test]
    fn test_trending_focus_maps_j_to_next_period() {
        let mut app = test_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Trending);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.trending.period(), TrendingPeriod::Today);
    }

    #[test]
    fn test_scroll_marks_proximity_check() {
        let mut app = test_app();
        app.proximity_check_pending = false;
        press(&mut app, KeyCode::Char('j'));
        assert!(app.proximity_check_pending);
    }

    #[test]
    fn test_navigation_shows_url_when_links_disabled() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('n'));
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert_eq!(msg, "Go to http://localhost:5000/new-discussion");

        press(&mut app, KeyCode::Char('U'));
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert_eq!(msg, "Go to http://localhost:5000/register");
    }

    #[test]
    fn test_bad_site_url_reports_failure() {
        let mut app = test_app();
        app.site_url = "not a url".to_string();
        press(&mut app, KeyCode::Char('L'));
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert!(msg.starts_with("Navigation failed"));
    }

    #[test]
    fn test_search_typing_does_not_trigger_bindings() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        assert!(app.search_mode);

        type_str(&mut app, "ql");
        assert_eq!(app.search_input, "ql");
        assert_eq!(app.trending.period(), TrendingPeriod::RealTime);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.search_input, "q");
    }

    #[test]
    fn test_search_limit_counts_characters() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));

        type_str(&mut app, &"토".repeat(MAX_SEARCH_LENGTH));
        assert_eq!(app.search_input.chars().count(), MAX_SEARCH_LENGTH);
        assert!(app.status_message.is_none());

        press(&mut app, KeyCode::Char('론'));
        assert_eq!(app.search_input.chars().count(), MAX_SEARCH_LENGTH);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_search_commit_non_empty() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "tax");
        press(&mut app, KeyCode::Enter);
        assert!(!app.search_mode);
        assert!(app.search_input.is_empty());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_search_commit_empty_is_ignored() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Enter);
        assert!(!app.search_mode);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_search_escape_cancels() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Esc);
        assert!(!app.search_mode);
        assert!(app.search_input.is_empty());
    }

    #[test]
    fn test_help_overlay_captures_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        assert!(matches!(press(&mut app, KeyCode::Char('q')), Action::Continue));
        assert!(!app.show_help);
    }
}
