use crate::app::App;
use crate::keybindings::{Action, Context, KeybindingRegistry};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

use super::topics::SPINNER;

/// Hint groups for the idle status bar; keys come from the live registry.
const HINTS: &[(&[Action], &str)] = &[
    (&[Action::PrevPeriod, Action::NextPeriod], "period"),
    (&[Action::ScrollDown, Action::ScrollUp], "scroll"),
    (&[Action::CycleFocus], "focus"),
    (&[Action::EnterSearch], "search"),
    (&[Action::CreateTopic], "new topic"),
    (&[Action::Login], "login"),
    (&[Action::Signup], "sign up"),
    (&[Action::ShowHelp], "help"),
    (&[Action::Quit], "quit"),
];

/// Key hint line built from the current bindings. Unbound actions are left out.
fn key_hints(keys: &KeybindingRegistry) -> String {
    HINTS
        .iter()
        .filter_map(|(actions, label)| {
            let bound: Vec<String> = actions
                .iter()
                .filter_map(|a| keys.key_for(*a, Context::Global))
                .collect();
            (!bound.is_empty()).then(|| format!("[{}]{}", bound.join("/"), label))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn search_prompt(app: &App) -> String {
    let keys = &app.keybindings;
    let mut prompt = format!("Search: {}_", app.search_input);
    let commit = keys.key_for(Action::CommitSearch, Context::Search);
    let cancel = keys.key_for(Action::ExitSearch, Context::Search);
    if let (Some(commit), Some(cancel)) = (commit, cancel) {
        prompt.push_str(&format!("  ({} submit, {} cancel)", commit, cancel));
    }
    prompt
}

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text: Cow<'_, str> = if app.search_mode {
        Cow::Owned(search_prompt(app))
    } else if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(&**msg)
    } else if app.feed.is_loading() {
        Cow::Owned(format!(
            "{} Loading page {}...",
            SPINNER[app.spinner_frame % SPINNER.len()],
            app.feed.state().current_page
        ))
    } else {
        Cow::Owned(key_hints(&app.keybindings))
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_hints() {
        let hints = key_hints(&KeybindingRegistry::new());
        assert_eq!(
            hints,
            "[h/l]period [j/k]scroll [Tab]focus [/]search [n]new topic [L]login [U]sign up [?]help [q]quit"
        );
    }

    #[test]
    fn test_hints_follow_overrides() {
        let mut keys = KeybindingRegistry::new();
        let overrides = HashMap::from([
            ("create_topic".to_string(), "c".to_string()),
            ("quit".to_string(), "Ctrl+x".to_string()),
        ]);
        assert!(keys.apply_overrides(&overrides).is_empty());

        let hints = key_hints(&keys);
        assert!(hints.contains("[c]new topic"));
        assert!(hints.contains("[Ctrl+x]quit"));
        assert!(!hints.contains("[q]"));
    }
}
