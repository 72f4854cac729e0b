//! Keybinding registry: maps actions to key events with config overrides.
//!
//! Every binding is independent: a broken override for one action never
//! disturbs the others.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Back,
    CycleFocus,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    PrevPeriod,
    NextPeriod,
    CreateTopic,
    Login,
    Signup,
    EnterSearch,
    ExitSearch,
    CommitSearch,
    CycleTheme,
    ShowHelp,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::Back => "Go back / dismiss",
            Self::CycleFocus => "Switch between trending and feed",
            Self::ScrollDown => "Scroll feed down",
            Self::ScrollUp => "Scroll feed up",
            Self::PageDown => "Page feed down",
            Self::PageUp => "Page feed up",
            Self::PrevPeriod => "Previous trending period",
            Self::NextPeriod => "Next trending period",
            Self::CreateTopic => "Start a new discussion",
            Self::Login => "Log in",
            Self::Signup => "Sign up",
            Self::EnterSearch => "Search topics",
            Self::ExitSearch => "Cancel search",
            Self::CommitSearch => "Submit search",
            Self::CycleTheme => "Cycle theme",
            Self::ShowHelp => "Show help",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context. Determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    Trending,
    Feed,
    Search,
}

impl Context {
    /// Every context, in the order the help overlay lists them.
    pub const ALL: [Context; 4] = [
        Context::Global,
        Context::Trending,
        Context::Feed,
        Context::Search,
    ];

    /// When the bindings of this context apply.
    pub fn when_active(self) -> &'static str {
        match self {
            Self::Global => "Anywhere",
            Self::Trending => "Leaderboard focused",
            Self::Feed => "Feed focused",
            Self::Search => "While typing a search",
        }
    }
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ch(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats: single chars ("q", "/"), named keys ("Enter", "Esc",
/// "Tab", "Up", "Down", "Left", "Right", "Backspace", "Space"),
/// "Ctrl+<char>", and "F1".."F12".
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let mut chars = rest.trim().chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeySpec::ctrl(c)),
            _ => None,
        };
    }

    let named = match s.to_lowercase().as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "backspace" => Some(KeyCode::Backspace),
        "space" => Some(KeyCode::Char(' ')),
        _ => None,
    };
    if let Some(code) = named {
        return Some(KeySpec::plain(code));
    }

    if let Some(n) = s
        .strip_prefix(['F', 'f'])
        .and_then(|n| n.parse::<u8>().ok())
    {
        if (1..=12).contains(&n) {
            return Some(KeySpec::plain(KeyCode::F(n)));
        }
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeySpec::ch(c)),
        _ => None,
    }
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// The same key can map to different actions in different contexts; lookups
/// fall back to `Global` when the specific context has no binding.
#[derive(Debug)]
pub struct KeybindingRegistry {
    lookup: HashMap<(Context, KeySpec), Action>,
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    fn register_defaults(&mut self) {
        use Action::*;

        let global = [
            (KeySpec::ch('q'), Quit),
            (KeySpec::plain(KeyCode::Esc), Back),
            (KeySpec::plain(KeyCode::Tab), CycleFocus),
            (KeySpec::ch('j'), ScrollDown),
            (KeySpec::plain(KeyCode::Down), ScrollDown),
            (KeySpec::ch('k'), ScrollUp),
            (KeySpec::plain(KeyCode::Up), ScrollUp),
            (KeySpec::ctrl('d'), PageDown),
            (KeySpec::ctrl('u'), PageUp),
            (KeySpec::ch('h'), PrevPeriod),
            (KeySpec::plain(KeyCode::Left), PrevPeriod),
            (KeySpec::ch('l'), NextPeriod),
            (KeySpec::plain(KeyCode::Right), NextPeriod),
            (KeySpec::ch('n'), CreateTopic),
            (KeySpec::ch('L'), Login),
            (KeySpec::ch('U'), Signup),
            (KeySpec::ch('/'), EnterSearch),
            (KeySpec::ch('T'), CycleTheme),
            (KeySpec::ch('?'), ShowHelp),
        ];
        for (key, action) in global {
            self.bind(Context::Global, key, action);
        }

        // With the leaderboard focused, vertical keys rotate the period
        self.bind(Context::Trending, KeySpec::ch('j'), NextPeriod);
        self.bind(Context::Trending, KeySpec::plain(KeyCode::Down), NextPeriod);
        self.bind(Context::Trending, KeySpec::ch('k'), PrevPeriod);
        self.bind(Context::Trending, KeySpec::plain(KeyCode::Up), PrevPeriod);

        self.bind(Context::Feed, KeySpec::ch(' '), PageDown);

        self.bind(Context::Search, KeySpec::plain(KeyCode::Esc), ExitSearch);
        self.bind(Context::Search, KeySpec::plain(KeyCode::Enter), CommitSearch);
    }

    /// Apply user overrides from config keybindings map.
    ///
    /// Keys in the map are action names (e.g. "quit", "create_topic"), values
    /// are key strings (e.g. "q", "Ctrl+d", "F5"). Each override is applied
    /// on its own; bad entries are skipped and reported in the returned
    /// warnings. An override whose key already belongs to another action in
    /// an overlapping context is refused and the action keeps its defaults.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut parsed: Vec<(&str, Action, KeySpec)> = Vec::new();

        for (action_name, key_str) in overrides {
            let Some(action) = parse_action_name(action_name) else {
                warnings.push(format!("Unknown action '{}', ignoring", action_name));
                continue;
            };

            let Some(key) = parse_key_string(key_str) else {
                warnings.push(format!(
                    "Cannot parse key '{}' for action '{}', ignoring",
                    key_str, action_name
                ));
                continue;
            };

            parsed.push((action_name.as_str(), action, key));
        }

        // HashMap order is arbitrary; sort so conflicts resolve the same way every run
        parsed.sort_by(|a, b| a.0.cmp(b.0));
        let mut seen: Vec<Action> = Vec::new();
        parsed.retain(|(name, action, _)| {
            if seen.contains(action) {
                warnings.push(format!("Duplicate override '{}' for {:?}, ignoring", name, action));
                return false;
            }
            seen.push(*action);
            true
        });

        // Release every overridden key first so two actions can swap keys
        let previous: Vec<Vec<(Context, KeySpec)>> = parsed
            .iter()
            .map(|(_, action, _)| self.take_bindings(*action))
            .collect();

        for ((action_name, action, key), previous) in parsed.into_iter().zip(previous) {
            let mut contexts: Vec<Context> = Vec::new();
            for (ctx, _) in &previous {
                if !contexts.contains(ctx) {
                    contexts.push(*ctx);
                }
            }

            let conflict = contexts
                .iter()
                .find_map(|ctx| self.conflicting_binding(*ctx, key, action));
            if let Some((ctx, other)) = conflict {
                warnings.push(format!(
                    "Key '{}' for action '{}' is already bound to {:?} in {:?}, keeping defaults",
                    format_key(&key),
                    action_name,
                    other,
                    ctx
                ));
                for (ctx, old_key) in previous {
                    if !self.lookup.contains_key(&(ctx, old_key)) {
                        self.bind(ctx, old_key, action);
                    }
                }
                continue;
            }

            for ctx in contexts {
                self.bind(ctx, key, action);
            }

            tracing::info!(action = %action_name, key = %format_key(&key), "Applied keybinding override");
        }

        warnings
    }

    /// Remove every binding of `action`, returning what was removed.
    fn take_bindings(&mut self, action: Action) -> Vec<(Context, KeySpec)> {
        let removed: Vec<(Context, KeySpec)> = self
            .bindings
            .iter()
            .filter(|(_, _, a)| *a == action)
            .map(|(c, k, _)| (*c, *k))
            .collect();
        self.lookup.retain(|_, a| *a != action);
        self.bindings.retain(|(_, _, a)| *a != action);
        removed
    }

    /// Another action reachable through `key` wherever `context` is active.
    fn conflicting_binding(
        &self,
        context: Context,
        key: KeySpec,
        action: Action,
    ) -> Option<(Context, Action)> {
        self.bindings
            .iter()
            .find(|(c, k, a)| *k == key && *a != action && contexts_overlap(*c, context))
            .map(|(c, _, a)| (*c, *a))
    }

    /// Look up the action for a key, trying `context` first and then Global.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        // Shift is already folded into the character ('L' vs 'l')
        let modifiers = match code {
            KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        let key = KeySpec::new(code, modifiers);

        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }

        if context != Context::Global {
            if let Some(&action) = self.lookup.get(&(Context::Global, key)) {
                return Some(action);
            }
        }

        None
    }

    /// Display string of the first key bound to `action` in `context`.
    pub fn key_for(&self, action: Action, context: Context) -> Option<String> {
        self.bindings
            .iter()
            .find(|(c, _, a)| *c == context && *a == action)
            .map(|(_, key, _)| format_key(key))
    }

    /// All bindings for the help screen as
    /// (context, key_display_string, action, description) tuples.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

/// Global bindings are live in the panel contexts; search input captures keys.
fn contexts_overlap(a: Context, b: Context) -> bool {
    use Context::*;
    a == b || matches!((a, b), (Global, Trending | Feed) | (Trending | Feed, Global))
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "back" => Some(Action::Back),
        "cycle_focus" | "focus" => Some(Action::CycleFocus),
        "scroll_down" | "down" => Some(Action::ScrollDown),
        "scroll_up" | "up" => Some(Action::ScrollUp),
        "page_down" => Some(Action::PageDown),
        "page_up" => Some(Action::PageUp),
        "prev_period" => Some(Action::PrevPeriod),
        "next_period" => Some(Action::NextPeriod),
        "create_topic" | "new_topic" => Some(Action::CreateTopic),
        "login" => Some(Action::Login),
        "signup" | "register" => Some(Action::Signup),
        "search" | "enter_search" => Some(Action::EnterSearch),
        "exit_search" => Some(Action::ExitSearch),
        "commit_search" => Some(Action::CommitSearch),
        "cycle_theme" | "theme" => Some(Action::CycleTheme),
        "show_help" | "help" => Some(Action::ShowHelp),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
