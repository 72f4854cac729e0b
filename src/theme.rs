//! Theme system for the TUI.
//!
//! Semantic color roles map to ratatui `Style` values. `ThemeVariant`
//! selects between the Dark and Light palettes and `StyleMap` resolves role
//! names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette
// ============================================================================

/// Every semantic UI role mapped to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Trending leaderboard --
    pub trending_rank: Style,
    pub trending_title: Style,
    pub trending_views: Style,
    pub trending_placeholder: Style,

    // -- Votes --
    pub vote_agree: Style,
    pub vote_disagree: Style,

    // -- Topic cards --
    pub topic_title: Style,
    pub topic_selected: Style,
    pub topic_meta: Style,
    pub heat_hot: Style,
    pub heat_warm: Style,
    pub heat_normal: Style,
    pub feed_loading: Style,
    pub feed_end: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
    pub help_heading: Style,
    pub help_body: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            trending_rank: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            trending_title: Style::default().add_modifier(Modifier::BOLD),
            trending_views: Style::default().fg(Color::DarkGray),
            trending_placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),

            vote_agree: Style::default().fg(Color::Black).bg(Color::Blue),
            vote_disagree: Style::default().fg(Color::Black).bg(Color::Red),

            topic_title: Style::default().add_modifier(Modifier::BOLD),
            topic_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            topic_meta: Style::default().fg(Color::DarkGray),
            heat_hot: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            heat_warm: Style::default().fg(Color::Yellow),
            heat_normal: Style::default().fg(Color::Cyan),
            feed_loading: Style::default().fg(Color::Yellow),
            feed_end: Style::default().fg(Color::DarkGray),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
            help_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            help_body: Style::default(),
        }
    }

    fn light() -> Self {
        Self {
            trending_rank: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            trending_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            trending_views: Style::default().fg(Color::DarkGray),
            trending_placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),

            vote_agree: Style::default().fg(Color::White).bg(Color::Blue),
            vote_disagree: Style::default().fg(Color::White).bg(Color::Red),

            topic_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            topic_selected: Style::default().bg(Color::Blue).fg(Color::White),
            topic_meta: Style::default().fg(Color::DarkGray),
            heat_hot: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            heat_warm: Style::default().fg(Color::Magenta),
            heat_normal: Style::default().fg(Color::Blue),
            feed_loading: Style::default().fg(Color::Magenta),
            feed_end: Style::default().fg(Color::DarkGray),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
            help_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            help_body: Style::default().fg(Color::Black),
        }
    }
}

// ============================================================================
// Style Map
// ============================================================================

/// String-keyed style lookup built from a `ColorPalette`.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

const ROLE_COUNT: usize = 19;

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; ROLE_COUNT] = [
    "trending_rank",
    "trending_title",
    "trending_views",
    "trending_placeholder",
    "vote_agree",
    "vote_disagree",
    "topic_title",
    "topic_selected",
    "topic_meta",
    "heat_hot",
    "heat_warm",
    "heat_normal",
    "feed_loading",
    "feed_end",
    "status_bar",
    "panel_border",
    "panel_border_focused",
    "help_heading",
    "help_body",
];

impl StyleMap {
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; ROLE_COUNT] = [
            p.trending_rank,
            p.trending_title,
            p.trending_views,
            p.trending_placeholder,
            p.vote_agree,
            p.vote_disagree,
            p.topic_title,
            p.topic_selected,
            p.topic_meta,
            p.heat_hot,
            p.heat_warm,
            p.heat_normal,
            p.feed_loading,
            p.feed_end,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
            p.help_heading,
            p.help_body,
        ];

        Self {
            map: ROLE_NAMES.into_iter().zip(styles).collect(),
        }
    }

    /// Resolve a role name to its `Style`. Unknown roles get `Style::default()`.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
