//! Terminal debate board: a rotating trending leaderboard above an
//! infinitely scrolling feed of discussion topics.
//!
//! The binary in `main.rs` wires these modules together; integration tests
//! drive the carousel and the feed loader through this library directly.

pub mod app;
pub mod config;
pub mod feed;
pub mod keybindings;
pub mod navigation;
pub mod theme;
pub mod trending;
pub mod ui;
pub mod util;
