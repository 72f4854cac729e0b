//! Terminal User Interface module.
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - Layout and overlay dispatch
//! - `helpers` - Task spawning and navigation shared by the handlers
//! - `trending` - Trending leaderboard widget
//! - `topics` - Topic card feed widget
//! - `status` - Status bar widget
//! - `help` - Keybinding help overlay

mod events;
mod help;
mod helpers;
mod input;
mod loop_runner;
mod render;
mod status;
mod topics;
mod trending;

pub use loop_runner::{run, Action};
