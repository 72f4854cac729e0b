//! Text helpers for terminal rendering.
//!
//! - **Width**: Unicode-aware width measurement and truncation
//! - **Sanitizing**: Stripping escape sequences from externally loaded text
//! - **Numbers**: Thousands grouping for vote totals

mod text;

pub use text::{display_width, group_thousands, strip_control_chars, truncate_to_width};
