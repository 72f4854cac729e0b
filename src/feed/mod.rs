//! Infinite topic feed.
//!
//! - [`card`] - `TopicCard` and `HeatLevel`
//! - [`generator`] - Random card batches from a template pool
//! - [`source`] - `TopicSource` seam and the latency-simulating backend
//! - [`loader`] - Single-flight paging state machine and the scroll predicate

mod card;
mod generator;
mod loader;
mod source;

pub use card::{HeatLevel, TopicCard};
pub use generator::{format_age, generate_batch, TopicTemplate, TEMPLATES};
pub use loader::{near_bottom, FeedLoadState, FeedLoader};
pub use source::{SimulatedSource, TopicSource};
