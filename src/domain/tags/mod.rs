//! Tag lookup and per-tag statistics

pub mod names;
pub mod statistics;

// Re-export main types
pub use names::{get_names_of_tags, TagIndex};
pub use statistics::{calculate_statistics_for_tag, TagStatistics};
