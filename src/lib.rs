//! eventstats - Event collection helpers
//!
//! Pure transformations over in-memory event and tag records: calendar date
//! formatting, before/after date filtering, tag name lookup and per-tag
//! attendance statistics. A TOML-backed catalog supplies the records.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::calendar::format_date;
pub use domain::filter::filter_events_by_date;
pub use domain::tags::{calculate_statistics_for_tag, get_names_of_tags};
pub use domain::{Event, Tag, TagStatistics, When};
pub use error::EventStatsError;
