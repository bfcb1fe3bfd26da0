//! Domain layer - Event records and the pure transformations over them

pub mod calendar;
pub mod event;
pub mod filter;
pub mod tags;

pub use event::{Event, Tag};
pub use filter::{DatePartition, When};
pub use tags::{TagIndex, TagStatistics};
