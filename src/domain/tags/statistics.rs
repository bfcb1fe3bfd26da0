//! Per-tag attendance statistics
//!
//! For a tag, counts the events carrying it, averages their registrations
//! and picks the most popular one. Ties on attendance go to the name that
//! sorts first, whatever the input order.

use crate::domain::{Event, Tag};
use serde::Serialize;
use std::cmp::Ordering;

/// Aggregate statistics for one tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagStatistics {
    /// Number of events carrying the tag
    pub event_count: usize,
    /// Mean registrations per event, two decimal places; `None` if unused
    pub average_registration: Option<String>,
    /// Name of the event with the most registrations; `None` if unused
    pub most_popular_event: Option<String>,
}

impl TagStatistics {
    /// Statistics for a tag no event uses
    pub fn empty() -> Self {
        TagStatistics {
            event_count: 0,
            average_registration: None,
            most_popular_event: None,
        }
    }

    pub fn is_unused(&self) -> bool {
        self.event_count == 0
    }
}

/// Compute statistics for `tag` over `events`
///
/// # Examples
///
/// ```
/// use eventstats::{calculate_statistics_for_tag, Event, Tag};
///
/// let tag = Tag::new("t1", "Science");
/// let stats = calculate_statistics_for_tag(&[], &tag);
/// assert_eq!(stats.event_count, 0);
/// assert_eq!(stats.average_registration, None);
/// assert_eq!(stats.most_popular_event, None);
/// ```
pub fn calculate_statistics_for_tag(events: &[Event], tag: &Tag) -> TagStatistics {
    let matching: Vec<&Event> = events.iter().filter(|e| e.has_tag(&tag.id)).collect();

    if matching.is_empty() {
        return TagStatistics::empty();
    }

    let total: usize = matching.iter().map(|e| e.attendance()).sum();
    let most_popular = matching
        .iter()
        .copied()
        .min_by(|a, b| popularity_order(a, b))
        .map(|e| e.name.clone());

    TagStatistics {
        event_count: matching.len(),
        average_registration: Some(format_average(total, matching.len())),
        most_popular_event: most_popular,
    }
}

/// More attendance first, then ascending name
fn popularity_order(a: &Event, b: &Event) -> Ordering {
    b.attendance()
        .cmp(&a.attendance())
        .then_with(|| a.name.cmp(&b.name))
}

/// `total / count` rounded half-up to hundredths, e.g. "3.67"
///
/// Works in integer hundredths so values on the `.005` boundary round up
/// exactly.
fn format_average(total: usize, count: usize) -> String {
    let total = total as u128;
    let count = count as u128;
    let hundredths = (total * 200 + count) / (count * 2);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
