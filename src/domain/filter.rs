//! Before/after filtering of events by calendar date

use crate::domain::calendar::parse_calendar_date;
use crate::domain::Event;
use crate::error::{EventStatsError, Result};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::str::FromStr;

/// Direction of a date filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum When {
    /// Strictly earlier than the reference date
    Before,
    /// Strictly later than the reference date
    After,
}

impl When {
    fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            When::Before => ordering == Ordering::Less,
            When::After => ordering == Ordering::Greater,
        }
    }
}

impl FromStr for When {
    type Err = EventStatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "before" => Ok(When::Before),
            "after" => Ok(When::After),
            _ => Err(EventStatsError::InvalidArgument(s.to_string())),
        }
    }
}

impl std::fmt::Display for When {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            When::Before => write!(f, "before"),
            When::After => write!(f, "after"),
        }
    }
}

/// Events occurring strictly before or after `date`, in input order
///
/// `when` must be exactly `"before"` or `"after"`.
///
/// # Examples
///
/// ```
/// use eventstats::{filter_events_by_date, Event};
///
/// let events = vec![
///     Event::new("e1", "Kickoff", "2020-01-02"),
///     Event::new("e2", "Review", "2020-12-01"),
/// ];
/// let after = filter_events_by_date(&events, "2020-11-26", "after").unwrap();
/// assert_eq!(after.len(), 1);
/// assert_eq!(after[0].id, "e2");
/// ```
pub fn filter_events_by_date<'a>(
    events: &'a [Event],
    date: &str,
    when: &str,
) -> Result<Vec<&'a Event>> {
    let when = When::from_str(when)?;
    let reference = parse_calendar_date(date)?;
    filter_events(events, reference, when)
}

/// Typed form of [`filter_events_by_date`]
pub fn filter_events(events: &[Event], reference: NaiveDate, when: When) -> Result<Vec<&Event>> {
    let mut matched = Vec::new();
    for event in events {
        if when.accepts(event.calendar_date()?.cmp(&reference)) {
            matched.push(event);
        }
    }
    Ok(matched)
}

/// Events split around a reference date
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatePartition<'a> {
    pub before: Vec<&'a Event>,
    pub on: Vec<&'a Event>,
    pub after: Vec<&'a Event>,
}

/// Split events into those before, on and after `date`, each in input order
pub fn partition_by_date<'a>(events: &'a [Event], date: &str) -> Result<DatePartition<'a>> {
    let reference = parse_calendar_date(date)?;
    let mut partition = DatePartition::default();

    for event in events {
        match event.calendar_date()?.cmp(&reference) {
            Ordering::Less => partition.before.push(event),
            Ordering::Equal => partition.on.push(event),
            Ordering::Greater => partition.after.push(event),
        }
    }

    Ok(partition)
}
