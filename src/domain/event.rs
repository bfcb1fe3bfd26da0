//! Event and tag records

use crate::domain::calendar::parse_calendar_date;
use crate::error::{EventStatsError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled occurrence with a date, attendees and tag ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub registered_users: Vec<String>,
}

impl Event {
    pub fn new(id: impl Into<String>, name: impl Into<String>, date: impl Into<String>) -> Self {
        Event {
            id: id.into(),
            name: name.into(),
            date: date.into(),
            tags: Vec::new(),
            registered_users: Vec::new(),
        }
    }

    /// Number of registered users
    pub fn attendance(&self) -> usize {
        self.registered_users.len()
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t == tag_id)
    }

    /// Parse this event's date, reporting the event id on failure
    pub fn calendar_date(&self) -> Result<NaiveDate> {
        parse_calendar_date(&self.date).map_err(|_| {
            EventStatsError::InvalidInput(format!("{} (event {})", self.date, self.id))
        })
    }
}

/// A named category attachable to events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Tag {
            id: id.into(),
            name: name.into(),
        }
    }
}
