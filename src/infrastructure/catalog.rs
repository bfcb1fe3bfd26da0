//! TOML-backed event catalog
//!
//! A catalog file holds `[[events]]` and `[[tags]]` tables:
//!
//! ```toml
//! [[tags]]
//! id = "tag-1"
//! name = "Science"
//!
//! [[events]]
//! id = "event-1"
//! name = "Star Party"
//! date = "2021-10-18"
//! tags = ["tag-1"]
//! registeredUsers = ["user-1", "user-2"]
//! ```

use crate::domain::{Event, Tag};
use crate::error::{EventStatsError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// Environment variable naming a catalog file
pub const CATALOG_ENV: &str = "EVENTSTATS_CATALOG";

/// File name looked up by [`Catalog::discover_from`]
pub const CATALOG_FILE: &str = "events.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Catalog {
    pub fn new(events: Vec<Event>, tags: Vec<Tag>) -> Self {
        Catalog { events, tags }
    }

    /// Load and validate a catalog file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EventStatsError::Catalog(format!("Catalog not found: {}", path.display()))
            } else {
                EventStatsError::Io(e)
            }
        })?;

        let catalog: Catalog = contents.parse().map_err(|e| match e {
            EventStatsError::TomlDeserialize(e) => EventStatsError::Catalog(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            )),
            other => other,
        })?;

        debug!(
            path = %path.display(),
            events = catalog.events.len(),
            tags = catalog.tags.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Locate the catalog through EVENTSTATS_CATALOG, falling back to the
    /// current directory
    pub fn discover() -> Result<Self> {
        if let Ok(path) = std::env::var(CATALOG_ENV) {
            let path = PathBuf::from(path);
            if !path.is_file() {
                return Err(EventStatsError::Catalog(format!(
                    "{} is set to '{}' but no catalog file was found there",
                    CATALOG_ENV,
                    path.display()
                )));
            }
            return Self::load_from_path(&path);
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Load `events.toml` from the given directory
    pub fn discover_from(dir: &Path) -> Result<Self> {
        Self::load_from_path(&dir.join(CATALOG_FILE))
    }

    /// Reject duplicate event or tag ids
    ///
    /// Events referencing unknown tag ids are allowed and only logged.
    pub fn validate(&self) -> Result<()> {
        let mut event_ids = HashSet::new();
        for event in &self.events {
            if !event_ids.insert(event.id.as_str()) {
                return Err(EventStatsError::Catalog(format!(
                    "Duplicate event id: {}",
                    event.id
                )));
            }
        }

        let mut tag_ids = HashSet::new();
        for tag in &self.tags {
            if !tag_ids.insert(tag.id.as_str()) {
                return Err(EventStatsError::Catalog(format!(
                    "Duplicate tag id: {}",
                    tag.id
                )));
            }
        }

        for (event_id, tag_id) in self.unknown_tag_references() {
            warn!(event = %event_id, tag = %tag_id, "event references unknown tag");
        }

        Ok(())
    }

    /// `(event id, tag id)` pairs whose tag id matches no catalog tag
    pub fn unknown_tag_references(&self) -> Vec<(&str, &str)> {
        let tag_ids: HashSet<&str> = self.tags.iter().map(|t| t.id.as_str()).collect();
        let mut unknown = Vec::new();
        for event in &self.events {
            for tag_id in &event.tags {
                if !tag_ids.contains(tag_id.as_str()) {
                    unknown.push((event.id.as_str(), tag_id.as_str()));
                }
            }
        }
        unknown
    }

    pub fn tag(&self, tag_id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == tag_id)
    }
}

impl FromStr for Catalog {
    type Err = EventStatsError;

    fn from_str(s: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(s)?;
        catalog.validate()?;
        Ok(catalog)
    }
}
