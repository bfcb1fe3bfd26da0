//! Tag id to name resolution

use crate::domain::{Event, Tag};
use std::collections::HashMap;

/// Lookup table from tag id to tag name
///
/// When several tags share an id, the first one wins.
#[derive(Debug, Clone, Default)]
pub struct TagIndex<'a> {
    names: HashMap<&'a str, &'a str>,
}

impl<'a> TagIndex<'a> {
    pub fn new(tags: &'a [Tag]) -> Self {
        let mut names = HashMap::with_capacity(tags.len());
        for tag in tags {
            names.entry(tag.id.as_str()).or_insert(tag.name.as_str());
        }
        TagIndex { names }
    }

    pub fn name_of(&self, tag_id: &str) -> Option<&'a str> {
        self.names.get(tag_id).copied()
    }

    /// Sorted names for an event's tag ids; unknown ids are skipped
    pub fn names_for(&self, event: &Event) -> Vec<String> {
        let mut names: Vec<String> = event
            .tags
            .iter()
            .filter_map(|id| self.name_of(id))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }
}

/// Names of the tags attached to `event`, in ascending order
///
/// Duplicate ids on the event produce duplicate names.
///
/// # Examples
///
/// ```
/// use eventstats::{get_names_of_tags, Event, Tag};
///
/// let tags = vec![Tag::new("t1", "Science"), Tag::new("t2", "Art")];
/// let mut event = Event::new("e1", "Fair", "2021-05-01");
/// event.tags = vec!["t1".to_string(), "t2".to_string(), "t9".to_string()];
/// assert_eq!(get_names_of_tags(&event, &tags), vec!["Art", "Science"]);
/// ```
pub fn get_names_of_tags(event: &Event, tags: &[Tag]) -> Vec<String> {
    TagIndex::new(tags).names_for(event)
}
