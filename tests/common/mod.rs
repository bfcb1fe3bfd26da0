#![allow(dead_code)]

use eventstats::{Event, Tag};

pub fn event(id: &str, name: &str, date: &str, tags: &[&str], attendance: usize) -> Event {
    let mut event = Event::new(id, name, date);
    event.tags = tags.iter().map(|s| s.to_string()).collect();
    event.registered_users = (0..attendance).map(|i| format!("user-{}", i)).collect();
    event
}

pub fn tags() -> Vec<Tag> {
    vec![
        Tag::new("tag-1", "Mathematics"),
        Tag::new("tag-2", "Art"),
        Tag::new("tag-3", "History"),
        Tag::new("tag-4", "Science"),
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        event("event-1", "Math Circle", "2020-01-01", &["tag-1"], 3),
        event(
            "event-2",
            "Remote Teaching Strategies",
            "2020-01-02",
            &["tag-1", "tag-3"],
            4,
        ),
        event("event-3", "Printmaking", "2020-03-08", &["tag-2"], 12),
        event("event-4", "Local History Walk", "2020-11-26", &["tag-3", "tag-9"], 4),
        event("event-5", "Geometry Games", "2020-11-30", &["tag-1"], 4),
        event("event-6", "Open Studio", "2021-10-18", &[], 0),
    ]
}
