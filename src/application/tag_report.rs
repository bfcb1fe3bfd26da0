//! Tag report use case

use crate::domain::calendar::display_date;
use crate::domain::filter::filter_events;
use crate::domain::tags::calculate_statistics_for_tag;
use crate::domain::{Event, TagIndex, TagStatistics, When};
use crate::error::Result;
use crate::infrastructure::Catalog;
use chrono::NaiveDate;
use serde::Serialize;

/// Statistics for one catalog tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagReportRow {
    pub tag_id: String,
    pub tag_name: String,
    #[serde(flatten)]
    pub statistics: TagStatistics,
}

/// An event as shown in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    pub name: String,
    /// Long display date, e.g. "Monday, Oct 18, 2021"
    pub date: String,
    pub tag_names: Vec<String>,
}

/// Service for reporting over a loaded catalog.
pub struct TagReportService {
    catalog: Catalog,
}

impl TagReportService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// One row per tag, ordered by tag name then id.
    pub fn execute(&self) -> Vec<TagReportRow> {
        let mut rows: Vec<TagReportRow> = self
            .catalog
            .tags
            .iter()
            .map(|tag| TagReportRow {
                tag_id: tag.id.clone(),
                tag_name: tag.name.clone(),
                statistics: calculate_statistics_for_tag(&self.catalog.events, tag),
            })
            .collect();

        rows.sort_by(|a, b| {
            a.tag_name
                .cmp(&b.tag_name)
                .then_with(|| a.tag_id.cmp(&b.tag_id))
        });
        rows
    }

    /// Events strictly after `today`, in catalog order.
    pub fn upcoming(&self, today: NaiveDate) -> Result<Vec<EventSummary>> {
        self.summarize(filter_events(&self.catalog.events, today, When::After)?)
    }

    /// Events strictly before `today`, in catalog order.
    pub fn past(&self, today: NaiveDate) -> Result<Vec<EventSummary>> {
        self.summarize(filter_events(&self.catalog.events, today, When::Before)?)
    }

    fn summarize(&self, events: Vec<&Event>) -> Result<Vec<EventSummary>> {
        let index = TagIndex::new(&self.catalog.tags);
        events
            .into_iter()
            .map(|event| {
                event.calendar_date().map(|date| EventSummary {
                    id: event.id.clone(),
                    name: event.name.clone(),
                    date: display_date(date),
                    tag_names: index.names_for(event),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tag;

    fn catalog() -> Catalog {
        let mut star = Event::new("event-1", "Star Party", "2021-10-18");
        star.tags = vec!["tag-1".to_string()];
        star.registered_users = vec!["u1".to_string(), "u2".to_string()];

        let mut sketch = Event::new("event-2", "Sketch Walk", "2020-03-08");
        sketch.tags = vec!["tag-2".to_string(), "tag-1".to_string()];

        Catalog::new(
            vec![star, sketch],
            vec![
                Tag::new("tag-1", "Science"),
                Tag::new("tag-2", "Art"),
                Tag::new("tag-3", "Music"),
            ],
        )
    }

    #[test]
    fn test_report_rows_sorted_by_name() {
        let service = TagReportService::new(catalog());
        let rows = service.execute();
        let names: Vec<&str> = rows.iter().map(|r| r.tag_name.as_str()).collect();
        assert_eq!(names, vec!["Art", "Music", "Science"]);
    }

    #[test]
    fn test_report_statistics() {
        let service = TagReportService::new(catalog());
        let rows = service.execute();

        let science = rows.iter().find(|r| r.tag_id == "tag-1").unwrap();
        assert_eq!(science.statistics.event_count, 2);
        assert_eq!(science.statistics.average_registration.as_deref(), Some("1.00"));
        assert_eq!(
            science.statistics.most_popular_event.as_deref(),
            Some("Star Party")
        );

        let music = rows.iter().find(|r| r.tag_id == "tag-3").unwrap();
        assert!(music.statistics.is_unused());
    }

    #[test]
    fn test_upcoming_and_past() {
        let service = TagReportService::new(catalog());
        let today = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();

        let upcoming = service.upcoming(today).unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date, "Monday, Oct 18, 2021");
        assert_eq!(upcoming[0].tag_names, vec!["Science"]);

        let past = service.past(today).unwrap();
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].date, "Sunday, Mar 8, 2020");
        assert_eq!(past[0].tag_names, vec!["Art", "Science"]);
    }
}
