//! Application layer - Use cases over a loaded catalog

pub mod tag_report;

pub use tag_report::{EventSummary, TagReportRow, TagReportService};
