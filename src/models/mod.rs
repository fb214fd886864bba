pub mod entry;
pub mod report;
pub mod row;
pub mod snapshot;

pub use entry::{IssueEntry, VcsEntry, VcsEventType};
pub use report::InsightsReport;
pub use row::TimesheetRow;
pub use snapshot::DailySnapshot;
