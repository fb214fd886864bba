use chrono::NaiveDate;
use serde::Serialize;

/// One timesheet row per date in the requested range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesheetRow {
    pub date: NaiveDate,
    pub project: String,
    pub task: String,
    pub task_description: String,
    pub status: String,
    pub remark: String,
}

impl TimesheetRow {
    /// Sentinel row for a day with no activity and no carry-forward match.
    pub fn no_activity(date: NaiveDate) -> Self {
        Self {
            date,
            project: "N/A".to_string(),
            task: "N/A".to_string(),
            task_description: "N/A".to_string(),
            status: "N/A".to_string(),
            remark: "No activity found.".to_string(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
