use crate::config::EmployeeConfig;
use crate::models::TimesheetRow;
use serde::Serialize;

/// Flat export shape for one timesheet row: the assembled columns plus the
/// static employee fields, in the exact column order consumers expect.
#[derive(Serialize, Clone, Debug)]
pub struct RowExport {
    #[serde(rename = "Employee Id")]
    pub employee_id: String,
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Task Description")]
    pub task_description: String,
    #[serde(rename = "Authorized Hours")]
    pub authorized_hours: String,
    #[serde(rename = "Billable")]
    pub billable: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Site")]
    pub site: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Remark")]
    pub remark: String,
}

impl RowExport {
    pub fn from_row(row: &TimesheetRow, employee: &EmployeeConfig) -> Self {
        Self {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            date: row.date_str(),
            project: row.project.clone(),
            task: row.task.clone(),
            task_description: row.task_description.clone(),
            authorized_hours: employee.authorized_hours.clone(),
            billable: employee.billable.clone(),
            role: employee.role.clone(),
            site: employee.site.clone(),
            status: row.status.clone(),
            remark: row.remark.clone(),
        }
    }
}

/// Header row for CSV / XLSX, matching the serde field order above.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Employee Id",
        "Employee Name",
        "Date",
        "Project",
        "Task",
        "Task Description",
        "Authorized Hours",
        "Billable",
        "Role",
        "Site",
        "Status",
        "Remark",
    ]
}

pub(crate) fn row_to_cells(r: &RowExport) -> Vec<String> {
    vec![
        r.employee_id.clone(),
        r.employee_name.clone(),
        r.date.clone(),
        r.project.clone(),
        r.task.clone(),
        r.task_description.clone(),
        r.authorized_hours.clone(),
        r.billable.clone(),
        r.role.clone(),
        r.site.clone(),
        r.status.clone(),
        r.remark.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn cell_order_matches_headers() {
        let row = TimesheetRow::no_activity(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let mut employee = EmployeeConfig::default();
        employee.id = "E-1".to_string();

        let export = RowExport::from_row(&row, &employee);
        let cells = row_to_cells(&export);
        assert_eq!(cells.len(), get_headers().len());
        assert_eq!(cells[0], "E-1");
        assert_eq!(cells[2], "2024-01-01");
        assert_eq!(cells[11], "No activity found.");
    }
}
