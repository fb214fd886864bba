//! High-level export orchestration.

use crate::config::EmployeeConfig;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RowExport;
use crate::export::xlsx::export_xlsx;
use crate::models::{InsightsReport, TimesheetRow};
use crate::ui::messages::warning;
use std::fs;
use std::io;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write timesheet rows to `file` in the requested format. The static
    /// employee columns come from config and wrap every row.
    pub fn export_rows(
        rows: &[TimesheetRow],
        employee: &EmployeeConfig,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = check_output_path(file, force)?;

        if rows.is_empty() {
            warning("No timesheet rows for the selected range.");
        }

        let exports: Vec<RowExport> = rows
            .iter()
            .map(|r| RowExport::from_row(r, employee))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&exports, path),
            ExportFormat::Json => export_json(&exports, path),
            ExportFormat::Xlsx => export_xlsx(&exports, path),
        }
    }

    /// Write an insights report as nested pretty-printed JSON.
    pub fn export_insights(report: &InsightsReport, file: &str, force: bool) -> AppResult<()> {
        let path = check_output_path(file, force)?;

        let json = serde_json::to_string_pretty(report)
            .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
        fs::write(path, json)?;

        crate::export::notify_export_success("Insights JSON", path);
        Ok(())
    }
}

fn check_output_path(file: &str, force: bool) -> AppResult<&Path> {
    let path = Path::new(file);

    if !path.is_absolute() {
        return Err(AppError::from(io::Error::other(format!(
            "Output file path must be absolute: {file}"
        ))));
    }

    ensure_writable(path, force)?;
    Ok(path)
}
