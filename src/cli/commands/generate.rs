use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assembler::{Assembler, SourceCredentials};
use crate::errors::AppResult;
use crate::export::{ExportLogic, parse_range};
use crate::models::TimesheetRow;
use crate::sources::HttpSource;
use crate::store::initialize::init_store;
use crate::store::log::ttlog;
use crate::store::pool::DbPool;
use crate::summarize;
use crate::ui::messages::info;
use crate::utils::date::today;
use crate::utils::table::{Column, Table};
use chrono::{Days, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        range,
        out,
        format,
        force,
    } = cmd
    {
        let (start, end) = resolve_range(range)?;

        let mut pool = DbPool::new(&cfg.database)?;
        init_store(&pool.conn)?;

        let source = HttpSource::from_config(cfg);
        let summarizer = summarize::from_config(cfg);
        let creds = SourceCredentials {
            project_key: cfg.jira.project_key.clone(),
            username: cfg.github.username.clone(),
        };

        info(format!("Assembling timesheet for {start} to {end}…"));

        let rows = Assembler::new(&mut pool, &source, summarizer.as_ref(), cfg.lookback_days)
            .assemble(&creds, start, end)?;

        print_rows(&rows);

        if let Err(e) = ttlog(
            &pool.conn,
            "generate",
            &format!("{start}:{end}"),
            &format!("Assembled {} timesheet row(s)", rows.len()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        if let Some(file) = out {
            ExportLogic::export_rows(&rows, &cfg.employee, format, file, *force)?;
        }
    }
    Ok(())
}

/// Default range mirrors the upstream behavior: the last five days
/// including today.
fn resolve_range(range: &Option<String>) -> AppResult<(NaiveDate, NaiveDate)> {
    match range {
        Some(r) => parse_range(r),
        None => {
            let end = today();
            let start = end.checked_sub_days(Days::new(4)).unwrap_or(end);
            Ok((start, end))
        }
    }
}

fn print_rows(rows: &[TimesheetRow]) {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Project", 16),
        Column::new("Task", 26),
        Column::new("Status", 12),
        Column::new("Remark", 48),
    ]);

    for row in rows {
        table.add_row(vec![
            row.date_str(),
            row.project.clone(),
            row.task.clone(),
            row.status.clone(),
            row.remark.clone(),
        ]);
    }

    println!("\n{}", table.render());
}
