use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::insights::analyze;
use crate::errors::AppResult;
use crate::export::{ExportLogic, parse_range};
use crate::models::InsightsReport;
use crate::store::initialize::init_store;
use crate::store::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, RESET};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Insights { range, out, force } = cmd {
        let (start, end) = parse_range(range)?;

        let pool = DbPool::new(&cfg.database)?;
        init_store(&pool.conn)?;

        let report = analyze(&pool, start, end, cfg.context_switch_threshold);

        print_report(start, end, &report);

        if let Some(file) = out {
            ExportLogic::export_insights(&report, file, *force)?;
        }
    }
    Ok(())
}

fn print_report(start: NaiveDate, end: NaiveDate, report: &InsightsReport) {
    println!();
    println!("{}Productivity insights {} to {}{}", CYAN, start, end, RESET);

    let cm = &report.commit_metrics;
    println!("\n{}• Commits{}", CYAN, RESET);
    println!("    total:     {}{}{}", GREEN, cm.total_commits, RESET);
    for (repo, count) in &cm.commits_per_repo {
        println!("    {repo}: {count}");
    }

    let jm = &report.jira_metrics;
    println!("\n{}• Tickets{}", CYAN, RESET);
    println!("    touched:     {}", jm.total_tickets_touched);
    println!("    completed:   {}", jm.tickets_completed);
    println!("    in progress: {}", jm.tickets_in_progress);
    println!("    avg days active: {:.2}", jm.average_days_active);

    let dist = &report.distribution;
    if !dist.project_distribution_percent.is_empty() {
        println!("\n{}• Project distribution{}", CYAN, RESET);
        for (project, pct) in &dist.project_distribution_percent {
            println!("    {project}: {pct:.2}%");
        }
    }
    if !dist.repo_distribution_percent.is_empty() {
        println!("\n{}• Repo distribution{}", CYAN, RESET);
        for (repo, pct) in &dist.repo_distribution_percent {
            println!("    {repo}: {pct:.2}%");
        }
    }

    let cons = &report.consistency;
    println!("\n{}• Consistency{}", CYAN, RESET);
    println!("    active days:            {}", cons.active_days);
    println!(
        "    longest inactivity:     {} day(s)",
        cons.longest_inactivity_streak_days
    );
    println!(
        "    context-switching days: {}",
        cons.context_switching_days
    );
    println!();
}
