use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assembler::rows_from_store;
use crate::errors::AppResult;
use crate::export::{ExportLogic, parse_range};
use crate::store::initialize::init_store;
use crate::store::log::ttlog;
use crate::store::pool::DbPool;
use crate::summarize::LocalSummarizer;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let (start, end) = parse_range(range)?;

        let pool = DbPool::new(&cfg.database)?;
        init_store(&pool.conn)?;

        // Offline rebuild: rows come from stored snapshots only, remarks are
        // composed locally.
        let rows = rows_from_store(&pool, &LocalSummarizer, start, end, cfg.lookback_days);

        ExportLogic::export_rows(&rows, &cfg.employee, format, file, *force)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} row(s) for {start}:{end}", rows.len()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }
    Ok(())
}
