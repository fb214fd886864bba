use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::load_log;
use crate::store::pool::DbPool;
use crate::utils::colors::{GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            println!("No log entries.");
            return Ok(());
        }

        for (date, operation, message) in rows {
            println!("{GREY}{date}{RESET} [{operation}] {message}");
        }
    }
    Ok(())
}
