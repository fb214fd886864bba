use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            println!("📄 Config file: {}\n", path.display());

            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{content}");
            } else {
                warning("No configuration file found, showing effective defaults.");
                println!(
                    "{}",
                    serde_yaml::to_string(cfg).unwrap_or_else(|_| String::new())
                );
            }
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration looks complete.");
            } else {
                for p in &problems {
                    warning(p);
                }
                println!("\n{} issue(s) found.", problems.len());
            }
        }
    }
    Ok(())
}
