//! Application configuration: snapshot database path, source credentials,
//! summarizer settings, employee fields for exports, and the two policy knobs
//! (carry-forward lookback, context-switch threshold).
//!
//! Stored as YAML under the user's config directory. All added fields carry
//! serde defaults so configs written by older versions keep loading.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,

    #[serde(default)]
    pub jira: JiraConfig,

    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub groq: GroqConfig,

    #[serde(default)]
    pub employee: EmployeeConfig,

    /// How many prior days carry-forward resolution may look back.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,

    /// Distinct repos + projects above which a day counts as context
    /// switching.
    #[serde(default = "default_context_switch_threshold")]
    pub context_switch_threshold: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JiraConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub api_token: String,
    #[serde(default)]
    pub project_key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_groq_model")]
    pub model: String,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_groq_model(),
        }
    }
}

/// Static fields attached to every exported timesheet row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeConfig {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_billable")]
    pub billable: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_site")]
    pub site: String,
    #[serde(default = "default_authorized_hours")]
    pub authorized_hours: String,
}

impl Default for EmployeeConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            billable: default_billable(),
            role: default_role(),
            site: default_site(),
            authorized_hours: default_authorized_hours(),
        }
    }
}

fn default_lookback_days() -> u32 {
    crate::core::carryforward::DEFAULT_LOOKBACK_DAYS
}
fn default_context_switch_threshold() -> u32 {
    crate::core::insights::DEFAULT_CONTEXT_SWITCH_THRESHOLD
}
fn default_groq_model() -> String {
    "llama-3.1-8b-instant".to_string()
}
fn default_billable() -> String {
    "Yes".to_string()
}
fn default_role() -> String {
    "Developer".to_string()
}
fn default_site() -> String {
    "Offshore".to_string()
}
fn default_authorized_hours() -> String {
    "8".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            jira: JiraConfig::default(),
            github: GithubConfig::default(),
            groq: GroqConfig::default(),
            employee: EmployeeConfig::default(),
            lookback_days: default_lookback_days(),
            context_switch_threshold: default_context_switch_threshold(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tracksheet")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".tracksheet")
        }
    }

    /// Return the full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tracksheet.conf")
    }

    /// Return the full path of the SQLite snapshot database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("tracksheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
        } else {
            Ok(Config::default())
        }
    }

    /// Fill empty credential fields from the environment. Skipped in test
    /// mode so CI environment tokens never leak into test runs.
    pub fn apply_env_overrides(&mut self) {
        fill_from_env(&mut self.jira.api_token, "JIRA_API_TOKEN");
        fill_from_env(&mut self.jira.url, "JIRA_URL");
        fill_from_env(&mut self.jira.email, "JIRA_EMAIL");
        fill_from_env(&mut self.jira.project_key, "JIRA_PROJECT_KEY");
        fill_from_env(&mut self.github.token, "GITHUB_TOKEN");
        fill_from_env(&mut self.github.username, "GITHUB_USERNAME");
        fill_from_env(&mut self.groq.api_key, "GROQ_API_KEY");
        fill_from_env(&mut self.groq.model, "GROQ_MODEL");
    }

    /// Initialize configuration and database files.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // No config file update in test mode.
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists.
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// Report config problems that would silently degrade a run: missing
    /// credentials mean the matching source returns error markers only.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.jira.url.trim().is_empty() || self.jira.api_token.trim().is_empty() {
            problems.push("Jira credentials missing: issue fetches will degrade".to_string());
        }
        if self.jira.project_key.trim().is_empty() {
            problems.push("Jira project key missing".to_string());
        }
        if self.github.token.trim().is_empty() {
            problems.push("GitHub token missing: vcs fetches will degrade".to_string());
        }
        if self.github.username.trim().is_empty() {
            problems.push("GitHub username missing".to_string());
        }
        if self.groq.api_key.trim().is_empty() {
            problems.push("Groq API key missing: remarks will use the fallback text".to_string());
        }
        if self.lookback_days == 0 {
            problems.push("lookback_days is 0: carry-forward is disabled".to_string());
        }

        problems
    }
}

fn fill_from_env(field: &mut String, var: &str) {
    if field.trim().is_empty()
        && let Ok(value) = env::var(var)
        && !value.trim().is_empty()
    {
        *field = value;
    }
}
