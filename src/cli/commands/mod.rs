pub mod config;
pub mod db;
pub mod export;
pub mod generate;
pub mod init;
pub mod insights;
pub mod log;
