//! Runtime configuration read from the environment (and an optional `.env` file).

use std::env;
use std::path::PathBuf;

const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/0";

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the Redis server holding the lists.
    pub redis_url: String,
    /// Directory receiving one log file per run.
    pub log_dir: PathBuf,
}

impl Config {
    /// Loads `.env` if present, then reads `REDIS_URL` and `REDIS_LISTS_LOG_DIR`.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_vars()
    }

    fn from_vars() -> Self {
        let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());
        let log_dir = env::var_os("REDIS_LISTS_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_log_dir);

        Self { redis_url, log_dir }
    }
}

/// `Logs/` next to the executable, or in the working directory if that cannot be determined.
fn default_log_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("Logs")))
        .unwrap_or_else(|| PathBuf::from("Logs"))
}
