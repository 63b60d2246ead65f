use crate::error::Result;
use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "igvendetta";
pub const LOG_FILE_NAME: &str = "igvendetta.log";

pub fn print_banner() {
    const GOLD: &str = "\x1b[38;5;179m";
    const CRIMSON: &str = "\x1b[38;5;131m";
    const DIM: &str = "\x1b[38;5;245m";
    const RESET: &str = "\x1b[0m";
    eprintln!(
        "{DIM}------------------------------------------------{RESET}\n\
{GOLD}  _       _   __            __     __  __       {RESET}\n\
{GOLD} (_)__ _ | | / /__ ___  ___/ /__  / /_/ /____ _ {RESET}\n\
{GOLD}/ / _ `/ | |/ / -_) _ \\/ _  / -_)/ __/ __/ _ `/ {RESET}\n\
{GOLD}/_/\\_, /  |___/\\__/_//_/\\_,_/\\__/ \\__/\\__/\\_,_/  {RESET}\n\
{GOLD}  /___/{RESET}\n\
{CRIMSON} igvendetta :: who follows whom, twelve at a time{RESET}"
    );
}

/// Where the store lives when no directory is given.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(dir).join(APP_DIR);
    }
    #[cfg(target_os = "windows")]
    {
        if let Some(home) = env::var_os("USERPROFILE") {
            return PathBuf::from(home).join(APP_DIR);
        }
    }
    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join(".local").join("share").join(APP_DIR);
    }
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(APP_DIR)
}

/// Sets up `env_logger`. `RUST_LOG` overrides `default_level`; with a
/// `log_file` the output is appended there instead of going to stderr.
pub fn init_logging(default_level: &str, log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    // a second init (tests, embedding) keeps the first logger
    let _ = builder.try_init();
    Ok(())
}
