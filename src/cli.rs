use crate::config::{LocaleChoice, ViewerConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "igvendetta",
    version,
    about = "Browse a JSON export of social profiles as paginated cards"
)]
pub struct Cli {
    /// Directory holding the persisted dataset
    #[arg(long, global = true, value_name = "DIR", env = "IGVENDETTA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
    /// Interface language
    #[arg(long, global = true, value_enum, default_value_t = LocaleChoice::Spanish)]
    pub locale: LocaleChoice,
    /// Hide the verified-accounts toggle
    #[arg(long, global = true)]
    pub no_filter: bool,
    /// Only log load errors instead of showing them in the status bar
    #[arg(long, global = true)]
    pub quiet_errors: bool,
    /// Write log output to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the interactive viewer (default)
    Browse(BrowseArgs),
    /// Load a JSON export into the local store
    Load(LoadArgs),
    /// Print one page of the stored profiles
    Show(ShowArgs),
    /// Forget the stored profiles
    Clear,
}

#[derive(Args, Clone, Default)]
pub struct BrowseArgs {
    /// JSON export to load on start
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct LoadArgs {
    /// JSON export
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Page to print (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
    /// Leave verified accounts out
    #[arg(long)]
    pub hide_verified: bool,
}

impl Cli {
    pub fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            filtering: !self.no_filter,
            locale: self.locale.into(),
            surface_errors: !self.quiet_errors,
            ..ViewerConfig::default()
        }
    }
}
