pub mod browser;
pub mod card;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingest;
pub mod paginate;
pub mod profile;
pub mod store;
pub mod tui;
pub mod utils;
