//! Configuration loading for the landing site.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! sensible defaults so the UI can still launch.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, serialize_config};
pub use models::AppConfig;

#[cfg(test)]
pub use io::parse_config;
