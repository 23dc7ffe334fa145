use crate::content::SECTIONS;
use crate::presentation::{RevealRule, RevealTable};
use crate::scroll::SectionLayout;
use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub window_pos_x: Option<f32>,
    #[serde(default)]
    pub window_pos_y: Option<f32>,
    #[serde(default = "crate::config::defaults::default_section_height_factor")]
    pub section_height_factor: f32,
    #[serde(default = "crate::config::defaults::default_coalesce_to_frames")]
    pub coalesce_to_frames: bool,
    #[serde(default = "crate::config::defaults::default_reveal_rules")]
    pub reveal_rules: Vec<RevealRule>,
    #[serde(default = "crate::config::defaults::default_mobile_breakpoint")]
    pub mobile_breakpoint: f32,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            section_height_factor: crate::config::defaults::default_section_height_factor(),
            coalesce_to_frames: crate::config::defaults::default_coalesce_to_frames(),
            reveal_rules: crate::config::defaults::default_reveal_rules(),
            mobile_breakpoint: crate::config::defaults::default_mobile_breakpoint(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// One section per entry in the page copy; only the height factor is tunable.
    pub fn section_layout(&self) -> SectionLayout {
        SectionLayout::new(SECTIONS.len(), self.section_height_factor)
    }

    pub fn reveal_table(&self) -> RevealTable {
        RevealTable::new(self.reveal_rules.clone())
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
