use super::defaults;
use super::models::{AppConfig, LogLevel};
use crate::presentation::RevealRule;
use serde::Deserialize;

/// Table names that mark a file as using the sectioned layout.
pub(super) const TABLE_KEYS: [&str; 5] = ["window", "scroll", "reveal", "navigation", "logging"];

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    scroll: ScrollConfig,
    #[serde(default)]
    reveal: RevealConfig,
    #[serde(default)]
    navigation: NavigationConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            window_width: tables.window.width,
            window_height: tables.window.height,
            window_pos_x: tables.window.pos_x,
            window_pos_y: tables.window.pos_y,
            section_height_factor: tables.scroll.section_height_factor,
            coalesce_to_frames: tables.scroll.coalesce_to_frames,
            reveal_rules: tables.reveal.rules,
            mobile_breakpoint: tables.navigation.mobile_breakpoint,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
                pos_x: config.window_pos_x,
                pos_y: config.window_pos_y,
            },
            scroll: ScrollConfig {
                section_height_factor: config.section_height_factor,
                coalesce_to_frames: config.coalesce_to_frames,
            },
            reveal: RevealConfig {
                rules: config.reveal_rules.clone(),
            },
            navigation: NavigationConfig {
                mobile_breakpoint: config.mobile_breakpoint,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
    #[serde(default)]
    pos_x: Option<f32>,
    #[serde(default)]
    pos_y: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
            pos_x: None,
            pos_y: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ScrollConfig {
    #[serde(default = "defaults::default_section_height_factor")]
    section_height_factor: f32,
    #[serde(default = "defaults::default_coalesce_to_frames")]
    coalesce_to_frames: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            section_height_factor: defaults::default_section_height_factor(),
            coalesce_to_frames: defaults::default_coalesce_to_frames(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct RevealConfig {
    #[serde(default = "defaults::default_reveal_rules")]
    rules: Vec<RevealRule>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            rules: defaults::default_reveal_rules(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct NavigationConfig {
    #[serde(default = "defaults::default_mobile_breakpoint")]
    mobile_breakpoint: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            mobile_breakpoint: defaults::default_mobile_breakpoint(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
