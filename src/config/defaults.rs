use super::models::LogLevel;
use crate::presentation::{DEFAULT_REVEAL_RULES, RevealRule};
use crate::scroll::DEFAULT_SECTION_HEIGHT_FACTOR;

pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_section_height_factor() -> f32 {
    DEFAULT_SECTION_HEIGHT_FACTOR
}

pub(crate) fn default_coalesce_to_frames() -> bool {
    true
}

pub(crate) fn default_reveal_rules() -> Vec<RevealRule> {
    DEFAULT_REVEAL_RULES.to_vec()
}

pub(crate) fn default_mobile_breakpoint() -> f32 {
    768.0
}

pub(crate) fn default_log_level() -> LogLevel {
    LogLevel::Info
}
