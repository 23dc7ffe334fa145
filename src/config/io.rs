use super::models::AppConfig;
use super::tables::{ConfigTables, TABLE_KEYS};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

/// Accepts the sectioned layout (`[window]`, `[scroll]`, ...) and falls back
/// to flat top-level keys.
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let document: toml::Table = toml::from_str(contents)?;
    let sectioned = TABLE_KEYS
        .iter()
        .any(|key| document.get(*key).is_some_and(toml::Value::is_table));
    if sectioned {
        let tables: ConfigTables = toml::from_str(contents)?;
        Ok(tables.into())
    } else {
        toml::from_str(contents)
    }
}

pub fn serialize_config(config: &AppConfig) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&ConfigTables::from(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::LogLevel;
    use crate::presentation::RevealEffect;
    use std::io::Write;

    #[test]
    fn sectioned_layout_overrides_defaults() {
        let cfg = parse_config(
            r#"
            [scroll]
            section_height_factor = 0.8
            coalesce_to_frames = false

            [logging]
            log_level = "trace"

            [[reveal.rules]]
            threshold = 0.25
            effect = "summit-beacon"
            "#,
        )
        .expect("sectioned config parses");

        assert_eq!(cfg.section_height_factor, 0.8);
        assert!(!cfg.coalesce_to_frames);
        assert_eq!(cfg.log_level, LogLevel::Trace);
        assert_eq!(cfg.reveal_rules.len(), 1);
        assert_eq!(cfg.reveal_rules[0].effect, RevealEffect::SummitBeacon);
        assert_eq!(cfg.window_width, 1280.0);
    }

    #[test]
    fn flat_layout_is_still_accepted() {
        let cfg = parse_config("window_width = 900.0\nsection_height_factor = 0.8\n")
            .expect("flat config parses");
        assert_eq!(cfg.window_width, 900.0);
        assert_eq!(cfg.section_layout().height_factor(), 0.8);
        assert_eq!(cfg.section_layout().max_index(), 6);
        assert_eq!(cfg.reveal_rules.len(), 8);
    }

    #[test]
    fn invalid_effect_name_is_rejected() {
        let err = parse_config("[[reveal.rules]]\nthreshold = 0.2\neffect = \"fireworks\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = AppConfig::default();
        config.mobile_breakpoint = 640.0;
        config.window_pos_x = Some(10.0);
        let text = serialize_config(&config).expect("serialize config");
        assert!(text.contains("[scroll]"));
        assert_eq!(parse_config(&text).expect("reparse"), config);
    }

    #[test]
    fn missing_or_broken_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent.toml");
        assert_eq!(load_config(&missing), AppConfig::default());

        let broken = dir.path().join("broken.toml");
        let mut file = fs::File::create(&broken).expect("create config");
        writeln!(file, "[scroll\ncoalesce_to_frames = ").expect("write config");
        assert_eq!(load_config(&broken), AppConfig::default());
    }

    #[test]
    fn file_on_disk_is_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[navigation]\nmobile_breakpoint = 500.0\n").expect("write config");
        assert_eq!(load_config(&path).mobile_breakpoint, 500.0);
    }
}
