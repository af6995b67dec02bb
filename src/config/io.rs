use super::models::AppConfig;
use super::tables::{ConfigTables, TABLE_NAMES};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load configuration from disk, falling back to defaults on any problem.
pub fn load_config(path: &Path) -> AppConfig {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(
                path = %path.display(),
                "Config not readable ({err}); using defaults"
            );
            return AppConfig::default();
        }
    };
    match parse_config(&raw) {
        Ok(config) => {
            info!(path = %path.display(), "Loaded config");
            config
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config ({err:#}); using defaults");
            AppConfig::default()
        }
    }
}

/// Parse either the grouped table layout or the legacy flat layout.
pub fn parse_config(raw: &str) -> Result<AppConfig> {
    let document: toml::Table = toml::from_str(raw).context("Config is not valid TOML")?;
    let grouped = TABLE_NAMES
        .iter()
        .any(|name| document.get(*name).is_some_and(toml::Value::is_table));
    if grouped {
        let tables: ConfigTables =
            toml::from_str(raw).context("Failed to read grouped config tables")?;
        Ok(tables.into())
    } else {
        toml::from_str(raw).context("Failed to read flat config")
    }
}

/// Serialize using the grouped table layout.
pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("Failed to serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};
    use journey_core::{JourneyVariant, KeyPress, KeyToken, Modifiers};
    use std::time::Duration;

    #[test]
    fn grouped_tables_parse() {
        let raw = r#"
[appearance]
theme = "day"
font_size = 20

[autoplay]
variant = "game"
tick_interval_ms = 20

[speed]
cap = 150.0

[keys]
toggle_autoplay = "ctrl+p"

[logging]
log_level = "info"
"#;
        let config = parse_config(raw).expect("grouped config");
        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.font_size, 20);
        assert_eq!(config.variant, JourneyVariant::Game);
        assert_eq!(config.tick_interval_ms, 20);
        assert_eq!(config.speed_cap, 150.0);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.hint_delay_ms, 2000);

        let engine = config.engine_config();
        assert_eq!(engine.scroll_step, 3.0);
        assert_eq!(engine.tick_interval, Duration::from_millis(20));
        let ctrl_p = KeyPress {
            key: KeyToken::Char('p'),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        };
        assert!(engine.bindings.toggle_autoplay.matches(&ctrl_p));
    }

    #[test]
    fn flat_layout_still_parses() {
        let raw = r#"
theme = "night"
scroll_step = 5.0
key_quit = "ctrl+q"
log_level = "warn"
"#;
        let config = parse_config(raw).expect("flat config");
        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.scroll_step, Some(5.0));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.engine_config().scroll_step, 5.0);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = parse_config("scroll_step = -1.0\nkey_pause = \"ctrl+\"\n")
            .expect("flat config with odd values");
        let engine = config.engine_config();
        assert_eq!(engine.scroll_step, 2.0);
        assert!(
            engine
                .bindings
                .pause
                .matches(&KeyPress::plain(KeyToken::Escape))
        );
    }

    #[test]
    fn serialized_config_reads_back() {
        let mut config = AppConfig::default();
        config.variant = JourneyVariant::Game;
        config.speed_decay_delay_ms = 250;
        let raw = serialize_config(&config).expect("serialize");
        assert!(raw.contains("[autoplay]"));
        let parsed = parse_config(&raw).expect("reparse");
        assert_eq!(parsed.variant, JourneyVariant::Game);
        assert_eq!(parsed.speed_decay_delay_ms, 250);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = load_config(Path::new("definitely/not/here.toml"));
        assert_eq!(config.total_distance, 100);
    }

    #[test]
    fn broken_toml_is_an_error() {
        assert!(parse_config("theme = ").is_err());
    }
}
