// Configuration module for autoscroll
// Handles loading and parsing configuration from ~/.config/autoscroll/config.toml

mod types;

pub use types::{ClipboardBackend, Config, ScrollSettings};

use std::fs;
use std::path::PathBuf;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/autoscroll/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!(
                "Config parsed successfully: {} px/s, {:?}",
                config.scroll.speed,
                config.scroll.direction
            );
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/autoscroll/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("autoscroll")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Direction;

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert_eq!(config.scroll.speed, 250.0);
        assert_eq!(config.scroll.direction, Direction::Down);
        assert!(config.scroll.loop_at_end);
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    }

    #[test]
    fn test_config_path_location() {
        let path = get_config_path();
        let path_str = path.to_string_lossy();
        assert!(
            path_str.ends_with("autoscroll/config.toml")
                || path_str.ends_with("autoscroll\\config.toml")
        );
    }

    #[test]
    fn test_malformed_toml_fails_to_parse() {
        let toml = "[scroll\nspeed = 100"; // Missing closing bracket
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err(), "Malformed TOML should fail to parse");
    }

    #[test]
    fn test_unquoted_direction_fails_to_parse() {
        let toml = "[scroll]\ndirection = down";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err(), "Malformed TOML should fail to parse");
    }

    use proptest::prelude::*;

    // Any invalid direction value is rejected by serde, which load_config
    // turns into a defaults-plus-warning result.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_invalid_direction_fallback(
            invalid in "[a-z]{3,10}".prop_filter(
                "not valid",
                |s| !["down", "up"].contains(&s.as_str())
            )
        ) {
            let toml_content = format!(r#"
[scroll]
direction = "{}"
"#, invalid);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_err(), "Invalid direction should fail to parse");

            let default_config = Config::default();
            prop_assert_eq!(default_config.scroll.direction, Direction::Down);
        }
    }
}
