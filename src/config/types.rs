// Configuration type definitions

use serde::Deserialize;

use crate::session::{Direction, ScrollConfig};

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        ClipboardConfig {
            backend: ClipboardBackend::Auto,
        }
    }
}

/// Scroll configuration section
///
/// Raw values as written in the file; validation (speed clamping) happens
/// when these are turned into a `ScrollConfig`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrollSettings {
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default = "default_loop", rename = "loop")]
    pub loop_at_end: bool,
}

fn default_speed() -> f64 {
    250.0
}

fn default_loop() -> bool {
    true
}

impl Default for ScrollSettings {
    fn default() -> Self {
        ScrollSettings {
            speed: default_speed(),
            direction: Direction::Down,
            loop_at_end: default_loop(),
        }
    }
}

impl ScrollSettings {
    /// Accept the settings, applying the uniform speed clamp.
    pub fn to_scroll_config(&self) -> ScrollConfig {
        ScrollConfig::new(self.speed, self.direction, self.loop_at_end)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scroll: ScrollSettings,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SPEED_MAX, SPEED_MIN};
    use proptest::prelude::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[scroll]
speed = 600
direction = "up"
loop = false

[clipboard]
backend = "osc52"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.scroll.speed, 600.0);
        assert_eq!(config.scroll.direction, Direction::Up);
        assert!(!config.scroll.loop_at_end);
        assert_eq!(config.clipboard.backend, ClipboardBackend::Osc52);
    }

    #[test]
    fn test_parse_clipboard_backends() {
        for (value, expected) in [
            ("auto", ClipboardBackend::Auto),
            ("system", ClipboardBackend::System),
            ("osc52", ClipboardBackend::Osc52),
        ] {
            let toml = format!("[clipboard]\nbackend = \"{}\"\n", value);
            let config: Config = toml::from_str(&toml).unwrap();
            assert_eq!(config.clipboard.backend, expected);
        }
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.scroll.speed, 250.0);
        assert_eq!(config.scroll.direction, Direction::Down);
        assert!(config.scroll.loop_at_end);
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    }

    #[test]
    fn test_empty_sections_use_defaults() {
        let config: Config = toml::from_str("[scroll]\n[clipboard]\n").unwrap();
        assert_eq!(config.scroll.speed, 250.0);
        assert!(config.scroll.loop_at_end);
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    }

    #[test]
    fn test_out_of_range_speed_parses_then_clamps() {
        // Parsing keeps the raw value; acceptance clamps it
        let config: Config = toml::from_str("[scroll]\nspeed = 50000\n").unwrap();
        assert_eq!(config.scroll.speed, 50_000.0);
        assert_eq!(config.scroll.to_scroll_config().speed, SPEED_MAX);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Any parsed scroll section produces an accepted config inside the
        // validation boundary, with direction and loop preserved.
        #[test]
        fn prop_settings_accept_in_range(
            speed in -1.0e5f64..1.0e5,
            heading_up: bool,
            loop_at_end: bool,
        ) {
            let direction = if heading_up { "up" } else { "down" };
            let toml_content = format!(
                "[scroll]\nspeed = {:.1}\ndirection = \"{}\"\nloop = {}\n",
                speed, direction, loop_at_end
            );
            let config: Config = toml::from_str(&toml_content).unwrap();
            let accepted = config.scroll.to_scroll_config();

            prop_assert!(accepted.speed >= SPEED_MIN && accepted.speed <= SPEED_MAX);
            prop_assert_eq!(accepted.loop_at_end, loop_at_end);
            prop_assert_eq!(
                accepted.direction,
                if heading_up { Direction::Up } else { Direction::Down }
            );
        }

        // Missing fields always fall back to the documented defaults.
        #[test]
        fn prop_missing_fields_use_defaults(
            include_section in prop::bool::ANY,
            include_speed in prop::bool::ANY,
        ) {
            let toml_content = if !include_section {
                String::new()
            } else if !include_speed {
                "[scroll]\n".to_string()
            } else {
                "[scroll]\nspeed = 600\n".to_string()
            };

            let config: Config = toml::from_str(&toml_content).unwrap();

            if !include_section || !include_speed {
                prop_assert_eq!(config.scroll.speed, 250.0);
            }
            prop_assert_eq!(config.scroll.direction, Direction::Down);
            prop_assert!(config.scroll.loop_at_end);
        }
    }
}
