use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::Result;
use crate::fileio::open_read_write;

pub const DEFAULT_SELECTED_COLOR: &str = "#40c997";
pub const DEFAULT_COMPLETED_COLOR: &str = "#907af0";
pub const DEFAULT_DISABLED_COLOR: &str = "#777777";

/// Contents of `config.json`. Every field may be left out.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    styles: StylesFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StylesFile {
    selected_color: Option<String>,
    completed_color: Option<String>,
    disabled_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    pub selected: Color,
    pub completed: Color,
    pub disabled: Color,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            selected: default_color(DEFAULT_SELECTED_COLOR),
            completed: default_color(DEFAULT_COMPLETED_COLOR),
            disabled: default_color(DEFAULT_DISABLED_COLOR),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub styles: Styles,
}

impl Config {
    /// Read the config file, creating an empty one if absent. Only failing to
    /// open the file is an error; bad contents fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let mut handle = open_read_write(path)?;
        let mut text = String::new();
        if let Err(err) = handle.read_to_string(&mut text) {
            tracing::warn!(path = %path.display(), error = %err, "unreadable config, using defaults");
            return Ok(Self::default());
        }
        Ok(Self::parse(&text))
    }

    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<ConfigFile>(text) {
            Ok(file) => Self {
                styles: Styles {
                    selected: color_or(file.styles.selected_color, DEFAULT_SELECTED_COLOR),
                    completed: color_or(file.styles.completed_color, DEFAULT_COMPLETED_COLOR),
                    disabled: color_or(file.styles.disabled_color, DEFAULT_DISABLED_COLOR),
                },
            },
            Err(err) => {
                if !text.trim().is_empty() {
                    tracing::warn!(error = %err, "malformed config, using defaults");
                }
                Self::default()
            }
        }
    }
}

fn color_or(value: Option<String>, default: &str) -> Color {
    match value.as_deref().map(str::trim) {
        None | Some("") => default_color(default),
        Some(raw) => Color::from_str(raw).unwrap_or_else(|_| {
            tracing::warn!(color = raw, "unknown color, using default");
            default_color(default)
        }),
    }
}

fn default_color(hex: &str) -> Color {
    Color::from_str(hex).unwrap_or(Color::Reset)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn defaults_match_builtin_palette() {
        let styles = Styles::default();
        assert_eq!(styles.selected, Color::Rgb(0x40, 0xc9, 0x97));
        assert_eq!(styles.completed, Color::Rgb(0x90, 0x7a, 0xf0));
        assert_eq!(styles.disabled, Color::Rgb(0x77, 0x77, 0x77));
    }

    #[test]
    fn missing_fields_fall_back_individually() {
        let config = Config::parse(r##"{"styles": {"selectedColor": "#ff0000", "disabledColor": ""}}"##);

        assert_eq!(config.styles.selected, Color::Rgb(0xff, 0, 0));
        assert_eq!(config.styles.completed, Styles::default().completed);
        assert_eq!(config.styles.disabled, Styles::default().disabled);
    }

    #[test]
    fn named_colors_are_accepted() {
        let config = Config::parse(r#"{"styles": {"completedColor": "magenta"}}"#);
        assert_eq!(config.styles.completed, Color::Magenta);
    }

    #[test]
    fn malformed_json_uses_defaults() {
        assert_eq!(Config::parse("{ not json"), Config::default());
        assert_eq!(Config::parse(""), Config::default());
        assert_eq!(Config::parse(r#"{"styles": 3}"#), Config::default());
    }

    #[test]
    fn unknown_color_uses_that_fields_default() {
        let config = Config::parse(r#"{"styles": {"selectedColor": "not-a-color"}}"#);
        assert_eq!(config.styles.selected, Styles::default().selected);
    }

    #[test]
    fn load_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::load(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn load_reads_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r##"{"styles": {"disabledColor": "#101010"}}"##).unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.styles.disabled, Color::Rgb(0x10, 0x10, 0x10));
    }
}
