use serde::{de::Deserializer, Deserialize, Serialize};
use std::{fmt, path::PathBuf};

use crate::ConfigError;

/// User-configurable shell preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    /// Pick up the stored form session on start. When `false` a new shell
    /// clears it instead.
    #[serde(default = "Config::default_true")]
    pub resume_session: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory holding the session file. Defaults to `<home>/session`.
    pub session_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Stylesheet root rewritten by `theme apply`. Defaults to `./style`.
    pub style_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            accessibility: AccessibilitySettings::default(),
            ui_color_enabled: true,
            resume_session: true,
            session_dir: None,
            style_root: None,
        }
    }
}

impl Config {
    /// Keys accepted by [`Config::set`].
    pub const KEYS: [&'static str; 8] = [
        "theme",
        "ui_color_enabled",
        "resume_session",
        "session_dir",
        "style_root",
        "accessibility.plain_output",
        "accessibility.high_contrast",
        "accessibility.screen_reader",
    ];

    fn default_true() -> bool {
        true
    }

    pub fn resolve_session_dir(&self, base: &std::path::Path) -> PathBuf {
        self.session_dir
            .clone()
            .unwrap_or_else(|| base.join("session"))
    }

    pub fn resolve_style_root(&self) -> PathBuf {
        self.style_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("style"))
    }

    /// Updates one setting from its textual form. Empty path values unset it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "theme" => {
                self.theme = Theme::parse(value).ok_or_else(|| invalid(key, value))?;
            }
            "ui_color_enabled" => self.ui_color_enabled = parse_flag(key, value)?,
            "resume_session" => self.resume_session = parse_flag(key, value)?,
            "session_dir" => self.session_dir = optional_path(value),
            "style_root" => self.style_root = optional_path(value),
            "accessibility.plain_output" => {
                self.accessibility.plain_output = parse_flag(key, value)?
            }
            "accessibility.high_contrast" => {
                self.accessibility.high_contrast = parse_flag(key, value)?
            }
            "accessibility.screen_reader" => {
                self.accessibility.screen_reader = parse_flag(key, value)?
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let path = |value: &Option<PathBuf>| {
            value
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "(default)".into())
        };
        vec![
            ("theme", self.theme.to_string()),
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
            ("resume_session", self.resume_session.to_string()),
            ("session_dir", path(&self.session_dir)),
            ("style_root", path(&self.style_root)),
            (
                "accessibility.plain_output",
                self.accessibility.plain_output.to_string(),
            ),
            (
                "accessibility.high_contrast",
                self.accessibility.high_contrast.to_string(),
            ),
            (
                "accessibility.screen_reader",
                self.accessibility.screen_reader.to_string(),
            ),
        ]
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn optional_path(value: &str) -> Option<PathBuf> {
    (!value.is_empty()).then(|| PathBuf::from(value))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    #[default]
    Iconic,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(Theme::Plain),
            "iconic" => Some(Theme::Iconic),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub screen_reader: bool,
}
