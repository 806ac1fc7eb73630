//! Shape of `theme.config.json`. Every section is optional.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub colors: BTreeMap<String, String>,
    pub brand: BrandConfig,
    pub typography: TypographyConfig,
    pub components: ComponentsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TypographyConfig {
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    pub display_font: Option<String>,
    pub headings: BTreeMap<String, String>,
    pub body: BTreeMap<String, String>,
    pub label: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    pub button: ButtonConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub tonal: BTreeMap<String, String>,
    pub size: Option<SizeSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub size: Option<SizeSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SizeSet {
    pub default: Option<SizeSpec>,
    pub small: Option<SizeSpec>,
    pub large: Option<SizeSpec>,
}

/// Either a bare height or a `{height, font-size}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    Height(String),
    Full {
        height: Option<String>,
        #[serde(rename = "font-size")]
        font_size: Option<String>,
    },
}

impl SizeSpec {
    pub fn height(&self) -> Option<&str> {
        match self {
            SizeSpec::Height(height) => Some(height),
            SizeSpec::Full { height, .. } => height.as_deref(),
        }
    }

    /// Bare heights leave the font size untouched.
    pub fn font_size(&self) -> Option<&str> {
        match self {
            SizeSpec::Height(_) => None,
            SizeSpec::Full { font_size, .. } => font_size.as_deref(),
        }
    }
}
