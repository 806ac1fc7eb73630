//! Rewrites the stylesheet custom properties from `theme.config.json`.
//!
//! Files touched under the style root:
//! `variables/colors.css`, `variables/typography.css`,
//! `components/buttons.css` and `components/forms.css`.

mod config;
mod css;

use std::{
    fs,
    path::{Path, PathBuf},
};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

pub use config::{SizeSet, SizeSpec, ThemeConfig};

/// How much darker the hover brand shade is.
pub const BRAND_HOVER_DARKEN: f64 = 0.15;

const COLORS_FILE: &str = "variables/colors.css";
const TYPOGRAPHY_FILE: &str = "variables/typography.css";
const BUTTONS_FILE: &str = "components/buttons.css";
const FORMS_FILE: &str = "components/forms.css";

const SEMANTIC_COLORS: &[(&str, &str)] = &[
    ("--txt-dark", "var(--neutral-900)"),
    ("--txt-default", "var(--neutral-700)"),
    ("--txt-light", "var(--neutral-500)"),
    ("--txt-brand", "var(--brand-700)"),
    ("--txt-disable", "var(--neutral-400)"),
    ("--txt-white", "#ffffff"),
    ("--bg-default", "#ffffff"),
    ("--bg-brand", "var(--brand-700)"),
    ("--bg-light", "var(--neutral-50)"),
    ("--bg-white", "#ffffff"),
    ("--bg-brand-light", "var(--brand-50)"),
    ("--bd-default", "var(--neutral-400)"),
    ("--bd-light", "var(--neutral-300)"),
    ("--bd-brand", "var(--brand-700)"),
    ("--bd-white", "#ffffff"),
];

static HEX_COLOR: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").ok());

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{0}` is not a six-digit hex color")]
    InvalidColor(String),
    #[error("invalid rewrite pattern: {0}")]
    Pattern(String),
}

/// Summary of an applied theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeReport {
    pub files: Vec<PathBuf>,
    /// Declarations rewritten across all files.
    pub updated: usize,
}

/// Darkens `hex` channel-wise by `amount` (0..1), returning lowercase `#rrggbb`.
pub fn darken_color(hex: &str, amount: f64) -> Result<String, ThemeError> {
    let caps = HEX_COLOR
        .as_ref()
        .and_then(|pattern| pattern.captures(hex.trim()))
        .ok_or_else(|| ThemeError::InvalidColor(hex.to_string()))?;
    let mut out = String::from("#");
    for index in 1..=3 {
        let channel = u8::from_str_radix(&caps[index], 16)
            .map_err(|_| ThemeError::InvalidColor(hex.to_string()))?;
        let darkened = (f64::from(channel) * (1.0 - amount)).round().clamp(0.0, 255.0) as u8;
        out.push_str(&format!("{darkened:02x}"));
    }
    Ok(out)
}

pub fn load_config(path: &Path) -> Result<ThemeConfig, ThemeError> {
    let raw = read(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Applies `config_path` to the stylesheets under `style_root`.
pub fn apply_theme(config_path: &Path, style_root: &Path) -> Result<ThemeReport, ThemeError> {
    let config = load_config(config_path)?;
    apply_config(&config, style_root)
}

pub fn apply_config(config: &ThemeConfig, style_root: &Path) -> Result<ThemeReport, ThemeError> {
    info!(root = %style_root.display(), "updating theme");
    let mut report = ThemeReport::default();

    let colors = primitive_colors(config)?
        .into_iter()
        .chain(
            SEMANTIC_COLORS
                .iter()
                .map(|(name, value)| (*name, value.to_string())),
        )
        .collect::<Vec<_>>();
    rewrite_variables(&style_root.join(COLORS_FILE), &colors, &mut report)?;
    rewrite_variables(
        &style_root.join(TYPOGRAPHY_FILE),
        &typography(config),
        &mut report,
    )?;

    if let Some(sizes) = &config.components.button.size {
        let rules = [
            (".btn", &sizes.default),
            (".btn--sm", &sizes.small),
            (".btn--lg", &sizes.large),
        ];
        let mut edits = Vec::new();
        for (selector, spec) in rules {
            push_size_edits(&mut edits, selector, spec.as_ref());
        }
        rewrite_rules(&style_root.join(BUTTONS_FILE), &edits, &mut report)?;
    }

    if let Some(sizes) = &config.components.input.size {
        let rules = [
            (".input", &sizes.default),
            (".input--sm", &sizes.small),
            (".input--lg", &sizes.large),
        ];
        let mut edits = Vec::new();
        for (selector, spec) in rules {
            push_size_edits(&mut edits, selector, spec.as_ref());
        }
        if let Some(height) = sizes.default.as_ref().and_then(SizeSpec::height) {
            edits.push((".select", "height", height.to_string()));
            edits.push((".textarea", "min-height", height.to_string()));
        }
        rewrite_rules(&style_root.join(FORMS_FILE), &edits, &mut report)?;
    }

    info!(updated = report.updated, files = report.files.len(), "theme updated");
    Ok(report)
}

fn primitive_colors(config: &ThemeConfig) -> Result<Vec<(&'static str, String)>, ThemeError> {
    let color = |key: &str| config.colors.get(key).cloned();
    let tonal = |key: &str| config.components.button.tonal.get(key).cloned();
    let (brand, brand_hover) = match config.brand.color.as_deref().map(str::trim) {
        Some(brand) if !brand.is_empty() => {
            (Some(brand.to_string()), Some(darken_color(brand, BRAND_HOVER_DARKEN)?))
        }
        _ => (None, None),
    };
    let entries = [
        ("--neutral-900", color("text-dark")),
        ("--neutral-700", color("text-default")),
        ("--neutral-500", color("text-light")),
        ("--neutral-400", color("text-disable")),
        ("--neutral-300", color("border-light")),
        ("--neutral-50", color("bg-light")),
        ("--brand-700", brand),
        ("--brand-800", brand_hover),
        ("--brand-50", color("bg-brand-light")),
        ("--brand-100", tonal("background-color")),
        ("--brand-200", tonal("hover-background-color")),
    ];
    Ok(non_empty(entries))
}

fn typography(config: &ThemeConfig) -> Vec<(&'static str, String)> {
    let typo = &config.typography;
    let stack = |font: &Option<String>| {
        font.as_ref()
            .map(|font| format!("'{font}', system-ui, sans-serif"))
    };
    let heading = |level: &str| typo.headings.get(level).cloned();
    let body = |size: &str| typo.body.get(size).cloned();
    non_empty([
        ("--heading-font", stack(&typo.heading_font)),
        ("--default-font", stack(&typo.body_font)),
        ("--display-font", stack(&typo.display_font)),
        ("--fs-h1", heading("h1")),
        ("--fs-h2", heading("h2")),
        ("--fs-h3", heading("h3")),
        ("--fs-h4", heading("h4")),
        ("--fs-h5", heading("h5")),
        ("--fs-h6", heading("h6")),
        ("--fs-large", body("large")),
        ("--fs-default", body("default")),
        ("--fs-small", body("small")),
        ("--fs-label", typo.label.clone()),
        ("--fs-caption", typo.caption.clone()),
    ])
}

fn non_empty<const N: usize>(
    entries: [(&'static str, Option<String>); N],
) -> Vec<(&'static str, String)> {
    entries
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .filter(|value| !value.trim().is_empty())
                .map(|value| (name, value))
        })
        .collect()
}

fn push_size_edits(
    edits: &mut Vec<(&'static str, &'static str, String)>,
    selector: &'static str,
    spec: Option<&SizeSpec>,
) {
    let Some(spec) = spec else { return };
    if let Some(height) = spec.height() {
        edits.push((selector, "height", height.to_string()));
    }
    if let Some(font_size) = spec.font_size() {
        edits.push((selector, "font-size", font_size.to_string()));
    }
}

fn rewrite_variables(
    path: &Path,
    entries: &[(&str, String)],
    report: &mut ThemeReport,
) -> Result<(), ThemeError> {
    let mut content = read(path)?;
    for (variable, value) in entries {
        let (updated, changed) = css::update_variable(&content, variable, value)?;
        if changed {
            debug!(variable, value = %value, "variable updated");
            report.updated += 1;
        }
        content = updated;
    }
    write(path, &content, report)
}

fn rewrite_rules(
    path: &Path,
    edits: &[(&str, &str, String)],
    report: &mut ThemeReport,
) -> Result<(), ThemeError> {
    let mut content = read(path)?;
    for (selector, property, value) in edits {
        let (updated, changed) = css::update_rule_property(&content, selector, property, value)?;
        if changed {
            debug!(selector, property, value = %value, "rule updated");
            report.updated += 1;
        }
        content = updated;
    }
    write(path, &content, report)
}

fn read(path: &Path) -> Result<String, ThemeError> {
    fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, content: &str, report: &mut ThemeReport) -> Result<(), ThemeError> {
    fs::write(path, content).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    report.files.push(path.to_path_buf());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_matches_rounded_channels() {
        // 0x3b * 0.85 = 50.15, 0x82 * 0.85 = 110.5, 0xf6 * 0.85 = 209.1
        assert_eq!(darken_color("#3b82f6", 0.15).unwrap(), "#326fd1");
        assert_eq!(darken_color("FFFFFF", 0.15).unwrap(), "#d9d9d9");
        assert!(matches!(
            darken_color("#fff", 0.15),
            Err(ThemeError::InvalidColor(_))
        ));
    }

    #[test]
    fn size_specs_accept_both_shapes() {
        let sizes: SizeSet = serde_json::from_str(
            r#"{"default": "44px", "small": {"height": "32px", "font-size": "0.8rem"}}"#,
        )
        .unwrap();
        let default = sizes.default.unwrap();
        assert_eq!(default.height(), Some("44px"));
        assert_eq!(default.font_size(), None);
        assert_eq!(sizes.small.unwrap().font_size(), Some("0.8rem"));
        assert!(sizes.large.is_none());
    }
}
