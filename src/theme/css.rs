//! Regex rewrites of custom-property values and rule declarations.

use regex::{Captures, Regex};

use super::ThemeError;

/// Replaces the value of every `variable: value;` declaration. Returns the new
/// text and whether anything matched.
pub fn update_variable(
    content: &str,
    variable: &str,
    value: &str,
) -> Result<(String, bool), ThemeError> {
    let pattern = format!(r"({}:\s*)([^;]+)(;)", regex::escape(variable));
    substitute(content, &pattern, value)
}

/// Replaces `property` inside the rule opened by `selector`.
pub fn update_rule_property(
    content: &str,
    selector: &str,
    property: &str,
    value: &str,
) -> Result<(String, bool), ThemeError> {
    let pattern = format!(
        r"({}\s*\{{[^}}]*?(?:^|[\s;{{]){}:\s*)([^;\n]+)(;[^}}]*\}})",
        regex::escape(selector),
        regex::escape(property)
    );
    substitute(content, &pattern, value)
}

fn substitute(content: &str, pattern: &str, value: &str) -> Result<(String, bool), ThemeError> {
    let regex = Regex::new(pattern).map_err(|err| ThemeError::Pattern(err.to_string()))?;
    if !regex.is_match(content) {
        return Ok((content.to_string(), false));
    }
    let replaced = regex.replace_all(content, |caps: &Captures<'_>| {
        format!("{}{}{}", &caps[1], value, &caps[3])
    });
    Ok((replaced.into_owned(), true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_values_are_replaced_in_place() {
        let css = ":root {\n  --brand-700: #123456;\n  --brand-50: #fafafa;\n}\n";
        let (updated, changed) = update_variable(css, "--brand-700", "#ff0000").unwrap();
        assert!(changed);
        assert!(updated.contains("--brand-700: #ff0000;"));
        assert!(updated.contains("--brand-50: #fafafa;"));
    }

    #[test]
    fn references_are_not_mistaken_for_declarations() {
        let css = "--txt-brand: var(--brand-700);\n";
        let (updated, changed) = update_variable(css, "--brand-700", "#000000").unwrap();
        assert!(!changed);
        assert_eq!(updated, css);
    }

    #[test]
    fn rule_property_stays_inside_its_rule() {
        let css = ".btn {\n  min-height: 2rem;\n  height: 40px;\n}\n\
                   .btn--sm {\n  height: 32px;\n}\n";
        let (updated, changed) = update_rule_property(css, ".btn", "height", "48px").unwrap();
        assert!(changed);
        assert!(updated.contains("min-height: 2rem;"));
        assert!(updated.contains("  height: 48px;"));
        assert!(updated.contains(".btn--sm {\n  height: 32px;"));
    }

    #[test]
    fn missing_rule_is_left_alone() {
        let css = ".card { padding: 1rem; }";
        let (updated, changed) =
            update_rule_property(css, ".textarea", "min-height", "6rem").unwrap();
        assert!(!changed);
        assert_eq!(updated, css);
    }
}
