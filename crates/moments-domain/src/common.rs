//! Shared enums and constants for the intake form.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

/// Number of screens in the intake flow. Only the first three collect data.
pub const TOTAL_STEPS: u8 = 7;

/// Upper bound on personality traits selected in step 2.
pub const MAX_SELECTED_TRAITS: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Parses the stored token; anything else (including the empty string) is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `null`, `""` or a gender token. Unknown tokens are treated as unset.
pub(crate) fn deserialize_optional_gender<'de, D>(
    deserializer: D,
) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(Gender::parse))
}

/// Returns `true` when `step` addresses a screen of the flow.
pub fn is_valid_step(step: i64) -> bool {
    (1..=TOTAL_STEPS as i64).contains(&step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_parse_is_case_insensitive_and_rejects_blank() {
        assert_eq!(Gender::parse("Female"), Some(Gender::Female));
        assert_eq!(Gender::parse(" male "), Some(Gender::Male));
        assert_eq!(Gender::parse(""), None);
        assert_eq!(Gender::parse("other"), None);
    }

    #[test]
    fn step_bounds() {
        assert!(!is_valid_step(0));
        assert!(is_valid_step(1));
        assert!(is_valid_step(7));
        assert!(!is_valid_step(8));
    }
}
