//! Accumulated form data, keyed by step, and the navigable form state.

use serde::{Deserialize, Serialize};

use crate::common::{deserialize_optional_gender, Gender, MAX_SELECTED_TRAITS};
use crate::relationship::Relationship;

/// Step 1: essential details. Dates are kept in the `dd/mm/yyyy` display format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalDetails {
    pub full_name: String,
    pub preferred_name: String,
    #[serde(deserialize_with = "deserialize_optional_gender")]
    pub gender: Option<Gender>,
    pub date_birth: String,
    pub date_passing: String,
    pub place_birth: String,
    pub place_passing: String,
    pub cause_passing: String,
}

/// Step 2: personality.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Personality {
    pub traits: Vec<String>,
    pub description: String,
    pub motto: String,
}

impl Personality {
    pub fn is_selected(&self, label: &str) -> bool {
        self.traits.iter().any(|selected| selected == label)
    }

    pub fn is_full(&self) -> bool {
        self.traits.len() >= MAX_SELECTED_TRAITS
    }

    /// Toggles membership of `label`. Returns `false` when a selection was
    /// refused because the cap is reached.
    pub fn toggle_trait(&mut self, label: &str) -> bool {
        if let Some(position) = self.traits.iter().position(|selected| selected == label) {
            self.traits.remove(position);
            true
        } else if self.is_full() {
            false
        } else {
            self.traits.push(label.to_string());
            true
        }
    }
}

/// Step 3: family and relationships.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FamilyCircle {
    pub relationships: Vec<Relationship>,
    pub family_activities: String,
}

/// Everything collected so far, keyed by step name when serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormData {
    pub step1: PersonalDetails,
    pub step2: Personality,
    pub step3: FamilyCircle,
}

/// Navigable position plus the accumulated data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormState {
    pub current_step: u8,
    pub data: FormData,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            current_step: 1,
            data: FormData::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_trait_caps_selection_and_keeps_order() {
        let mut personality = Personality::default();
        for label in ["Kind", "Loyal", "Humble", "Honest", "Patient"] {
            assert!(personality.toggle_trait(label));
        }
        assert!(!personality.toggle_trait("Creative"));
        assert_eq!(personality.traits.len(), MAX_SELECTED_TRAITS);

        assert!(personality.toggle_trait("Loyal"));
        assert!(personality.toggle_trait("Loyal"));
        assert_eq!(
            personality.traits,
            vec!["Kind", "Humble", "Honest", "Patient", "Loyal"]
        );
    }

    #[test]
    fn form_data_uses_step_keys_and_camel_case() {
        let mut data = FormData::default();
        data.step1.full_name = "John Arthur Doe".into();
        data.step1.gender = Some(Gender::Male);
        data.step3.family_activities = "Sunday pancakes".into();
        let json = serde_json::to_value(&data).expect("serialize");
        assert_eq!(json["step1"]["fullName"], "John Arthur Doe");
        assert_eq!(json["step1"]["gender"], "male");
        assert_eq!(json["step3"]["familyActivities"], "Sunday pancakes");
        assert!(json["step2"]["traits"].as_array().is_some());
    }

    #[test]
    fn blank_gender_and_missing_keys_deserialize_to_defaults() {
        let raw = r#"{"step1":{"fullName":"Jane","gender":""},"step2":{"traits":["Kind"]}}"#;
        let data: FormData = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(data.step1.full_name, "Jane");
        assert_eq!(data.step1.gender, None);
        assert_eq!(data.step2.traits, vec!["Kind"]);
        assert!(data.step3.relationships.is_empty());
    }
}
