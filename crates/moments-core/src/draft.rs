//! In-progress values of the current step's inputs, before they are merged
//! into the accumulated form data.

use std::collections::{BTreeMap, BTreeSet};

use moments_domain::{FormData, Gender};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepDraft {
    values: BTreeMap<String, String>,
    invalid: BTreeSet<String>,
}

impl StepDraft {
    /// Seeds the inputs of `step` from the stored payload.
    pub fn from_data(step: u8, data: &FormData) -> Self {
        let mut values = BTreeMap::new();
        match step {
            1 => {
                let details = &data.step1;
                let gender = details.gender.map(Gender::as_str).unwrap_or_default();
                for (key, value) in [
                    ("fullName", details.full_name.as_str()),
                    ("preferredName", details.preferred_name.as_str()),
                    ("gender", gender),
                    ("dateBirth", details.date_birth.as_str()),
                    ("datePassing", details.date_passing.as_str()),
                    ("placeBirth", details.place_birth.as_str()),
                    ("placePassing", details.place_passing.as_str()),
                    ("causePassing", details.cause_passing.as_str()),
                ] {
                    values.insert(key.to_string(), value.to_string());
                }
            }
            2 => {
                values.insert("description".into(), data.step2.description.clone());
                values.insert("motto".into(), data.step2.motto.clone());
            }
            3 => {
                values.insert(
                    "familyActivities".into(),
                    data.step3.family_activities.clone(),
                );
            }
            _ => {}
        }
        Self {
            values,
            invalid: BTreeSet::new(),
        }
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn is_invalid(&self, key: &str) -> bool {
        self.invalid.contains(key)
    }

    pub fn mark_invalid(&mut self, key: &str) {
        self.invalid.insert(key.to_string());
    }

    pub fn clear_invalid(&mut self, key: &str) {
        self.invalid.remove(key);
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.invalid.iter().map(String::as_str)
    }

    /// Writes the draft back into `data`. Step 1 replaces its payload, step 2
    /// keeps the selected traits, step 3 only takes the activities text.
    pub fn merge_into(&self, step: u8, data: &mut FormData) {
        match step {
            1 => {
                let details = &mut data.step1;
                details.full_name = self.get("fullName").to_string();
                details.preferred_name = self.get("preferredName").to_string();
                details.gender = Gender::parse(self.get("gender"));
                details.date_birth = self.get("dateBirth").to_string();
                details.date_passing = self.get("datePassing").to_string();
                details.place_birth = self.get("placeBirth").to_string();
                details.place_passing = self.get("placePassing").to_string();
                details.cause_passing = self.get("causePassing").to_string();
            }
            2 => {
                data.step2.description = self.get("description").to_string();
                data.step2.motto = self.get("motto").to_string();
            }
            3 => {
                data.step3.family_activities = self.get("familyActivities").to_string();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step2_merge_keeps_traits() {
        let mut data = FormData::default();
        data.step2.traits = vec!["Kind".into()];
        let mut draft = StepDraft::from_data(2, &data);
        draft.set("description", "A devoted teacher.");
        draft.merge_into(2, &mut data);
        assert_eq!(data.step2.traits, vec!["Kind"]);
        assert_eq!(data.step2.description, "A devoted teacher.");
    }

    #[test]
    fn step1_round_trips_through_the_draft() {
        let mut data = FormData::default();
        data.step1.full_name = "Jane Roe".into();
        data.step1.gender = Some(Gender::Female);
        data.step1.date_birth = "01/01/1950".into();
        let draft = StepDraft::from_data(1, &data);
        assert_eq!(draft.get("gender"), "female");

        let mut merged = FormData::default();
        draft.merge_into(1, &mut merged);
        assert_eq!(merged.step1, data.step1);
    }

    #[test]
    fn invalid_flags_toggle() {
        let mut draft = StepDraft::default();
        draft.mark_invalid("fullName");
        assert!(draft.is_invalid("fullName"));
        draft.clear_invalid("fullName");
        assert_eq!(draft.invalid_fields().count(), 0);
    }
}
