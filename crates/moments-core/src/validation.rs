//! Per-step validation. Failures are values surfaced to the UI, never errors.

use std::fmt;

use moments_domain::FormData;

use crate::dates::{is_before, parse_display};
use crate::draft::StepDraft;
use crate::fields::step_fields;

pub const MISSING_REQUIRED_MESSAGE: &str = "Please fill in all required fields";
pub const DATE_ORDER_MESSAGE: &str = "Date of passing must be after date of birth";
pub const MISSING_TRAIT_MESSAGE: &str = "Please select at least one personality trait";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    MissingRequired,
    DateOrder,
    MissingTrait,
}

/// Blocking notice returned when a step may not be left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub kind: ValidationKind,
    pub message: String,
    pub invalid_fields: Vec<String>,
}

impl ValidationFailure {
    fn new(kind: ValidationKind, message: &str, invalid_fields: Vec<String>) -> Self {
        Self {
            kind,
            message: message.to_string(),
            invalid_fields,
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the draft of `step` against the accumulated `data`.
///
/// Required fields (step 2's description among them) are checked first and
/// flagged invalid on the draft. The step rules run once they are all present.
pub fn validate_step(
    step: u8,
    draft: &mut StepDraft,
    data: &FormData,
) -> Result<(), ValidationFailure> {
    let mut missing = Vec::new();
    for field in step_fields(step).iter().filter(|field| field.required) {
        if draft.get(field.key).trim().is_empty() {
            draft.mark_invalid(field.key);
            missing.push(field.key.to_string());
        } else {
            draft.clear_invalid(field.key);
        }
    }
    if !missing.is_empty() {
        return Err(ValidationFailure::new(
            ValidationKind::MissingRequired,
            MISSING_REQUIRED_MESSAGE,
            missing,
        ));
    }

    match step {
        1 => {
            let birth = parse_display(draft.get("dateBirth"));
            let passing = parse_display(draft.get("datePassing"));
            if let (Some(birth), Some(passing)) = (birth, passing) {
                if is_before(passing, birth) {
                    draft.mark_invalid("datePassing");
                    return Err(ValidationFailure::new(
                        ValidationKind::DateOrder,
                        DATE_ORDER_MESSAGE,
                        vec!["datePassing".to_string()],
                    ));
                }
            }
            Ok(())
        }
        2 => {
            if data.step2.traits.is_empty() {
                return Err(ValidationFailure::new(
                    ValidationKind::MissingTrait,
                    MISSING_TRAIT_MESSAGE,
                    Vec::new(),
                ));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_step1(birth: &str, passing: &str) -> StepDraft {
        let mut draft = StepDraft::default();
        draft.set("fullName", "John Arthur Doe");
        draft.set("gender", "male");
        draft.set("dateBirth", birth);
        draft.set("datePassing", passing);
        draft.set("placeBirth", "Houston, Texas");
        draft.set("placePassing", "Chicago, IL");
        draft
    }

    #[test]
    fn whitespace_only_required_fields_fail() {
        let mut draft = complete_step1("01/01/2000", "02/01/2000");
        draft.set("placeBirth", "   ");
        let failure = validate_step(1, &mut draft, &FormData::default()).unwrap_err();
        assert_eq!(failure.kind, ValidationKind::MissingRequired);
        assert_eq!(failure.invalid_fields, vec!["placeBirth"]);
        assert!(draft.is_invalid("placeBirth"));
    }

    #[test]
    fn passing_before_birth_is_rejected() {
        let mut draft = complete_step1("01/01/2000", "31/12/1999");
        let failure = validate_step(1, &mut draft, &FormData::default()).unwrap_err();
        assert_eq!(failure.kind, ValidationKind::DateOrder);
        assert_eq!(failure.message, DATE_ORDER_MESSAGE);
    }

    #[test]
    fn same_day_and_unparseable_dates_pass_ordering() {
        let mut draft = complete_step1("01/01/2000", "01/01/2000");
        assert!(validate_step(1, &mut draft, &FormData::default()).is_ok());

        let mut draft = complete_step1("someday", "31/12/1999");
        assert!(validate_step(1, &mut draft, &FormData::default()).is_ok());
    }

    #[test]
    fn step2_requires_a_trait() {
        let mut data = FormData::default();
        let mut draft = StepDraft::default();
        draft.set("description", "Always laughing.");
        let failure = validate_step(2, &mut draft, &data).unwrap_err();
        assert_eq!(failure.kind, ValidationKind::MissingTrait);

        data.step2.traits.push("Funny".into());
        assert!(validate_step(2, &mut draft, &data).is_ok());
    }

    #[test]
    fn step3_always_passes() {
        let mut draft = StepDraft::default();
        assert!(validate_step(3, &mut draft, &FormData::default()).is_ok());
    }
}
