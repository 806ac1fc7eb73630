//! Step renderer: maps a step and the form state to a typed view model.

use moments_domain::{Catalog, FormState, Relationship, TOTAL_STEPS};

use crate::draft::StepDraft;
use crate::fields::{step_fields, FieldDescriptor};

pub const RELATIONSHIP_TYPE_PLACEHOLDER: &str = "Select relationship";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingIcon {
    Heart,
    Star,
    Users,
}

impl HeadingIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingIcon::Heart => "heart",
            HeadingIcon::Star => "star",
            HeadingIcon::Users => "users",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepHeading {
    pub icon: Option<HeadingIcon>,
    pub kicker: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub descriptor: FieldDescriptor,
    pub value: String,
    pub invalid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitChipView {
    pub emoji: String,
    pub label: String,
    pub selected: bool,
    /// Unselected chips are disabled once the cap is reached.
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRowView {
    pub index: usize,
    pub name: String,
    /// Selected type (`"<icon> <label>"`) or the placeholder prompt.
    pub type_label: String,
    pub has_type: bool,
    pub deceased: bool,
}

impl RelationshipRowView {
    pub fn from_entry(index: usize, entry: &Relationship) -> Self {
        Self {
            index,
            name: entry.name.clone(),
            type_label: entry
                .type_display()
                .unwrap_or_else(|| RELATIONSHIP_TYPE_PLACEHOLDER.to_string()),
            has_type: entry.has_type(),
            deceased: entry.deceased,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepBody {
    PersonalDetails {
        fields: Vec<FieldView>,
    },
    Personality {
        traits: Vec<TraitChipView>,
        fields: Vec<FieldView>,
    },
    Relationships {
        rows: Vec<RelationshipRowView>,
        fields: Vec<FieldView>,
    },
    NotImplemented {
        step: u8,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressIndicator {
    pub percent: f64,
    /// Accessible numeric value, two decimals.
    pub value_now: String,
    pub label: String,
}

impl ProgressIndicator {
    pub fn for_step(step: u8) -> Self {
        let percent = f64::from(step) / f64::from(TOTAL_STEPS) * 100.0;
        Self {
            percent,
            value_now: format!("{percent:.2}"),
            label: format!("Step {step} of {TOTAL_STEPS}"),
        }
    }
}

/// Global elements refreshed after every render.
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    pub progress: ProgressIndicator,
    pub back_visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub step: u8,
    pub heading: StepHeading,
    pub body: StepBody,
    pub chrome: Chrome,
}

pub fn render_step(step: u8, state: &FormState, draft: &StepDraft, catalog: &Catalog) -> StepView {
    let body = match step {
        1 => StepBody::PersonalDetails {
            fields: field_views(step, draft),
        },
        2 => StepBody::Personality {
            traits: trait_chips(state, catalog),
            fields: field_views(step, draft),
        },
        3 => {
            let entries = &state.data.step3.relationships;
            let rows = if entries.is_empty() {
                vec![RelationshipRowView::from_entry(0, &Relationship::blank())]
            } else {
                entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| RelationshipRowView::from_entry(index, entry))
                    .collect()
            };
            StepBody::Relationships {
                rows,
                fields: field_views(step, draft),
            }
        }
        other => StepBody::NotImplemented { step: other },
    };

    StepView {
        step,
        heading: heading(step),
        body,
        chrome: Chrome {
            progress: ProgressIndicator::for_step(step),
            back_visible: step > 1,
        },
    }
}

/// Chip states for step 2. Used on their own when only the toggles change.
pub fn trait_chips(state: &FormState, catalog: &Catalog) -> Vec<TraitChipView> {
    let personality = &state.data.step2;
    let full = personality.is_full();
    catalog
        .traits
        .iter()
        .map(|entry| {
            let selected = personality.is_selected(&entry.label);
            TraitChipView {
                emoji: entry.emoji.clone(),
                label: entry.label.clone(),
                selected,
                disabled: full && !selected,
            }
        })
        .collect()
}

fn field_views(step: u8, draft: &StepDraft) -> Vec<FieldView> {
    step_fields(step)
        .iter()
        .map(|descriptor| FieldView {
            descriptor: *descriptor,
            value: draft.get(descriptor.key).to_string(),
            invalid: draft.is_invalid(descriptor.key),
        })
        .collect()
}

fn heading(step: u8) -> StepHeading {
    let kicker = format!("STEP {step} OF {TOTAL_STEPS}");
    let (icon, title, description) = match step {
        1 => (
            Some(HeadingIcon::Heart),
            "Capturing Essential Details",
            "Let's gather the key information to honor your loved one's life journey.",
        ),
        2 => (
            Some(HeadingIcon::Star),
            "Capturing Their Personality",
            "Let's create a story as unique as the life they lived.",
        ),
        3 => (
            Some(HeadingIcon::Users),
            "Family & Relationships",
            "Who were the most significant people in their life, such as family members, \
             partners, or close friends?",
        ),
        _ => (None, "Coming soon", "This step is not implemented yet."),
    };
    StepHeading {
        icon,
        kicker,
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_tracks_progress_and_back_visibility() {
        let state = FormState::default();
        let catalog = Catalog::standard();
        let first = render_step(1, &state, &StepDraft::default(), &catalog);
        assert!(!first.chrome.back_visible);
        assert_eq!(first.chrome.progress.value_now, "14.29");
        assert_eq!(first.chrome.progress.label, "Step 1 of 7");

        let last = render_step(7, &state, &StepDraft::default(), &catalog);
        assert!(last.chrome.back_visible);
        assert_eq!(last.chrome.progress.value_now, "100.00");
        assert_eq!(last.body, StepBody::NotImplemented { step: 7 });
    }

    #[test]
    fn full_trait_selection_disables_remaining_chips() {
        let mut state = FormState::default();
        for label in ["Kind", "Loyal", "Funny", "Honest", "Patient"] {
            state.data.step2.traits.push(label.to_string());
        }
        let chips = trait_chips(&state, &Catalog::standard());
        assert!(chips.iter().filter(|chip| chip.selected).all(|chip| !chip.disabled));
        assert!(chips.iter().filter(|chip| !chip.selected).all(|chip| chip.disabled));
    }

    #[test]
    fn empty_relationship_list_renders_one_placeholder_row() {
        let view = render_step(
            3,
            &FormState::default(),
            &StepDraft::default(),
            &Catalog::standard(),
        );
        match view.body {
            StepBody::Relationships { rows, .. } => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].type_label, RELATIONSHIP_TYPE_PLACEHOLDER);
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn fields_reflect_draft_and_invalid_flags() {
        let mut draft = StepDraft::default();
        draft.set("fullName", "Jane");
        draft.mark_invalid("gender");
        let view = render_step(1, &FormState::default(), &draft, &Catalog::standard());
        let StepBody::PersonalDetails { fields } = view.body else {
            panic!("expected personal details");
        };
        assert_eq!(fields[0].value, "Jane");
        assert!(fields.iter().any(|field| field.descriptor.key == "gender" && field.invalid));
    }
}
