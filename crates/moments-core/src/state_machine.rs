//! Step navigation, validation gating and session persistence.

use moments_domain::{is_valid_step, CatalogEntry, FormData, FormState, TOTAL_STEPS};
use tracing::{debug, warn};

use crate::date_picker::DateField;
use crate::draft::StepDraft;
use crate::error::CoreError;
use crate::fields::{find_field, FieldKind};
use crate::relationships::RelationshipEditor;
use crate::storage::{SessionStore, CURRENT_STEP_KEY, FORM_DATA_KEY};
use crate::validation::{validate_step, ValidationFailure};

/// Outcome of a `next` or `back` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Advanced(u8),
    Retreated(u8),
    /// `back` on the first step.
    Stayed,
    Blocked(ValidationFailure),
    /// `next` on the final step; carries everything collected.
    Completed(FormData),
}

pub struct FormStateMachine {
    state: FormState,
    draft: StepDraft,
    store: Box<dyn SessionStore>,
}

impl FormStateMachine {
    /// Starts a fresh session at step 1 without reading the store.
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        let mut machine = Self {
            state: FormState::default(),
            draft: StepDraft::default(),
            store,
        };
        machine.navigate_to_step(1);
        machine
    }

    /// Rebuilds the session from the store. Missing or corrupt entries fall
    /// back to defaults and are only logged.
    pub fn restore(store: Box<dyn SessionStore>) -> Self {
        let mut machine = Self {
            state: FormState::default(),
            draft: StepDraft::default(),
            store,
        };
        match machine.load_snapshot() {
            Ok(Some(state)) => machine.state = state,
            Ok(None) => debug!("no stored session, starting fresh"),
            Err(err) => warn!(error = %err, "discarding stored session"),
        }
        let step = machine.state.current_step;
        machine.state.current_step = 1;
        machine.navigate_to_step(i64::from(step));
        machine
    }

    fn load_snapshot(&self) -> Result<Option<FormState>, CoreError> {
        let Some(raw) = self.store.get_item(FORM_DATA_KEY)? else {
            return Ok(None);
        };
        let data: FormData = serde_json::from_str(&raw)?;
        let current_step = match self.store.get_item(CURRENT_STEP_KEY)? {
            Some(text) => match text.trim().parse::<i64>() {
                Ok(step) if is_valid_step(step) => step as u8,
                _ => {
                    warn!(value = %text, "stored step out of range, using step 1");
                    1
                }
            },
            None => 1,
        };
        Ok(Some(FormState { current_step, data }))
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn current_step(&self) -> u8 {
        self.state.current_step
    }

    pub fn data(&self) -> &FormData {
        &self.state.data
    }

    pub fn draft(&self) -> &StepDraft {
        &self.draft
    }

    /// Jumps to `step`, reseeding the draft. Out-of-range steps are ignored.
    pub fn navigate_to_step(&mut self, step: i64) -> bool {
        if !is_valid_step(step) {
            debug!(step, "ignoring navigation outside the flow");
            return false;
        }
        let step = step as u8;
        self.state.current_step = step;
        if step == 3 {
            self.ensure_relationship_placeholder();
        }
        self.draft = StepDraft::from_data(step, &self.state.data);
        debug!(step, "navigated");
        true
    }

    pub fn next(&mut self) -> Transition {
        let step = self.state.current_step;
        if let Err(failure) = validate_step(step, &mut self.draft, &self.state.data) {
            debug!(step, kind = ?failure.kind, "transition blocked");
            return Transition::Blocked(failure);
        }
        self.save_current_step();
        if step >= TOTAL_STEPS {
            self.persist();
            return Transition::Completed(self.state.data.clone());
        }
        self.navigate_to_step(i64::from(step) + 1);
        self.persist();
        Transition::Advanced(self.state.current_step)
    }

    /// Keeps partial edits without validating, then steps back. On the first
    /// step the edits are still saved.
    pub fn back(&mut self) -> Transition {
        let step = self.state.current_step;
        self.save_current_step();
        if step <= 1 {
            self.persist();
            return Transition::Stayed;
        }
        self.navigate_to_step(i64::from(step) - 1);
        self.persist();
        Transition::Retreated(self.state.current_step)
    }

    /// Merges the draft of the current step into the accumulated data.
    pub fn save_current_step(&mut self) {
        self.draft
            .merge_into(self.state.current_step, &mut self.state.data);
    }

    /// Writes the snapshot to the session store. Failures are only logged.
    pub fn persist(&mut self) {
        if let Err(err) = self.try_persist() {
            warn!(error = %err, "failed to persist session");
        }
    }

    fn try_persist(&mut self) -> Result<(), CoreError> {
        let data = serde_json::to_string(&self.state.data)?;
        self.store.set_item(FORM_DATA_KEY, &data)?;
        self.store
            .set_item(CURRENT_STEP_KEY, &self.state.current_step.to_string())?;
        Ok(())
    }

    /// Edits a draft field of the current step. Date fields are read-only here
    /// and choice fields only take one of their options.
    pub fn set_field(&mut self, key: &str, value: &str) -> bool {
        let Some(field) = find_field(self.state.current_step, key) else {
            return false;
        };
        if matches!(field.kind, FieldKind::Date) || !field.accepts(value) {
            return false;
        }
        self.draft.set(key, value);
        if !value.trim().is_empty() {
            self.draft.clear_invalid(key);
        }
        true
    }

    /// Value of a date field in the draft, as typed in the display format.
    pub fn date_value(&self, field: DateField) -> &str {
        self.draft.get(field.key())
    }

    /// Writes a confirmed picker date into the draft and clears its invalid flag.
    pub fn write_date(&mut self, field: DateField, value: &str) -> bool {
        if self.state.current_step != 1 {
            return false;
        }
        self.draft.set(field.key(), value);
        self.draft.clear_invalid(field.key());
        true
    }

    /// Toggles a trait on step 2. Returns `false` when refused by the cap.
    pub fn toggle_trait(&mut self, label: &str) -> bool {
        if self.state.current_step != 2 {
            return false;
        }
        let changed = self.state.data.step2.toggle_trait(label);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn add_relationship(&mut self) -> Option<usize> {
        if self.state.current_step != 3 {
            return None;
        }
        let index = self.editor().add();
        self.persist();
        Some(index)
    }

    pub fn remove_relationship(&mut self, index: usize) -> bool {
        self.edit_relationships(|editor| editor.remove(index))
    }

    pub fn set_relationship_name(&mut self, index: usize, name: &str) -> bool {
        self.edit_relationships(|editor| editor.set_name(index, name))
    }

    pub fn toggle_deceased(&mut self, index: usize) -> bool {
        self.edit_relationships(|editor| editor.toggle_deceased(index))
    }

    pub fn assign_relationship_type(&mut self, index: usize, entry: &CatalogEntry) -> bool {
        self.edit_relationships(|editor| editor.assign(index, entry))
    }

    pub fn assign_custom_relationship_type(&mut self, index: usize, label: &str) -> bool {
        self.edit_relationships(|editor| editor.assign_custom(index, label))
    }

    /// Keeps at least one row on step 3.
    pub fn ensure_relationship_placeholder(&mut self) -> bool {
        self.editor().ensure_placeholder()
    }

    /// Drops the stored session and starts over at step 1.
    pub fn reset(&mut self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to clear session store");
        }
        self.state = FormState::default();
        self.navigate_to_step(1);
    }

    fn editor(&mut self) -> RelationshipEditor<'_> {
        RelationshipEditor::new(&mut self.state.data.step3.relationships)
    }

    fn edit_relationships(
        &mut self,
        edit: impl FnOnce(&mut RelationshipEditor<'_>) -> bool,
    ) -> bool {
        if self.state.current_step != 3 {
            return false;
        }
        let changed = edit(&mut self.editor());
        if changed {
            self.persist();
        }
        changed
    }
}

impl std::fmt::Debug for FormStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormStateMachine")
            .field("state", &self.state)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySessionStore;

    fn machine() -> (FormStateMachine, MemorySessionStore) {
        let store = MemorySessionStore::new();
        (FormStateMachine::new(Box::new(store.clone())), store)
    }

    #[test]
    fn navigate_ignores_out_of_range_steps() {
        let (mut machine, _) = machine();
        assert!(machine.navigate_to_step(5));
        assert!(!machine.navigate_to_step(0));
        assert!(!machine.navigate_to_step(8));
        assert_eq!(machine.current_step(), 5);
    }

    #[test]
    fn back_on_first_step_stays_but_saves_edits() {
        let (mut machine, store) = machine();
        assert!(machine.set_field("fullName", "Jane Doe"));
        assert_eq!(machine.back(), Transition::Stayed);
        assert_eq!(machine.current_step(), 1);
        assert_eq!(machine.data().step1.full_name, "Jane Doe");
        assert_eq!(store.get_item(CURRENT_STEP_KEY).unwrap().as_deref(), Some("1"));
        let saved = store.get_item(FORM_DATA_KEY).unwrap().unwrap();
        assert!(saved.contains("\"fullName\":\"Jane Doe\""));
    }

    #[test]
    fn back_keeps_unvalidated_edits() {
        let (mut machine, store) = machine();
        machine.navigate_to_step(2);
        assert!(machine.set_field("motto", "Carpe diem"));
        assert_eq!(machine.back(), Transition::Retreated(1));
        assert_eq!(machine.data().step2.motto, "Carpe diem");
        assert_eq!(store.get_item(CURRENT_STEP_KEY).unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn date_fields_are_not_typed_into() {
        let (mut machine, _) = machine();
        assert!(!machine.set_field("dateBirth", "01/01/1950"));
        assert!(!machine.set_field("gender", "other"));
        assert!(machine.set_field("gender", "female"));
        assert!(machine.write_date(DateField::Birth, "01/01/1950"));
        assert_eq!(machine.date_value(DateField::Birth), "01/01/1950");
    }

    #[test]
    fn final_step_completes_with_collected_data() {
        let (mut machine, _) = machine();
        machine.navigate_to_step(7);
        match machine.next() {
            Transition::Completed(data) => assert_eq!(&data, machine.data()),
            other => panic!("unexpected transition {other:?}"),
        }
        assert_eq!(machine.current_step(), 7);
    }

    #[test]
    fn step3_synthesizes_placeholder_row() {
        let (mut machine, _) = machine();
        machine.navigate_to_step(3);
        assert_eq!(machine.data().step3.relationships.len(), 1);
        assert!(machine.remove_relationship(0));
        assert!(machine.data().step3.relationships.is_empty());
        assert!(machine.ensure_relationship_placeholder());
    }

    #[test]
    fn reset_clears_store_and_state() {
        let (mut machine, store) = machine();
        machine.navigate_to_step(2);
        machine.toggle_trait("Kind");
        assert!(store.get_item(FORM_DATA_KEY).unwrap().is_some());
        machine.reset();
        assert_eq!(machine.state(), &FormState::default());
        assert!(store.get_item(FORM_DATA_KEY).unwrap().is_none());
    }
}
