//! Command dispatch: the closed set of UI operations the core understands.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use moments_domain::{Catalog, FormData, FormState};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::calendar::CalendarMonth;
use crate::date_picker::{CalendarAction, DateField, DatePickerController};
use crate::relationships::{TypeOption, TypePicker, TypePickerView};
use crate::render::{render_step, StepView};
use crate::state_machine::{FormStateMachine, Transition};
use crate::storage::SessionStore;
use crate::time::Clock;
use crate::validation::ValidationFailure;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Next,
    Back,
    SetField { key: String, value: String },
    ToggleTrait(String),
    AddRelationship,
    RemoveRelationship(usize),
    SetRelationshipName(usize, String),
    ToggleDeceased(usize),
    OpenTypePicker(usize),
    SearchTypePicker(String),
    ChooseRelationshipType(TypeOption),
    CloseTypePicker,
    OpenDatePicker(DateField),
    NavigateCalendar(CalendarAction),
    SelectDay(NaiveDate),
    SelectToday,
    ConfirmDate,
    CloseDatePicker,
}

/// What the UI should refresh after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Whole step re-rendered (navigation or structural list change).
    StepRendered(u8),
    TraitsUpdated,
    FieldUpdated(String),
    RelationshipUpdated(usize),
    TypePickerUpdated,
    TypePickerClosed,
    DatePickerUpdated,
    DatePickerClosed(DateField),
    ValidationFailed(ValidationFailure),
    Completed(Submission),
    /// Silently rejected: out-of-range index, disabled day, capped trait.
    Ignored,
}

/// Accumulated data handed over when the last step is passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub data: FormData,
}

/// Owns the form state machine and the transient picker states.
pub struct IntakeController {
    machine: FormStateMachine,
    date_picker: DatePickerController,
    type_picker: Option<TypePicker>,
    catalog: Catalog,
    clock: Arc<dyn Clock>,
}

impl IntakeController {
    pub fn new(machine: FormStateMachine, catalog: Catalog, clock: Arc<dyn Clock>) -> Self {
        let date_picker = DatePickerController::new(clock.today());
        Self {
            machine,
            date_picker,
            type_picker: None,
            catalog,
            clock,
        }
    }

    /// Restores the previous session from `store`, or starts fresh.
    pub fn restore(store: Box<dyn SessionStore>, catalog: Catalog, clock: Arc<dyn Clock>) -> Self {
        Self::new(FormStateMachine::restore(store), catalog, clock)
    }

    pub fn fresh(store: Box<dyn SessionStore>, catalog: Catalog, clock: Arc<dyn Clock>) -> Self {
        Self::new(FormStateMachine::new(store), catalog, clock)
    }

    pub fn state(&self) -> &FormState {
        self.machine.state()
    }

    pub fn machine(&self) -> &FormStateMachine {
        &self.machine
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_step(&self) -> u8 {
        self.machine.current_step()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn render(&self) -> StepView {
        render_step(
            self.machine.current_step(),
            self.machine.state(),
            self.machine.draft(),
            &self.catalog,
        )
    }

    /// Calendar of the open date picker.
    pub fn calendar(&self) -> Option<CalendarMonth> {
        self.date_picker
            .is_open()
            .then(|| self.date_picker.calendar(self.clock.today()))
    }

    pub fn date_picker(&self) -> &DatePickerController {
        &self.date_picker
    }

    pub fn type_picker_view(&self) -> Option<TypePickerView> {
        self.type_picker
            .as_ref()
            .map(|picker| picker.view(&self.catalog))
    }

    /// Starts over at step 1 with an empty store.
    pub fn reset(&mut self) -> FormEvent {
        self.close_pickers();
        self.machine.reset();
        FormEvent::StepRendered(1)
    }

    pub fn dispatch(&mut self, command: FormCommand) -> FormEvent {
        debug!(?command, step = self.machine.current_step(), "dispatch");
        match command {
            FormCommand::Next => self.next(),
            FormCommand::Back => match self.machine.back() {
                Transition::Retreated(step) => self.step_changed(step),
                _ => FormEvent::Ignored,
            },
            FormCommand::SetField { key, value } => {
                if self.machine.set_field(&key, &value) {
                    FormEvent::FieldUpdated(key)
                } else {
                    FormEvent::Ignored
                }
            }
            FormCommand::ToggleTrait(label) => self.toggle_trait(&label),
            FormCommand::AddRelationship => match self.machine.add_relationship() {
                Some(_) => self.relationships_changed(),
                None => FormEvent::Ignored,
            },
            FormCommand::RemoveRelationship(index) => {
                if self.machine.remove_relationship(index) {
                    self.machine.ensure_relationship_placeholder();
                    self.relationships_changed()
                } else {
                    FormEvent::Ignored
                }
            }
            FormCommand::SetRelationshipName(index, name) => {
                if self.machine.set_relationship_name(index, &name) {
                    FormEvent::RelationshipUpdated(index)
                } else {
                    FormEvent::Ignored
                }
            }
            FormCommand::ToggleDeceased(index) => {
                if self.machine.toggle_deceased(index) {
                    FormEvent::RelationshipUpdated(index)
                } else {
                    FormEvent::Ignored
                }
            }
            FormCommand::OpenTypePicker(index) => {
                let in_range = self.machine.current_step() == 3
                    && index < self.machine.data().step3.relationships.len();
                if in_range {
                    // Only one selector is open at a time.
                    self.type_picker = Some(TypePicker::new(index));
                    FormEvent::TypePickerUpdated
                } else {
                    FormEvent::Ignored
                }
            }
            FormCommand::SearchTypePicker(query) => match self.type_picker.as_mut() {
                Some(picker) => {
                    picker.query = query;
                    FormEvent::TypePickerUpdated
                }
                None => FormEvent::Ignored,
            },
            FormCommand::ChooseRelationshipType(option) => self.choose_type(option),
            FormCommand::CloseTypePicker => match self.type_picker.take() {
                Some(_) => FormEvent::TypePickerClosed,
                None => FormEvent::Ignored,
            },
            FormCommand::OpenDatePicker(field) => {
                if self.machine.current_step() != 1 {
                    return FormEvent::Ignored;
                }
                let target = self.machine.date_value(field).to_string();
                let sibling = self.machine.date_value(field.sibling()).to_string();
                self.date_picker
                    .open(field, &target, &sibling, self.clock.today());
                FormEvent::DatePickerUpdated
            }
            FormCommand::NavigateCalendar(action) => {
                picker_event(self.date_picker.navigate(action))
            }
            FormCommand::SelectDay(date) => picker_event(self.date_picker.select_day(date)),
            FormCommand::SelectToday => {
                let today = self.clock.today();
                picker_event(self.date_picker.select_today(today))
            }
            FormCommand::ConfirmDate => match self.date_picker.confirm() {
                Some(selection) => {
                    self.machine.write_date(selection.field, &selection.value);
                    FormEvent::FieldUpdated(selection.field.key().to_string())
                }
                None => FormEvent::Ignored,
            },
            FormCommand::CloseDatePicker => match self.date_picker.close() {
                Some(field) => FormEvent::DatePickerClosed(field),
                None => FormEvent::Ignored,
            },
        }
    }

    fn next(&mut self) -> FormEvent {
        match self.machine.next() {
            Transition::Advanced(step) => self.step_changed(step),
            Transition::Blocked(failure) => FormEvent::ValidationFailed(failure),
            Transition::Completed(data) => {
                let submission = Submission {
                    id: Uuid::new_v4(),
                    completed_at: self.clock.now(),
                    data,
                };
                info!(id = %submission.id, "intake form completed");
                FormEvent::Completed(submission)
            }
            Transition::Retreated(_) | Transition::Stayed => FormEvent::Ignored,
        }
    }

    fn toggle_trait(&mut self, label: &str) -> FormEvent {
        let Some(entry) = self.catalog.find_trait(label) else {
            return FormEvent::Ignored;
        };
        let label = entry.label.clone();
        if self.machine.toggle_trait(&label) {
            FormEvent::TraitsUpdated
        } else {
            FormEvent::Ignored
        }
    }

    fn choose_type(&mut self, option: TypeOption) -> FormEvent {
        let Some(picker) = self.type_picker.take() else {
            return FormEvent::Ignored;
        };
        let assigned = match &option {
            TypeOption::Catalog(entry) => {
                self.machine.assign_relationship_type(picker.index, entry)
            }
            TypeOption::Custom(label) => {
                self.machine.assign_custom_relationship_type(picker.index, label)
            }
        };
        if assigned {
            self.relationships_changed()
        } else {
            self.type_picker = Some(picker);
            FormEvent::Ignored
        }
    }

    fn step_changed(&mut self, step: u8) -> FormEvent {
        self.close_pickers();
        FormEvent::StepRendered(step)
    }

    fn relationships_changed(&mut self) -> FormEvent {
        self.type_picker = None;
        FormEvent::StepRendered(self.machine.current_step())
    }

    fn close_pickers(&mut self) {
        self.date_picker.close();
        self.type_picker = None;
    }
}

fn picker_event(changed: bool) -> FormEvent {
    if changed {
        FormEvent::DatePickerUpdated
    } else {
        FormEvent::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySessionStore;
    use crate::time::FixedClock;

    fn controller() -> IntakeController {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        IntakeController::fresh(
            Box::new(MemorySessionStore::new()),
            Catalog::standard(),
            Arc::new(clock),
        )
    }

    #[test]
    fn date_picker_writes_confirmed_value_into_the_field() {
        let mut controller = controller();
        assert_eq!(
            controller.dispatch(FormCommand::OpenDatePicker(DateField::Birth)),
            FormEvent::DatePickerUpdated
        );
        assert_eq!(controller.dispatch(FormCommand::ConfirmDate), FormEvent::Ignored);
        controller.dispatch(FormCommand::SelectToday);
        assert_eq!(
            controller.dispatch(FormCommand::ConfirmDate),
            FormEvent::FieldUpdated("dateBirth".into())
        );
        assert_eq!(controller.machine().date_value(DateField::Birth), "15/06/2024");
        assert!(controller.calendar().is_none());
    }

    #[test]
    fn passing_picker_disables_days_before_birth() {
        let mut controller = controller();
        controller.dispatch(FormCommand::OpenDatePicker(DateField::Birth));
        controller.dispatch(FormCommand::SelectDay(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
        controller.dispatch(FormCommand::ConfirmDate);

        controller.dispatch(FormCommand::OpenDatePicker(DateField::Passing));
        let early = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(controller.dispatch(FormCommand::SelectDay(early)), FormEvent::Ignored);
        let calendar = controller.calendar().unwrap();
        assert!(calendar.cell(early).unwrap().is_disabled);
    }

    #[test]
    fn unknown_traits_are_ignored() {
        let mut controller = controller();
        controller.machine.navigate_to_step(2);
        assert_eq!(
            controller.dispatch(FormCommand::ToggleTrait("Grumpy".into())),
            FormEvent::Ignored
        );
        assert_eq!(
            controller.dispatch(FormCommand::ToggleTrait("kind".into())),
            FormEvent::TraitsUpdated
        );
        assert_eq!(controller.state().data.step2.traits, vec!["Kind"]);
    }

    #[test]
    fn type_picker_assigns_custom_type_and_closes() {
        let mut controller = controller();
        controller.machine.navigate_to_step(3);
        controller.dispatch(FormCommand::OpenTypePicker(0));
        controller.dispatch(FormCommand::SearchTypePicker("Godmother".into()));
        let view = controller.type_picker_view().unwrap();
        let option = view.option(1).unwrap();
        assert_eq!(
            controller.dispatch(FormCommand::ChooseRelationshipType(option)),
            FormEvent::StepRendered(3)
        );
        assert!(controller.type_picker_view().is_none());
        assert_eq!(controller.state().data.step3.relationships[0].relationship_type, "Godmother");
    }

    #[test]
    fn remove_last_relationship_rerenders_a_placeholder() {
        let mut controller = controller();
        controller.machine.navigate_to_step(3);
        controller.dispatch(FormCommand::SetRelationshipName(0, "Ada".into()));
        controller.dispatch(FormCommand::RemoveRelationship(0));
        assert_eq!(controller.state().data.step3.relationships.len(), 1);
        assert!(controller.state().data.step3.relationships[0].name.is_empty());
    }
}
