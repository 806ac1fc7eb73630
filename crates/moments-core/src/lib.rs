//! moments-core
//!
//! Intake form behaviour: date utilities, calendar grid, date picker, relationship
//! editing, step rendering into view models and the step state machine.
//! Depends on moments-domain. No CLI, no terminal I/O; persistence goes through
//! the [`SessionStore`] seam.

pub mod calendar;
pub mod controller;
pub mod date_picker;
pub mod dates;
pub mod draft;
pub mod error;
pub mod fields;
pub mod relationships;
pub mod render;
pub mod state_machine;
pub mod storage;
pub mod time;
pub mod validation;

pub use calendar::{build_month, CalendarMonth, DateBounds, DayCell, MonthPosition};
pub use controller::{FormCommand, FormEvent, IntakeController, Submission};
pub use date_picker::{CalendarAction, DateField, DatePickerController, DateSelection};
pub use draft::StepDraft;
pub use error::CoreError;
pub use fields::{step_fields, FieldDescriptor, FieldKind};
pub use relationships::{RelationshipEditor, TypeOption, TypePicker, TypePickerView};
pub use render::{render_step, StepBody, StepView};
pub use state_machine::{FormStateMachine, Transition};
pub use storage::{MemorySessionStore, SessionStore, CURRENT_STEP_KEY, FORM_DATA_KEY};
pub use time::{Clock, FixedClock};
pub use validation::{ValidationFailure, ValidationKind};
