//! Intake form command handlers.

mod submit_intake_form;

pub use submit_intake_form::{SubmitIntakeFormHandler, SubmitIntakeFormResult};
