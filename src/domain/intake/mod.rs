//! Intake domain module.
//!
//! Free-form intake forms submitted alongside the quiz. Submissions are kept
//! for the life of the process and never interpreted by the quiz itself.

mod errors;
mod submission;

pub use errors::IntakeError;
pub use submission::FormSubmission;
