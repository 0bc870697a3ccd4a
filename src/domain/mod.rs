//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps)
//! - `quiz` - Categories, question sets, scoring and the quiz session
//! - `intake` - Intake form submissions

pub mod foundation;
pub mod intake;
pub mod quiz;
