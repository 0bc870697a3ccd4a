//! Storage Adapters
//!
//! Implementations of the FormSubmissionRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryFormSubmissionStore** - Keeps submissions in memory for the life of the process

mod in_memory_form_store;

pub use in_memory_form_store::InMemoryFormSubmissionStore;
