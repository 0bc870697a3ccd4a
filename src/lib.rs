//! RIASEC Quiz - Interest assessment service
//!
//! Generates twelve scenario questions with a text-generation provider, two
//! per RIASEC category in a fixed order, scores the answers, and reports the
//! three highest-scoring category letters as the result code.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
