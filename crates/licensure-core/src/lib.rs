//! licensure-core
//!
//! Pure domain types for the clinician license registry.
//! No I/O and no HTTP dependency — this is the shared vocabulary of the
//! Licensure system.

pub mod error;
pub mod models;
