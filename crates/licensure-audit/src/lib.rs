//! licensure-audit
//!
//! Application-level audit events for license mutations, emitted through
//! `tracing` so they land in the same structured log stream as everything
//! else.

pub mod events;
