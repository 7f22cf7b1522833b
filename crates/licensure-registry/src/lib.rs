//! licensure-registry
//!
//! The owned license repository. All lifecycle mutations go through
//! [`registry::LicenseRegistry`]; the raw collection is never exposed, so the
//! renewal guards cannot be bypassed by callers.

pub mod error;
pub mod filter;
pub mod registry;
