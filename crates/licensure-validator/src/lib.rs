//! licensure-validator
//!
//! Platform completeness validation. Pure data — the module catalog is the
//! platform's functional inventory, and the report is a deterministic
//! aggregation over it.

pub mod modules;
pub mod report;

pub use modules::{platform_modules, ComplianceLevel, ModuleRecord};
pub use report::{ComplianceRating, ValidationReport};

/// Look up a catalog module by id.
pub fn find_module(id: &str) -> Option<ModuleRecord> {
    platform_modules().into_iter().find(|m| m.id == id)
}
