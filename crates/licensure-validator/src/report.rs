use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::modules::{ComplianceLevel, ModuleRecord};

/// Aggregated completeness over a set of module records.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    /// Rounded mean of per-module completeness.
    pub overall_completeness: u32,
    pub full_modules: usize,
    pub partial_modules: usize,
    pub missing_modules: usize,
    /// Gap notes from every module that is not fully compliant.
    pub outstanding_gaps: Vec<String>,
    pub status: ComplianceRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ComplianceRating {
    Excellent,
    Good,
    Acceptable,
    NeedsImprovement,
}

impl ComplianceRating {
    pub fn from_completeness(overall: u32) -> Self {
        match overall {
            95.. => ComplianceRating::Excellent,
            85..=94 => ComplianceRating::Good,
            70..=84 => ComplianceRating::Acceptable,
            _ => ComplianceRating::NeedsImprovement,
        }
    }
}

impl ValidationReport {
    pub fn compute(modules: &[ModuleRecord]) -> Self {
        let overall = if modules.is_empty() {
            0
        } else {
            let sum: u32 = modules.iter().map(|m| u32::from(m.completeness)).sum();
            (f64::from(sum) / modules.len() as f64).round() as u32
        };

        let count = |level: ComplianceLevel| {
            modules.iter().filter(|m| m.compliance_level == level).count()
        };

        let outstanding_gaps = modules
            .iter()
            .filter(|m| m.compliance_level != ComplianceLevel::Full)
            .flat_map(|m| m.gaps.iter().cloned())
            .collect();

        ValidationReport {
            overall_completeness: overall,
            full_modules: count(ComplianceLevel::Full),
            partial_modules: count(ComplianceLevel::Partial),
            missing_modules: count(ComplianceLevel::Missing),
            outstanding_gaps,
            status: ComplianceRating::from_completeness(overall),
        }
    }
}
