use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One functional area of the platform and its implementation coverage.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModuleRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Implementation coverage, 0–100.
    pub completeness: u8,
    pub compliance_level: ComplianceLevel,
    pub gaps: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ComplianceLevel {
    Full,
    Partial,
    Missing,
}

fn module(
    id: &str,
    name: &str,
    category: &str,
    completeness: u8,
    compliance_level: ComplianceLevel,
    gaps: &[&str],
) -> ModuleRecord {
    ModuleRecord {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        completeness,
        compliance_level,
        gaps: gaps.iter().map(|g| g.to_string()).collect(),
    }
}

/// The platform's functional inventory, as assessed by operations.
pub fn platform_modules() -> Vec<ModuleRecord> {
    use ComplianceLevel::{Full, Missing, Partial};

    vec![
        module("patient_intake", "Patient Intake", "Clinical", 100, Full, &[]),
        module("care_plans", "Care Plans", "Clinical", 95, Full, &[]),
        module(
            "visit_scheduling",
            "Visit Scheduling",
            "Operations",
            90,
            Partial,
            &["Recurring visit templates not supported"],
        ),
        module(
            "clinician_licensing",
            "Clinician License Tracking",
            "Compliance",
            85,
            Partial,
            &["Renewal reminders are manual", "No audit trail on renewal"],
        ),
        module("medication_admin", "Medication Administration", "Clinical", 100, Full, &[]),
        module(
            "visit_documentation",
            "Visit Documentation",
            "Clinical",
            80,
            Partial,
            &["Offline entry not synchronized"],
        ),
        module("claims_submission", "Claims Submission", "Billing", 95, Full, &[]),
        module(
            "claims_reconciliation",
            "Claims Reconciliation",
            "Billing",
            70,
            Partial,
            &["Denial reason codes not mapped"],
        ),
        module("eligibility_checks", "Eligibility Checks", "Billing", 100, Full, &[]),
        module(
            "payroll_export",
            "Payroll Export",
            "HR",
            60,
            Partial,
            &["Overtime rules incomplete", "No per-diem support"],
        ),
        module("employee_records", "Employee Records", "HR", 100, Full, &[]),
        module(
            "background_checks",
            "Background Checks",
            "Compliance",
            75,
            Partial,
            &["Re-screening intervals not enforced"],
        ),
        module("incident_reports", "Incident Reports", "Compliance", 90, Partial, &[
            "No severity escalation workflow",
        ]),
        module("referral_management", "Referral Management", "Operations", 100, Full, &[]),
        module(
            "family_portal",
            "Family Portal",
            "Engagement",
            40,
            Partial,
            &["Visit summaries not published", "No messaging"],
        ),
        module("satisfaction_surveys", "Satisfaction Surveys", "Engagement", 0, Missing, &[
            "Not started",
        ]),
        module("supply_tracking", "Supply Tracking", "Operations", 85, Partial, &[
            "Reorder thresholds hard-coded",
        ]),
        module("mileage_logs", "Mileage Logs", "Operations", 100, Full, &[]),
        module(
            "quality_audits",
            "Quality Audits",
            "Compliance",
            65,
            Partial,
            &["Sampling plan not configurable"],
        ),
        module("consent_forms", "Consent Forms", "Compliance", 100, Full, &[]),
        module("on_call_roster", "On-Call Roster", "Operations", 95, Full, &[]),
        module(
            "training_tracking",
            "Training Tracking",
            "HR",
            80,
            Partial,
            &["Expiring certifications not flagged"],
        ),
        module("document_storage", "Document Storage", "Operations", 100, Full, &[]),
        module("reporting_dashboards", "Reporting Dashboards", "Operations", 0, Missing, &[
            "Not started",
        ]),
    ]
}
