use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A clinician license — a credential record with a defined validity window
/// and a two-step renewal sub-lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct License {
    pub id: Uuid,
    pub clinician_name: String,
    pub employee_id: String,
    pub role: String,
    pub department: String,
    pub license_number: String,
    pub license_type: String,
    pub issuing_authority: String,
    pub issue_date: Date,
    pub expiry_date: Date,
    pub status: LicenseStatus,
    pub renewal_initiated: bool,
    pub renewal_completed: bool,
    pub renewal_notification_date: Option<Timestamp>,
    pub renewal_completion_date: Option<Timestamp>,
    pub continuing_education_completed: bool,
    pub continuing_education_hours: u32,
    pub compliance_status: ComplianceStatus,
    /// Derived from `status`: true iff the license is `Active`.
    pub currently_active_for_claims: bool,
    pub total_claims_associated: u64,
    pub last_used_for_claim: Option<Date>,
    /// Closed validity periods, appended by each completed renewal.
    pub renewal_history: Vec<RenewalRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LicenseStatus {
    Active,
    PendingRenewal,
    Expired,
    Suspended,
}

impl LicenseStatus {
    /// Whether a license in this status may be used for claims.
    pub fn active_for_claims(self) -> bool {
        matches!(self, LicenseStatus::Active)
    }
}

/// Regulatory standing, independent of the renewal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    UnderReview,
}

/// A closed validity period, recorded when a renewal completes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RenewalRecord {
    pub issue_date: Date,
    pub expiry_date: Date,
    pub completed_at: Timestamp,
}

impl License {
    /// Whole calendar days from `reference` to the expiry date.
    ///
    /// Zero or negative means the license is past its window for display
    /// purposes; `status` is never changed by the passage of time.
    pub fn days_until_expiration(&self, reference: Date) -> i32 {
        (self.expiry_date - reference).get_days()
    }
}

/// A license creation request. The server assigns the id and derives the
/// claims-eligibility flag; renewal flags always start cleared.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewLicense {
    pub clinician_name: String,
    pub employee_id: String,
    pub role: String,
    pub department: String,
    pub license_number: String,
    pub license_type: String,
    pub issuing_authority: String,
    pub issue_date: Date,
    pub expiry_date: Date,
    #[serde(default)]
    pub status: Option<LicenseStatus>,
    #[serde(default)]
    pub compliance_status: Option<ComplianceStatus>,
    #[serde(default)]
    pub continuing_education_completed: bool,
    #[serde(default)]
    pub continuing_education_hours: u32,
}

impl NewLicense {
    /// Reject blank required fields and inverted date ranges.
    pub fn validate(&self) -> Result<(), CoreError> {
        let required: [(&'static str, &str); 7] = [
            ("clinician_name", &self.clinician_name),
            ("employee_id", &self.employee_id),
            ("role", &self.role),
            ("department", &self.department),
            ("license_number", &self.license_number),
            ("license_type", &self.license_type),
            ("issuing_authority", &self.issuing_authority),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::MissingField(name));
            }
        }
        if self.expiry_date <= self.issue_date {
            return Err(CoreError::InvertedDateRange {
                issue: self.issue_date,
                expiry: self.expiry_date,
            });
        }
        Ok(())
    }
}
