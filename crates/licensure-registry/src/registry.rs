use std::collections::HashMap;

use jiff::{ToSpan, Zoned};
use licensure_core::models::license::{
    ComplianceStatus, License, LicenseStatus, NewLicense, RenewalRecord,
};
use uuid::Uuid;

use crate::error::RegistryError;
use crate::filter::ListFilter;

/// In-memory license repository keyed by id.
///
/// Mutations take an explicit reference clock so the renewal date math is
/// deterministic under test; callers pass `Zoned::now()` in production.
#[derive(Debug, Default)]
pub struct LicenseRegistry {
    licenses: HashMap<Uuid, License>,
    selected: Option<Uuid>,
}

impl LicenseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON array of creation requests.
    pub fn from_seed(seed: &[u8], now: &Zoned) -> Result<Self, RegistryError> {
        let requests: Vec<NewLicense> = serde_json::from_slice(seed)?;
        let mut registry = Self::new();
        for request in requests {
            registry.create(request, now)?;
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }

    /// Validate and insert a new license. The server assigns the id; renewal
    /// flags start cleared and claims eligibility is derived from status.
    pub fn create(
        &mut self,
        request: NewLicense,
        now: &Zoned,
    ) -> Result<License, RegistryError> {
        request.validate()?;

        let status = request.status.unwrap_or(LicenseStatus::Active);
        let timestamp = now.timestamp();
        let license = License {
            id: Uuid::new_v4(),
            clinician_name: request.clinician_name,
            employee_id: request.employee_id,
            role: request.role,
            department: request.department,
            license_number: request.license_number,
            license_type: request.license_type,
            issuing_authority: request.issuing_authority,
            issue_date: request.issue_date,
            expiry_date: request.expiry_date,
            status,
            renewal_initiated: false,
            renewal_completed: false,
            renewal_notification_date: None,
            renewal_completion_date: None,
            continuing_education_completed: request.continuing_education_completed,
            continuing_education_hours: request.continuing_education_hours,
            compliance_status: request
                .compliance_status
                .unwrap_or(ComplianceStatus::UnderReview),
            currently_active_for_claims: status.active_for_claims(),
            total_claims_associated: 0,
            last_used_for_claim: None,
            renewal_history: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        };

        tracing::info!(license_id = %license.id, number = %license.license_number, "license created");
        self.licenses.insert(license.id, license.clone());
        Ok(license)
    }

    pub fn get(&self, id: Uuid) -> Result<&License, RegistryError> {
        self.licenses
            .get(&id)
            .ok_or(RegistryError::NotFound { id })
    }

    /// Filtered listing, ordered by creation time (ties broken by id) since
    /// map iteration order is unstable.
    pub fn list(&self, filter: &ListFilter) -> Vec<License> {
        let mut matched: Vec<License> = self
            .licenses
            .values()
            .filter(|l| filter.matches(l))
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        matched
    }

    /// Begin a renewal cycle.
    ///
    /// Rejected while a renewal is already in flight; legal again once a
    /// prior cycle completed, which is how the lifecycle repeats. Never
    /// touches `status`, `issue_date`, or `expiry_date`.
    pub fn initiate_renewal(
        &mut self,
        id: Uuid,
        now: &Zoned,
    ) -> Result<&License, RegistryError> {
        let license = self
            .licenses
            .get_mut(&id)
            .ok_or(RegistryError::NotFound { id })?;

        if license.renewal_initiated && !license.renewal_completed {
            return Err(RegistryError::InvalidStateTransition {
                id,
                reason: "renewal already initiated".to_string(),
            });
        }

        license.renewal_initiated = true;
        license.renewal_completed = false;
        license.renewal_notification_date = Some(now.timestamp());
        license.updated_at = now.timestamp();

        tracing::info!(license_id = %id, "renewal initiated");
        Ok(license)
    }

    /// Complete an in-flight renewal: archive the closing validity period,
    /// then reset the window to one calendar year from today and force the
    /// license back to `Active`.
    pub fn complete_renewal(
        &mut self,
        id: Uuid,
        now: &Zoned,
    ) -> Result<&License, RegistryError> {
        let license = self
            .licenses
            .get_mut(&id)
            .ok_or(RegistryError::NotFound { id })?;

        if !license.renewal_initiated || license.renewal_completed {
            return Err(RegistryError::InvalidStateTransition {
                id,
                reason: "no renewal in flight; initiate first".to_string(),
            });
        }

        let timestamp = now.timestamp();
        license.renewal_history.push(RenewalRecord {
            issue_date: license.issue_date,
            expiry_date: license.expiry_date,
            completed_at: timestamp,
        });

        let today = now.date();
        license.issue_date = today;
        license.expiry_date = today
            .checked_add(1.year())
            .map_err(licensure_core::error::CoreError::from)?;
        license.status = LicenseStatus::Active;
        license.currently_active_for_claims = license.status.active_for_claims();
        license.renewal_completed = true;
        license.renewal_completion_date = Some(timestamp);
        license.updated_at = timestamp;

        tracing::info!(
            license_id = %id,
            new_expiry = %license.expiry_date,
            "renewal completed"
        );
        Ok(license)
    }

    /// Delete, guarded by a caller-supplied confirmation token that must
    /// match the license number. Clears the selection if it pointed at the
    /// deleted record.
    pub fn delete(&mut self, id: Uuid, confirm: &str) -> Result<License, RegistryError> {
        let license = self.get(id)?;
        if license.license_number != confirm {
            return Err(RegistryError::ConfirmationMismatch);
        }

        let removed = self
            .licenses
            .remove(&id)
            .ok_or(RegistryError::NotFound { id })?;
        if self.selected == Some(id) {
            self.selected = None;
        }

        tracing::info!(license_id = %id, "license deleted");
        Ok(removed)
    }

    pub fn select(&mut self, id: Uuid) -> Result<&License, RegistryError> {
        let license = self
            .licenses
            .get(&id)
            .ok_or(RegistryError::NotFound { id })?;
        self.selected = Some(id);
        Ok(license)
    }

    pub fn selected(&self) -> Option<&License> {
        self.selected.and_then(|id| self.licenses.get(&id))
    }
}
