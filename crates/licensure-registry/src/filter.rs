use licensure_core::models::license::{License, LicenseStatus};
use serde::Deserialize;

/// Read-only list filter: an exact status match AND a case-insensitive
/// substring search, each optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    pub status: Option<LicenseStatus>,
    pub q: Option<String>,
}

impl ListFilter {
    pub fn matches(&self, license: &License) -> bool {
        if let Some(status) = self.status
            && license.status != status
        {
            return false;
        }
        if let Some(q) = &self.q {
            let needle = q.to_lowercase();
            if needle.is_empty() {
                return true;
            }
            let hit = license.clinician_name.to_lowercase().contains(&needle)
                || license.license_number.to_lowercase().contains(&needle)
                || license.role.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}
