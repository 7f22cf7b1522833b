use jiff::civil::date;
use licensure_core::error::CoreError;
use licensure_core::models::license::{
    ComplianceStatus, License, LicenseStatus, NewLicense,
};
use uuid::Uuid;

fn base_request() -> NewLicense {
    NewLicense {
        clinician_name: "Dr. Sarah Ahmed".to_string(),
        employee_id: "EMP-1042".to_string(),
        role: "Registered Nurse".to_string(),
        department: "Home Nursing".to_string(),
        license_number: "RN-552761".to_string(),
        license_type: "Nursing License".to_string(),
        issuing_authority: "State Board of Nursing".to_string(),
        issue_date: date(2023, 1, 15),
        expiry_date: date(2024, 1, 14),
        status: None,
        compliance_status: None,
        continuing_education_completed: false,
        continuing_education_hours: 0,
    }
}

fn license_from(req: &NewLicense) -> License {
    let now: jiff::Timestamp = "2023-06-01T00:00:00Z".parse().unwrap();
    License {
        id: Uuid::new_v4(),
        clinician_name: req.clinician_name.clone(),
        employee_id: req.employee_id.clone(),
        role: req.role.clone(),
        department: req.department.clone(),
        license_number: req.license_number.clone(),
        license_type: req.license_type.clone(),
        issuing_authority: req.issuing_authority.clone(),
        issue_date: req.issue_date,
        expiry_date: req.expiry_date,
        status: LicenseStatus::Active,
        renewal_initiated: false,
        renewal_completed: false,
        renewal_notification_date: None,
        renewal_completion_date: None,
        continuing_education_completed: false,
        continuing_education_hours: 0,
        compliance_status: ComplianceStatus::UnderReview,
        currently_active_for_claims: true,
        total_claims_associated: 0,
        last_used_for_claim: None,
        renewal_history: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn valid_request_passes_validation() {
    assert!(base_request().validate().is_ok());
}

#[test]
fn blank_required_field_is_rejected() {
    let mut req = base_request();
    req.clinician_name = "   ".to_string();
    match req.validate() {
        Err(CoreError::MissingField("clinician_name")) => {}
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn inverted_date_range_is_rejected() {
    let mut req = base_request();
    req.expiry_date = date(2022, 12, 31);
    assert!(matches!(
        req.validate(),
        Err(CoreError::InvertedDateRange { .. })
    ));
}

#[test]
fn equal_issue_and_expiry_dates_are_rejected() {
    let mut req = base_request();
    req.expiry_date = req.issue_date;
    assert!(matches!(
        req.validate(),
        Err(CoreError::InvertedDateRange { .. })
    ));
}

#[test]
fn days_until_expiration_counts_whole_days() {
    let license = license_from(&base_request());
    assert_eq!(license.days_until_expiration(date(2023, 12, 15)), 30);
}

#[test]
fn days_until_expiration_is_zero_on_expiry_day() {
    let license = license_from(&base_request());
    assert_eq!(license.days_until_expiration(date(2024, 1, 14)), 0);
}

#[test]
fn days_until_expiration_goes_negative_past_expiry() {
    let license = license_from(&base_request());
    assert_eq!(license.days_until_expiration(date(2024, 1, 20)), -6);
}

#[test]
fn days_until_expiration_decreases_as_reference_advances() {
    let license = license_from(&base_request());
    let mut reference = date(2023, 12, 1);
    let mut previous = license.days_until_expiration(reference);
    for _ in 0..60 {
        reference = reference.tomorrow().unwrap();
        let current = license.days_until_expiration(reference);
        assert!(current < previous);
        previous = current;
    }
}

#[test]
fn only_active_status_is_claims_eligible() {
    assert!(LicenseStatus::Active.active_for_claims());
    assert!(!LicenseStatus::PendingRenewal.active_for_claims());
    assert!(!LicenseStatus::Expired.active_for_claims());
    assert!(!LicenseStatus::Suspended.active_for_claims());
}

#[test]
fn status_serializes_snake_case() {
    let json = serde_json::to_string(&LicenseStatus::PendingRenewal).unwrap();
    assert_eq!(json, "\"pending_renewal\"");
}
