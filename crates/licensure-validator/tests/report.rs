use licensure_validator::modules::{ComplianceLevel, ModuleRecord};
use licensure_validator::report::{ComplianceRating, ValidationReport};
use licensure_validator::{find_module, platform_modules};

fn record(id: &str, completeness: u8, level: ComplianceLevel, gaps: &[&str]) -> ModuleRecord {
    ModuleRecord {
        id: id.to_string(),
        name: id.to_string(),
        category: "Test".to_string(),
        completeness,
        compliance_level: level,
        gaps: gaps.iter().map(|g| g.to_string()).collect(),
    }
}

#[test]
fn catalog_has_twenty_four_modules_with_unique_ids() {
    let modules = platform_modules();
    assert_eq!(modules.len(), 24);

    let mut ids: Vec<&str> = modules.iter().map(|m| m.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 24);

    for module in &modules {
        assert!(module.completeness <= 100, "{} out of range", module.id);
    }
}

#[test]
fn find_module_by_id() {
    let module = find_module("clinician_licensing").unwrap();
    assert_eq!(module.name, "Clinician License Tracking");
    assert!(find_module("no_such_module").is_none());
}

#[test]
fn overall_is_the_rounded_mean() {
    let modules = vec![
        record("a", 100, ComplianceLevel::Full, &[]),
        record("b", 90, ComplianceLevel::Partial, &["gap b"]),
        record("c", 80, ComplianceLevel::Partial, &["gap c"]),
    ];
    let report = ValidationReport::compute(&modules);
    assert_eq!(report.overall_completeness, 90);
    assert_eq!(report.full_modules, 1);
    assert_eq!(report.partial_modules, 2);
    assert_eq!(report.missing_modules, 0);
}

#[test]
fn mean_rounds_half_up() {
    let modules = vec![
        record("a", 90, ComplianceLevel::Partial, &[]),
        record("b", 89, ComplianceLevel::Partial, &[]),
    ];
    // 89.5 rounds to 90
    let report = ValidationReport::compute(&modules);
    assert_eq!(report.overall_completeness, 90);
}

#[test]
fn gaps_roll_up_from_non_full_modules_only() {
    let modules = vec![
        record("a", 100, ComplianceLevel::Full, &["ignored"]),
        record("b", 50, ComplianceLevel::Partial, &["gap one", "gap two"]),
        record("c", 0, ComplianceLevel::Missing, &["not started"]),
    ];
    let report = ValidationReport::compute(&modules);
    assert_eq!(
        report.outstanding_gaps,
        vec!["gap one", "gap two", "not started"]
    );
}

#[test]
fn rating_thresholds() {
    assert_eq!(ComplianceRating::from_completeness(100), ComplianceRating::Excellent);
    assert_eq!(ComplianceRating::from_completeness(95), ComplianceRating::Excellent);
    assert_eq!(ComplianceRating::from_completeness(94), ComplianceRating::Good);
    assert_eq!(ComplianceRating::from_completeness(85), ComplianceRating::Good);
    assert_eq!(ComplianceRating::from_completeness(84), ComplianceRating::Acceptable);
    assert_eq!(ComplianceRating::from_completeness(70), ComplianceRating::Acceptable);
    assert_eq!(
        ComplianceRating::from_completeness(69),
        ComplianceRating::NeedsImprovement
    );
    assert_eq!(
        ComplianceRating::from_completeness(0),
        ComplianceRating::NeedsImprovement
    );
}

#[test]
fn empty_catalog_is_zero_and_needs_improvement() {
    let report = ValidationReport::compute(&[]);
    assert_eq!(report.overall_completeness, 0);
    assert_eq!(report.status, ComplianceRating::NeedsImprovement);
    assert!(report.outstanding_gaps.is_empty());
}

#[test]
fn rating_serializes_kebab_case() {
    let json = serde_json::to_string(&ComplianceRating::NeedsImprovement).unwrap();
    assert_eq!(json, "\"needs-improvement\"");
}

#[test]
fn catalog_report_is_deterministic() {
    let first = ValidationReport::compute(&platform_modules());
    let second = ValidationReport::compute(&platform_modules());
    assert_eq!(first.overall_completeness, second.overall_completeness);
    assert_eq!(first.status, second.status);
    assert_eq!(first.outstanding_gaps, second.outstanding_gaps);
}
