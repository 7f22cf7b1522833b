use axum::Json;

use licensure_validator::modules::ModuleRecord;
use licensure_validator::platform_modules;
use licensure_validator::report::ValidationReport;

pub async fn list_modules() -> Json<Vec<ModuleRecord>> {
    Json(platform_modules())
}

pub async fn validation_report() -> Json<ValidationReport> {
    Json(ValidationReport::compute(&platform_modules()))
}
