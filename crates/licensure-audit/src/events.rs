use serde::Serialize;
use tracing::info;

/// A structured audit event for a license mutation.
///
/// Compliance reviews need to see who did what to which record; these events
/// provide that context on top of the per-request access log.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub actor: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            actor: actor.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.actor = %self.actor,
            "audit event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_carries_optional_details() {
        let event = AuditEvent::new("complete_renewal", "license", "abc", "system")
            .with_details(serde_json::json!({ "new_expiry": "2025-01-20" }));
        assert_eq!(event.action, "complete_renewal");
        assert!(event.details.is_some());
    }
}
