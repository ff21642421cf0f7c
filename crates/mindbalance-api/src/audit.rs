//! Audit trail for changes to a user's stored data.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// The kind of stored data a change touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditResource {
    Assessment,
    Mood,
    Gratitude,
}

impl AuditResource {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditResource::Assessment => "assessment",
            AuditResource::Mood => "mood",
            AuditResource::Gratitude => "gratitude",
        }
    }
}

/// What was done. Single-entry changes carry the entry id, sync batches
/// carry their counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AuditAction {
    Create { id: Uuid },
    Delete { id: Uuid },
    Sync { synced: usize, replaced: usize },
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create { .. } => "create",
            AuditAction::Delete { .. } => "delete",
            AuditAction::Sync { .. } => "sync",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub user_id: String,
    pub resource: AuditResource,
    #[serde(flatten)]
    pub action: AuditAction,
    /// Set when a created assessment flagged the self-harm item.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub safety_risk: bool,
}

impl AuditEvent {
    pub fn new(user_id: &str, resource: AuditResource, action: AuditAction) -> Self {
        Self {
            user_id: user_id.to_string(),
            resource,
            action,
            safety_risk: false,
        }
    }

    pub fn created(user_id: &str, resource: AuditResource, id: Uuid) -> Self {
        Self::new(user_id, resource, AuditAction::Create { id })
    }

    pub fn deleted(user_id: &str, resource: AuditResource, id: Uuid) -> Self {
        Self::new(user_id, resource, AuditAction::Delete { id })
    }

    pub fn synced(user_id: &str, resource: AuditResource, synced: usize, replaced: usize) -> Self {
        Self::new(user_id, resource, AuditAction::Sync { synced, replaced })
    }

    pub fn with_safety_risk(mut self, safety_risk: bool) -> Self {
        self.safety_risk = safety_risk;
        self
    }

    pub fn emit(&self) {
        let action = self.action.as_str();
        let resource = self.resource.as_str();
        match self.action {
            AuditAction::Create { id } | AuditAction::Delete { id } => info!(
                audit.action = action,
                audit.resource = resource,
                audit.resource_id = %id,
                audit.user_id = %self.user_id,
                audit.safety_risk = self.safety_risk,
                "audit event"
            ),
            AuditAction::Sync { synced, replaced } => info!(
                audit.action = action,
                audit.resource = resource,
                audit.user_id = %self.user_id,
                audit.synced = synced,
                audit.replaced = replaced,
                "audit event"
            ),
        }
    }
}
