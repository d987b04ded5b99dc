//! Audit record data structures
//!
//! An [`AuditRecord`] is produced by the remote audit store and never mutated
//! locally. Field renames follow the store's wire names so records deserialize
//! straight off the Web API response.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Reference to a CRM entity: its id plus the display name the store resolved
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityRef {
    /// Unique id of the referenced entity
    pub id: String,
    /// Display name of the referenced entity
    pub name: String,
}

/// A single audit log entry as returned by the remote store
#[derive(Debug, Clone, Deserialize)]
pub struct AuditRecord {
    /// Coded action (what changed), resolved via [`crate::models::action_label`]
    pub action: i32,

    /// Coded operation (kind of audit event), resolved via
    /// [`crate::models::operation_label`]
    pub operation: i32,

    /// The user who performed the operation
    #[serde(rename = "userid")]
    pub user: EntityRef,

    /// The record the operation targeted
    #[serde(rename = "objectid")]
    pub target: EntityRef,

    /// Logical name of the targeted record's type
    #[serde(rename = "objecttypecode")]
    pub object_type: String,

    /// When the audit entry was created (UTC)
    #[serde(rename = "createdon")]
    pub created_on: DateTime<Utc>,
}
