//! Core data models
//!
//! Defines the read-only audit record shape returned by the remote store and
//! the fixed code-to-label tables used to render it.

pub mod labels;
pub mod record;

pub use labels::{action_label, operation_label};
pub use record::{AuditRecord, EntityRef};
