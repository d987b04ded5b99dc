//! Remote audit store access
//!
//! The rest of the pipeline talks to the store through the [`AuditClient`]
//! trait; [`DataverseClient`] is the shipped Web API implementation. Keeping
//! the trait small makes the projection and writer code testable without a
//! live CRM instance.

pub mod dataverse;

pub use dataverse::DataverseClient;

use crate::error::ExportResult;
use crate::models::AuditRecord;
use crate::query::FilterSpec;

/// A source of audit records matching a filter
pub trait AuditClient {
    /// Fetch every audit record matching `filter`, in store order.
    fn fetch_audit_records(&self, filter: &FilterSpec) -> ExportResult<Vec<AuditRecord>>;
}
