//! crm-audit-export - Export CRM audit history to CSV
//!
//! This library implements a one-shot export pipeline against a CRM
//! platform's audit Web API: parse options, build a filtered query, fetch the
//! matching audit records, resolve their coded action/operation fields to
//! display labels, and write one CSV file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: CLI options and the validated export configuration
//! - `error`: Custom error types
//! - `query`: Typed filter specification and the query builder
//! - `client`: The `AuditClient` trait and the Web API implementation
//! - `models`: Audit record shapes and code-to-label tables
//! - `export`: CSV projection and the output writer
//!
//! # Example
//!
//! ```rust,ignore
//! use crm_audit_export::client::DataverseClient;
//! use crm_audit_export::export::run_export;
//!
//! let client = DataverseClient::new(&options)?;
//! let count = run_export(&client, &options)?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod query;

pub use error::AuditExportError;
