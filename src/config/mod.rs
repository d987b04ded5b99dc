//! Configuration for crm-audit-export
//!
//! Parses command-line arguments into the immutable [`ExportOptions`]
//! record that drives the rest of the pipeline.

pub mod options;

pub use options::{ExportArgs, ExportOptions, OutputMode};
