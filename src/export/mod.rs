//! CSV projection and output
//!
//! Turns fetched audit records into the delimited output file. The whole
//! pipeline after option parsing lives behind [`run_export`], which takes the
//! audit source as a trait object so it can run against a stub in tests.

pub mod csv;

pub use csv::{build_csv, header, CsvRow};

use chrono::Local;

use crate::client::AuditClient;
use crate::config::ExportOptions;
use crate::error::{AuditExportError, ExportResult};
use crate::query::build_filter;

/// Fetch matching audit records and write them to the configured file.
///
/// Returns the number of data rows written. The output file is overwritten
/// unconditionally in a single write.
pub fn run_export(client: &dyn AuditClient, options: &ExportOptions) -> ExportResult<usize> {
    let filter = build_filter(options, Local::now());
    let records = client.fetch_audit_records(&filter)?;

    let contents = build_csv(&records, options.mode);
    let output = options.output_file();
    std::fs::write(&output, contents).map_err(|e| {
        AuditExportError::Export(format!("Failed to write {}: {}", output.display(), e))
    })?;

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputMode;
    use crate::models::{AuditRecord, EntityRef};
    use crate::query::FilterSpec;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    struct StubClient {
        records: Vec<AuditRecord>,
    }

    impl AuditClient for StubClient {
        fn fetch_audit_records(&self, _filter: &FilterSpec) -> ExportResult<Vec<AuditRecord>> {
            Ok(self.records.clone())
        }
    }

    fn record(action: i32, operation: i32, user: &str, target: &str) -> AuditRecord {
        AuditRecord {
            action,
            operation,
            user: EntityRef {
                id: "u-1".to_string(),
                name: user.to_string(),
            },
            target: EntityRef {
                id: "o-1".to_string(),
                name: target.to_string(),
            },
            object_type: "account".to_string(),
            created_on: Utc.with_ymd_and_hms(2026, 8, 1, 9, 15, 0).unwrap(),
        }
    }

    fn options_in(dir: &TempDir) -> ExportOptions {
        ExportOptions {
            url: "https://contoso.crm.example.com".to_string(),
            username: "auditor".to_string(),
            password: "hunter2".to_string(),
            path: dir.path().to_path_buf(),
            filename: "out.csv".to_string(),
            days: -30,
            filter_user: None,
            exclude_objects: Vec::new(),
            mode: OutputMode::Detailed,
        }
    }

    #[test]
    fn test_run_export_writes_header_and_rows() {
        let temp_dir = TempDir::new().unwrap();
        let options = options_in(&temp_dir);
        let client = StubClient {
            records: vec![
                record(0, 1, "Alice Example", "Fabrikam Ltd"),
                record(2, 3, "Bob Example", "Contoso Ltd"),
            ],
        };

        let count = run_export(&client, &options).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(options.output_file()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Action,User,Operation,Related Object,Object Type,Date");
        assert!(lines[1].starts_with("Unknown,Alice Example,Create,Fabrikam Ltd,account,"));
        assert!(lines[2].starts_with("Update,Bob Example,Delete,Contoso Ltd,account,"));
    }

    #[test]
    fn test_run_export_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let options = options_in(&temp_dir);
        std::fs::write(options.output_file(), "stale contents\n").unwrap();

        let client = StubClient {
            records: vec![record(1, 1, "Alice Example", "Fabrikam Ltd")],
        };
        run_export(&client, &options).unwrap();
        let first = std::fs::read_to_string(options.output_file()).unwrap();
        assert!(!first.contains("stale contents"));

        // Idempotent: a second run produces byte-identical output
        run_export(&client, &options).unwrap();
        let second = std::fs::read_to_string(options.output_file()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_export_with_no_records_writes_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let options = options_in(&temp_dir);
        let client = StubClient { records: vec![] };

        let count = run_export(&client, &options).unwrap();
        assert_eq!(count, 0);

        let contents = std::fs::read_to_string(options.output_file()).unwrap();
        assert_eq!(contents, "Action,User,Operation,Related Object,Object Type,Date\n");
    }

    #[test]
    fn test_run_export_propagates_client_failure() {
        struct FailingClient;
        impl AuditClient for FailingClient {
            fn fetch_audit_records(&self, _: &FilterSpec) -> ExportResult<Vec<AuditRecord>> {
                Err(AuditExportError::Remote("connection refused".into()))
            }
        }

        let temp_dir = TempDir::new().unwrap();
        let options = options_in(&temp_dir);
        let err = run_export(&FailingClient, &options).unwrap_err();
        assert!(err.is_remote());
        assert!(!options.output_file().exists());
    }
}
