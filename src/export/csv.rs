//! CSV projection of audit records
//!
//! Maps each record's coded fields to display labels and formats one CSV row
//! per record, preserving the store's return order. Fields containing commas,
//! quotes, or newlines are quoted with doubled inner quotes.

use chrono::Local;

use crate::config::OutputMode;
use crate::models::{action_label, operation_label, AuditRecord};

/// Header row for detailed mode
const HEADER_DETAILED: &str = "Action,User,Operation,Related Object,Object Type,Date";
/// Header row for compact mode
const HEADER_COMPACT: &str = "Action,User,Operation,Related Object,Date";

/// Timestamp format for the Date column (local time)
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stringly-typed projection of one audit record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub action: String,
    pub user: String,
    pub operation: String,
    pub target: String,
    /// Present in detailed mode only
    pub object_type: Option<String>,
    pub date: String,
}

impl CsvRow {
    /// Project an audit record into a row for the given output mode.
    pub fn from_record(record: &AuditRecord, mode: OutputMode) -> Self {
        let object_type = match mode {
            OutputMode::Detailed => Some(record.object_type.clone()),
            OutputMode::Compact => None,
        };

        Self {
            action: action_label(record.action),
            user: record.user.name.clone(),
            operation: operation_label(record.operation),
            target: record.target.name.clone(),
            object_type,
            date: record
                .created_on
                .with_timezone(&Local)
                .format(DATE_FORMAT)
                .to_string(),
        }
    }

    /// Format the row as a single CSV line (no trailing newline).
    pub fn to_line(&self) -> String {
        let mut fields = vec![
            escape_csv(&self.action),
            escape_csv(&self.user),
            escape_csv(&self.operation),
            escape_csv(&self.target),
        ];
        if let Some(object_type) = &self.object_type {
            fields.push(escape_csv(object_type));
        }
        fields.push(escape_csv(&self.date));
        fields.join(",")
    }
}

/// Header row for the given output mode
pub fn header(mode: OutputMode) -> &'static str {
    match mode {
        OutputMode::Detailed => HEADER_DETAILED,
        OutputMode::Compact => HEADER_COMPACT,
    }
}

/// Build the full CSV buffer: header first, one line per record, trailing
/// newline after the last line.
pub fn build_csv(records: &[AuditRecord], mode: OutputMode) -> String {
    let mut buffer = String::with_capacity(64 * (records.len() + 1));
    buffer.push_str(header(mode));
    buffer.push('\n');

    for record in records {
        buffer.push_str(&CsvRow::from_record(record, mode).to_line());
        buffer.push('\n');
    }

    buffer
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
