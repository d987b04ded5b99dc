//! Web API implementation of the audit client
//!
//! Renders a [`FilterSpec`] to an OData `$filter` expression and issues one
//! blocking GET against the instance's audit collection. No retries and no
//! paging: a failed or undecodable response aborts the run, matching the
//! one-shot nature of the tool.

use std::time::Duration;

use chrono::SecondsFormat;
use serde::Deserialize;

use crate::client::AuditClient;
use crate::config::ExportOptions;
use crate::error::{AuditExportError, ExportResult};
use crate::models::AuditRecord;
use crate::query::{ConditionOperator, FilterSpec, FilterValue};

/// Web API route of the audit record collection
const AUDIT_COLLECTION: &str = "api/data/v9.2/audits";

/// Default request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// One page of audit records as returned by the Web API
#[derive(Debug, Deserialize)]
struct AuditPage {
    value: Vec<AuditRecord>,
}

/// Blocking Web API client for the audit store
pub struct DataverseClient {
    http: reqwest::blocking::Client,
    base_url: String,
    username: String,
    password: String,
}

impl DataverseClient {
    /// Create a client for the configured instance.
    pub fn new(options: &ExportOptions) -> ExportResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AuditExportError::Remote(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: options.url.clone(),
            username: options.username.clone(),
            password: options.password.clone(),
        })
    }

    /// URL of the audit collection on this instance
    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, AUDIT_COLLECTION)
    }
}

impl AuditClient for DataverseClient {
    fn fetch_audit_records(&self, filter: &FilterSpec) -> ExportResult<Vec<AuditRecord>> {
        let response = self
            .http
            .get(self.collection_url())
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", "application/json")
            .query(&[("$filter", render_filter(filter))])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AuditExportError::Remote(format!(
                "audit query failed with {}: {}",
                status,
                body.trim()
            )));
        }

        let page: AuditPage = response.json()?;
        Ok(page.value)
    }
}

/// Render a filter spec as an OData `$filter` expression.
///
/// Conditions join with `and`; string values are single-quoted with embedded
/// quotes doubled, timestamps render as RFC 3339 UTC.
pub fn render_filter(filter: &FilterSpec) -> String {
    filter
        .conditions
        .iter()
        .map(|condition| {
            format!(
                "{} {} {}",
                condition.attribute,
                render_operator(condition.operator),
                render_value(&condition.value)
            )
        })
        .collect::<Vec<_>>()
        .join(" and ")
}

fn render_operator(operator: ConditionOperator) -> &'static str {
    match operator {
        ConditionOperator::Equal => "eq",
        ConditionOperator::NotEqual => "ne",
        ConditionOperator::OnOrAfter => "ge",
    }
}

fn render_value(value: &FilterValue) -> String {
    match value {
        FilterValue::Text(text) => format!("'{}'", text.replace('\'', "''")),
        FilterValue::Timestamp(ts) => ts.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}
