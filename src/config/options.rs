//! Command-line options and the export configuration record
//!
//! [`ExportArgs`] is the raw clap surface; [`ExportOptions`] is the validated,
//! immutable configuration built from it. Day-range sign normalization happens
//! exactly once, here, so every later stage can rely on `days <= 0`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::{AuditExportError, ExportResult};

/// Default output file name
pub const DEFAULT_FILENAME: &str = "CRMAuditExport.csv";

/// Output-shape variant for the generated CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Include the Object Type column and apply `--excludeobjects` filters
    Detailed,
    /// Omit the Object Type column and always exclude login-attempt records
    Compact,
}

/// Command-line arguments for the export tool
#[derive(Parser, Debug)]
#[command(
    name = "crm-audit-export",
    version,
    about = "Export CRM audit history to CSV",
    long_about = "Connects to a CRM instance's audit Web API, retrieves audit \
                  records matching user/date/object filters, and writes them \
                  to a CSV file with action and operation codes resolved to \
                  human-readable labels."
)]
pub struct ExportArgs {
    /// URL of the CRM instance
    #[arg(long)]
    pub url: String,

    /// Username with audit access
    #[arg(long)]
    pub username: String,

    /// Password for the user with audit access
    #[arg(long, env = "CRM_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Directory to export results to
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Filename to export results to
    #[arg(long, default_value = DEFAULT_FILENAME)]
    pub filename: String,

    /// Number of days to export data for
    #[arg(long, default_value = "30", allow_negative_numbers = true)]
    pub days: i64,

    /// Username to filter. If not specified, exports all users except SYSTEM
    #[arg(long = "filteruser")]
    pub filter_user: Option<String>,

    /// Logical names of objects to exclude from the export, separated by commas
    #[arg(long = "excludeobjects", value_delimiter = ',')]
    pub exclude_objects: Vec<String>,

    /// Output-shape variant
    #[arg(long, value_enum, default_value = "detailed")]
    pub mode: OutputMode,
}

/// Validated export configuration, immutable once constructed
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Base URL of the CRM instance, without a trailing slash
    pub url: String,
    /// Authentication principal
    pub username: String,
    /// Authentication secret
    pub password: String,
    /// Output directory
    pub path: PathBuf,
    /// Output file name
    pub filename: String,
    /// Lookback window in days, always <= 0 for positive input
    pub days: i64,
    /// Restrict the export to a single user; `None` means "everyone but SYSTEM"
    pub filter_user: Option<String>,
    /// Object-type logical names excluded in detailed mode
    pub exclude_objects: Vec<String>,
    /// Output-shape variant
    pub mode: OutputMode,
}

/// Normalize a day-range to the non-positive form the query builder expects.
///
/// Positive input is negated; zero and negative input pass through unchanged.
/// Zero deliberately stays zero ("records from now onward"), matching the
/// documented boundary behavior.
pub fn normalize_days(days: i64) -> i64 {
    if days > 0 {
        -days
    } else {
        days
    }
}

impl ExportOptions {
    /// Build validated options from parsed arguments.
    ///
    /// All validation happens here, before any network contact: a bad URL or
    /// missing output directory fails the run with a configuration error.
    pub fn from_args(args: ExportArgs) -> ExportResult<Self> {
        let url = args.url.trim().trim_end_matches('/').to_string();
        if url.is_empty() {
            return Err(AuditExportError::Config("URL must not be empty".into()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AuditExportError::Config(format!(
                "URL must start with http:// or https://, got '{}'",
                url
            )));
        }

        if args.username.trim().is_empty() {
            return Err(AuditExportError::Config("username must not be empty".into()));
        }

        if !args.path.is_dir() {
            return Err(AuditExportError::Config(format!(
                "output path is not a directory: {}",
                args.path.display()
            )));
        }

        if args.filename.trim().is_empty() {
            return Err(AuditExportError::Config("filename must not be empty".into()));
        }

        let filter_user = match args.filter_user {
            Some(user) if user.trim().is_empty() => {
                return Err(AuditExportError::Config(
                    "--filteruser must not be blank".into(),
                ));
            }
            other => other,
        };

        let exclude_objects: Vec<String> = args
            .exclude_objects
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        Ok(Self {
            url,
            username: args.username,
            password: args.password,
            path: args.path,
            filename: args.filename,
            days: normalize_days(args.days),
            filter_user,
            exclude_objects,
            mode: args.mode,
        })
    }

    /// Full path of the output file
    pub fn output_file(&self) -> PathBuf {
        self.path.join(&self.filename)
    }
}
