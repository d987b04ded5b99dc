use anyhow::Result;
use clap::Parser;

use crm_audit_export::client::DataverseClient;
use crm_audit_export::config::{ExportArgs, ExportOptions};
use crm_audit_export::export::run_export;

fn main() -> Result<()> {
    let args = ExportArgs::parse();

    // Validate and normalize before any network contact
    let options = ExportOptions::from_args(args)?;

    println!("Querying audit records from {}", options.url);
    println!(
        "Lookback window: {} day(s), user filter: {}",
        options.days.abs(),
        options.filter_user.as_deref().unwrap_or("all except SYSTEM")
    );

    let client = DataverseClient::new(&options)?;
    let count = run_export(&client, &options)?;

    println!(
        "Exported {} audit records to: {}",
        count,
        options.output_file().display()
    );

    Ok(())
}
