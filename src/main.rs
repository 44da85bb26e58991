//! Command-line interface for swift-s3-verify
//!
//! Exit status: 0 when every object matches, 2 when discrepancies were found,
//! 1 when the run failed.
//!
//! ```bash
//! # Verify a container, deriving SLO ETags
//! swift-s3-verify \
//!   --auth-url http://swift:8080/auth/v1.0 \
//!   --account test:tester --key testing --container photos \
//!   --bucket replica --check-slo
//!
//! # Against an S3-compatible store, JSON report
//! swift-s3-verify --s3-endpoint http://minio:9000 --region us-east-1 \
//!   --bucket replica --output json ...
//! ```

use clap::Parser;
use swift_s3_verify::{check_object_listings, render, VerifyOpts};

#[derive(Parser)]
#[command(name = "swift-s3-verify")]
#[command(about = "Check if a Swift container has been synced to S3")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: VerifyOpts,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match run().await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(2),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Returns whether both listings matched.
async fn run() -> anyhow::Result<bool> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.opts.into_config()?;
    let output = config.output;

    let report = check_object_listings(&config).await?;
    println!("{}", render(&report, output)?);

    Ok(report.is_clean())
}
