//! swift-s3-verify
//!
//! Checks that every object of a Swift container has been replicated to an
//! S3 bucket by swift-s3-sync. Both stores are listed independently, page by
//! page, and the two listings are merged in a single pass. Nothing is copied
//! or repaired; the tool only reports:
//!
//! - objects missing in S3
//! - objects missing in Swift
//! - objects whose ETags differ (optionally deriving SLO ETags from their manifests)
//!
//! # CLI Usage
//!
//! ```bash
//! swift-s3-verify \
//!   --auth-url http://swift:8080/auth/v1.0 \
//!   --account test:tester --key testing --container photos \
//!   --bucket replica --access-key AKIA... --secret ... \
//!   --check-slo
//! ```

pub mod config;
pub mod report;

use anyhow::Context;
use swift_s3_verify_s3_dest::{S3Client, S3Pages};
use swift_s3_verify_swift_source::{SwiftClient, SwiftPages};
use tracing::info;
use verify_core::{reconcile, PagedLister, Report};

pub use config::{RunConfig, VerifyOpts};
pub use report::{render, OutputFormat};

/// Connect to both stores and reconcile the container against the bucket.
pub async fn check_object_listings(config: &RunConfig) -> anyhow::Result<Report> {
    let swift = &config.swift;

    let swift_client = SwiftClient::connect(&swift.auth_url, &swift.account, &swift.key)
        .await
        .context("Failed to connect to Swift")?;
    let s3_client = S3Client::new(&config.s3)
        .await
        .context("Failed to create S3 client")?;

    let source = SwiftPages::new(
        swift_client,
        &swift.container,
        config.page_size,
        swift.check_slo,
    );
    let dest = S3Pages::new(
        s3_client,
        &config.s3.bucket,
        &swift.account,
        &swift.container,
        config.page_size,
    );

    info!(
        "Verifying Swift container '{}' against s3://{}/{} (SLO check: {})",
        source.container(),
        dest.bucket(),
        dest.prefix(),
        swift.check_slo
    );

    let mut source = PagedLister::new(source);
    let mut dest = PagedLister::new(dest);

    let run = reconcile(&mut source, &mut dest);
    let report = match config.timeout {
        Some(limit) => tokio::time::timeout(limit, run)
            .await
            .map_err(|_| anyhow::anyhow!("Verification did not finish within {limit:?}"))?,
        None => run.await,
    }
    .context("Failed to reconcile listings")?;

    info!(
        "Listed {} Swift pages and {} S3 pages",
        source.pages_fetched(),
        dest.pages_fetched()
    );

    Ok(report)
}
