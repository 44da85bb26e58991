//! Command-line configuration for a verification run.

pub mod duration;

use crate::report::OutputFormat;
use clap::Args;
use std::time::Duration;
use swift_s3_verify_s3_dest::{S3Config, S3Opts};
use swift_s3_verify_swift_source::{SwiftConfig, SwiftOpts, DEFAULT_PAGE_SIZE};
use verify_core::VerifyError;

/// All options of the `swift-s3-verify` command.
#[derive(Args, Clone, Debug)]
pub struct VerifyOpts {
    /// Swift source options
    #[command(flatten)]
    pub swift: SwiftOpts,

    /// S3 destination options
    #[command(flatten)]
    pub s3: S3Opts,

    /// Objects requested per listing page on each side
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Abort the run if it takes longer than this (e.g. "300", "30m", "2h")
    #[arg(long, value_name = "DURATION")]
    pub timeout: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Validated settings for one run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub swift: SwiftConfig,
    pub s3: S3Config,
    pub page_size: usize,
    pub timeout: Option<Duration>,
    pub output: OutputFormat,
}

impl VerifyOpts {
    /// Validate every option before any store is contacted.
    pub fn into_config(self) -> anyhow::Result<RunConfig> {
        if self.page_size == 0 {
            return Err(
                VerifyError::Configuration("--page-size must be at least 1".to_string()).into(),
            );
        }
        let timeout = self
            .timeout
            .as_deref()
            .map(duration::parse_duration)
            .transpose()
            .map_err(|e| VerifyError::Configuration(format!("--timeout: {e:#}")))?;

        Ok(RunConfig {
            swift: self.swift.into_config()?,
            s3: self.s3.into_config()?,
            page_size: self.page_size,
            timeout,
            output: self.output,
        })
    }
}
