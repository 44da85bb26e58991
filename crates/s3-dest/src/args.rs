//! CLI argument definitions for the S3 side.

use clap::Args;
use verify_core::{Result, VerifyError};

/// S3 connection options.
#[derive(Args, Clone, Debug, Default)]
pub struct S3Opts {
    /// Destination S3 bucket
    #[arg(long, env = "S3_BUCKET")]
    pub bucket: Option<String>,

    /// AWS access key ID (falls back to the default credential chain)
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key: Option<String>,

    /// AWS secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret: Option<String>,

    /// AWS region of the bucket
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Custom S3 endpoint URL (S3-compatible stores, path-style addressing)
    #[arg(long, env = "S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,
}

/// Validated S3 settings.
#[derive(Clone, Debug)]
pub struct S3Config {
    pub bucket: String,
    /// Static credentials as (access key, secret)
    pub credentials: Option<(String, String)>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

impl S3Opts {
    pub fn into_config(self) -> Result<S3Config> {
        let bucket = match self.bucket {
            Some(b) if !b.is_empty() => b,
            _ => return Err(VerifyError::Configuration("--bucket is required".to_string())),
        };

        let credentials = match (self.access_key, self.secret) {
            (Some(key), Some(secret)) => Some((key, secret)),
            (None, None) => None,
            (Some(_), None) => {
                return Err(VerifyError::Configuration(
                    "--secret is required with --access-key".to_string(),
                ))
            }
            (None, Some(_)) => {
                return Err(VerifyError::Configuration(
                    "--access-key is required with --secret".to_string(),
                ))
            }
        };

        Ok(S3Config {
            bucket,
            credentials,
            region: self.region,
            endpoint: self.s3_endpoint,
        })
    }
}
