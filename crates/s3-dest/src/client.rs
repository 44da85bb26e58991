//! S3 client wrapper for marker-based object listing

use crate::S3Config;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use verify_core::{Result, VerifyError};

const STORE: &str = "S3";

/// One listed S3 object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Object {
    pub key: String,
    /// ETag as returned by S3, including the surrounding quotes
    pub e_tag: String,
}

/// Shared S3 client
#[derive(Clone, Debug)]
pub struct S3Client {
    client: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a client from the AWS default config, overridden by `config`.
    pub async fn new(config: &S3Config) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some((access_key, secret)) = &config.credentials {
            loader = loader.credentials_provider(Credentials::new(
                access_key.clone(),
                secret.clone(),
                None,
                None,
                "swift-s3-verify",
            ));
        }
        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Ok(Self {
            client: aws_sdk_s3::Client::from_conf(builder.build()),
        })
    }

    /// List up to `max_keys` objects under `prefix` whose keys sort after `marker`.
    pub async fn list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        marker: Option<&str>,
        max_keys: usize,
    ) -> Result<Vec<S3Object>> {
        let mut request = self
            .client
            .list_objects()
            .bucket(bucket)
            .prefix(prefix)
            .max_keys(i32::try_from(max_keys).unwrap_or(i32::MAX));

        if let Some(marker) = marker {
            request = request.marker(marker);
        }

        let response = request.send().await.map_err(|e| {
            VerifyError::transport(
                STORE,
                format!(
                    "failed to list s3://{bucket}/{prefix}: {}",
                    DisplayErrorContext(&e)
                ),
            )
        })?;

        response
            .contents
            .unwrap_or_default()
            .into_iter()
            .map(|object| match object.key {
                Some(key) => Ok(S3Object {
                    key,
                    e_tag: object.e_tag.unwrap_or_default(),
                }),
                None => Err(VerifyError::transport(
                    STORE,
                    format!("listing of s3://{bucket}/{prefix} returned an object without a key"),
                )),
            })
            .collect()
    }
}
