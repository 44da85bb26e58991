use crate::{sync_prefix, S3Client, S3Object};
use async_trait::async_trait;
use verify_core::{Entry, PageSource, Result, VerifyError};

/// Page source over the part of a bucket that mirrors one Swift container.
pub struct S3Pages {
    client: S3Client,
    bucket: String,
    prefix: String,
    page_size: usize,
}

impl S3Pages {
    /// `account` and `container` identify the Swift side; the routing prefix
    /// is derived from them once, here.
    pub fn new(
        client: S3Client,
        bucket: impl Into<String>,
        account: &str,
        container: &str,
        page_size: usize,
    ) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            prefix: sync_prefix(account, container),
            page_size,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl PageSource for S3Pages {
    type Item = S3Object;

    fn item_key(item: &S3Object) -> &str {
        &item.key
    }

    async fn next_page(&mut self, marker: Option<&str>) -> Result<Vec<S3Object>> {
        self.client
            .list_objects(&self.bucket, &self.prefix, marker, self.page_size)
            .await
    }

    async fn transform(&mut self, item: S3Object) -> Result<Entry> {
        let key = item.key.strip_prefix(&self.prefix).ok_or_else(|| {
            VerifyError::transport(
                "S3",
                format!("key '{}' is outside prefix '{}'", item.key, self.prefix),
            )
        })?;
        Ok(Entry::new(key, item.e_tag.trim_matches('"')))
    }
}
