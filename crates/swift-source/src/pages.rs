use crate::slo::{parse_manifest, slo_etag};
use crate::{SwiftClient, SwiftObject};
use async_trait::async_trait;
use verify_core::{Entry, PageSource, Result};

/// Page source over one Swift container.
pub struct SwiftPages {
    client: SwiftClient,
    container: String,
    page_size: usize,
    check_slo: bool,
}

impl SwiftPages {
    pub fn new(
        client: SwiftClient,
        container: impl Into<String>,
        page_size: usize,
        check_slo: bool,
    ) -> Self {
        Self {
            client,
            container: container.into(),
            page_size,
            check_slo,
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }
}

#[async_trait]
impl PageSource for SwiftPages {
    type Item = SwiftObject;

    fn item_key(item: &SwiftObject) -> &str {
        &item.name
    }

    async fn next_page(&mut self, marker: Option<&str>) -> Result<Vec<SwiftObject>> {
        self.client
            .list_container(&self.container, marker, self.page_size)
            .await
    }

    async fn transform(&mut self, item: SwiftObject) -> Result<Entry> {
        if self.check_slo {
            let meta = self.client.head_object(&self.container, &item.name).await?;
            if meta.static_large_object {
                let body = self.client.get_manifest(&self.container, &item.name).await?;
                let segments = parse_manifest(&item.name, &body)?;
                let etag = slo_etag(&item.name, &segments)?;
                tracing::debug!(
                    "SLO '{}' has {} segments, manifest ETag {:?}, derived ETag {}",
                    item.name,
                    segments.len(),
                    meta.etag,
                    etag
                );
                return Ok(Entry::new(item.name, etag));
            }
        }
        Ok(Entry::new(item.name, item.hash))
    }
}
