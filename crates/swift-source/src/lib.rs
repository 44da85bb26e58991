//! Swift side of swift-s3-verify.
//!
//! Lists a Swift container page by page and, when asked to, replaces the
//! listing hash of Static Large Objects with the ETag S3 reports for the
//! equivalent multipart upload.
//!
//! # Example
//!
//! ```ignore
//! use swift_s3_verify_swift_source::{SwiftClient, SwiftPages, DEFAULT_PAGE_SIZE};
//! use verify_core::PagedLister;
//!
//! let client = SwiftClient::connect(&config.auth_url, &config.account, &config.key).await?;
//! let pages = SwiftPages::new(client, &config.container, DEFAULT_PAGE_SIZE, config.check_slo);
//! let lister = PagedLister::new(pages);
//! ```

mod args;
mod client;
mod pages;
mod slo;

pub use args::{SwiftConfig, SwiftOpts};
pub use client::{ObjectMetadata, SwiftClient, SwiftObject};
pub use pages::SwiftPages;
pub use slo::{parse_manifest, slo_etag};

/// Default number of objects requested per container listing page
pub const DEFAULT_PAGE_SIZE: usize = 1000;
