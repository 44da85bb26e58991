//! S3 side of swift-s3-verify.
//!
//! swift-s3-sync stores a replicated container under a routing prefix derived
//! from the Swift account and container names. This crate lists only that
//! prefix and strips it, so the keys it yields are directly comparable with
//! Swift object names.

mod args;
mod client;
mod pages;
mod prefix;

pub use args::{S3Config, S3Opts};
pub use client::{S3Client, S3Object};
pub use pages::S3Pages;
pub use prefix::{sync_account, sync_prefix};
