//! Static Large Object ETag derivation.
//!
//! Swift reports an SLO's listing hash as the MD5 of its manifest, while S3
//! labels a multipart object with `md5(concat(raw part md5s))-<part count>`.
//! The replicator uploads each SLO segment as one part, so recomputing that
//! value from the manifest makes the two sides comparable.

use md5::{Digest, Md5};
use serde::Deserialize;
use verify_core::{Result, VerifyError};

#[derive(Debug, Deserialize)]
struct Segment {
    hash: String,
}

/// Parse a `multipart-manifest=get` body into the ordered segment hashes.
pub fn parse_manifest(key: &str, body: &[u8]) -> Result<Vec<String>> {
    let segments: Vec<Segment> =
        serde_json::from_slice(body).map_err(|e| VerifyError::ManifestDecode {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
    Ok(segments.into_iter().map(|s| s.hash).collect())
}

/// Compute the multipart-style ETag for an SLO from its segment hashes.
pub fn slo_etag(key: &str, segment_hashes: &[String]) -> Result<String> {
    let mut hasher = Md5::new();
    for hash in segment_hashes {
        let raw = hex::decode(hash).map_err(|e| VerifyError::ManifestDecode {
            key: key.to_string(),
            reason: format!("segment hash '{hash}' is not hex: {e}"),
        })?;
        hasher.update(&raw);
    }
    Ok(format!(
        "{}-{}",
        hex::encode(hasher.finalize()),
        segment_hashes.len()
    ))
}
