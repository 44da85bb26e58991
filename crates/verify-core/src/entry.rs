//! Listing entries and reconciliation findings.

use serde::Serialize;
use std::fmt;

/// One listed object, as seen by the reconciler.
///
/// `key` is already expressed in the source namespace and `checksum` is the
/// value to compare (verbatim from the listing, or derived from a manifest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub checksum: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, checksum: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            checksum: checksum.into(),
        }
    }
}

/// Which listing an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Source,
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Destination => write!(f, "destination"),
        }
    }
}

/// Why a key was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// Present in the Swift container, absent from the S3 bucket
    MissingInDestination,
    /// Present in the S3 bucket, absent from the Swift container
    MissingInSource,
    /// Present on both sides with different ETags
    ChecksumMismatch,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::MissingInDestination => write!(f, "missing in S3"),
            Reason::MissingInSource => write!(f, "missing in Swift"),
            Reason::ChecksumMismatch => write!(f, "ETag mismatch"),
        }
    }
}

/// A single reconciliation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub key: String,
    pub reason: Reason,
}

impl Discrepancy {
    pub fn new(key: impl Into<String>, reason: Reason) -> Self {
        Self {
            key: key.into(),
            reason,
        }
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.reason)
    }
}
