//! Merge-join of two ascending entry streams.

use crate::{Discrepancy, Entry, EntryStream, Reason, Result, Side, VerifyError};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, info};

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub source_entries: u64,
    pub destination_entries: u64,
    /// Keys present on both sides with equal checksums
    pub matched: u64,
    pub discrepancies: Vec<Discrepancy>,
}

impl Report {
    /// True when both listings agree completely.
    pub fn is_clean(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

/// Wraps one side and rejects keys that do not strictly increase.
struct Ascending<'a, T: EntryStream + ?Sized> {
    stream: &'a mut T,
    side: Side,
    previous: Option<String>,
    count: u64,
}

impl<'a, T: EntryStream + ?Sized> Ascending<'a, T> {
    fn new(stream: &'a mut T, side: Side) -> Self {
        Self {
            stream,
            side,
            previous: None,
            count: 0,
        }
    }

    async fn next(&mut self) -> Result<Option<Entry>> {
        let Some(entry) = self.stream.try_next().await? else {
            return Ok(None);
        };
        if let Some(previous) = &self.previous {
            if entry.key.as_str() <= previous.as_str() {
                return Err(VerifyError::ListingOrder {
                    side: self.side,
                    previous: previous.clone(),
                    key: entry.key,
                });
            }
        }
        self.previous = Some(entry.key.clone());
        self.count += 1;
        Ok(Some(entry))
    }
}

/// Reconcile a source listing against a destination listing.
///
/// Both streams must yield keys in strictly ascending byte order. Each side is
/// pulled exactly once per entry, so memory stays bounded by what the streams
/// themselves buffer plus the discrepancy list.
pub async fn reconcile<S, D>(source: &mut S, dest: &mut D) -> Result<Report>
where
    S: EntryStream + ?Sized,
    D: EntryStream + ?Sized,
{
    let mut src = Ascending::new(source, Side::Source);
    let mut dst = Ascending::new(dest, Side::Destination);
    let mut report = Report::default();

    let mut src_entry = src.next().await?;
    let mut dst_entry = dst.next().await?;

    loop {
        match (src_entry.take(), dst_entry.take()) {
            (None, None) => break,
            (Some(s), Some(d)) => match s.key.cmp(&d.key) {
                Ordering::Equal => {
                    if s.checksum == d.checksum {
                        report.matched += 1;
                    } else {
                        debug!(
                            "Checksum mismatch for '{}': source {} destination {}",
                            s.key, s.checksum, d.checksum
                        );
                        report
                            .discrepancies
                            .push(Discrepancy::new(s.key, Reason::ChecksumMismatch));
                    }
                    src_entry = src.next().await?;
                    dst_entry = dst.next().await?;
                }
                Ordering::Less => {
                    report
                        .discrepancies
                        .push(Discrepancy::new(s.key, Reason::MissingInDestination));
                    src_entry = src.next().await?;
                    dst_entry = Some(d);
                }
                Ordering::Greater => {
                    report
                        .discrepancies
                        .push(Discrepancy::new(d.key, Reason::MissingInSource));
                    src_entry = Some(s);
                    dst_entry = dst.next().await?;
                }
            },
            (Some(s), None) => {
                report
                    .discrepancies
                    .push(Discrepancy::new(s.key, Reason::MissingInDestination));
                src_entry = src.next().await?;
            }
            (None, Some(d)) => {
                report
                    .discrepancies
                    .push(Discrepancy::new(d.key, Reason::MissingInSource));
                dst_entry = dst.next().await?;
            }
        }
    }

    report.source_entries = src.count;
    report.destination_entries = dst.count;

    info!(
        "Reconciled {} source and {} destination entries: {} matched, {} discrepancies",
        report.source_entries,
        report.destination_entries,
        report.matched,
        report.discrepancies.len()
    );

    Ok(report)
}
