//! Listing reconciliation for swift-s3-verify.
//!
//! This crate holds the store-agnostic half of the verifier:
//!
//! - [`PageSource`]: the contract a store implements to hand out one page of
//!   raw listing items at a time and turn each item into an [`Entry`]
//! - [`PagedLister`]: a marker-based cursor that drives a [`PageSource`] and
//!   yields entries lazily through [`EntryStream::try_next`]
//! - [`reconcile`]: a merge-join over two ascending entry streams that
//!   produces the ordered list of [`Discrepancy`] values
//!
//! # Example
//!
//! ```ignore
//! use verify_core::{reconcile, PagedLister};
//!
//! let mut source = PagedLister::new(swift_pages);
//! let mut dest = PagedLister::new(s3_pages);
//!
//! let report = reconcile(&mut source, &mut dest).await?;
//! for d in &report.discrepancies {
//!     println!("{}: {}", d.key, d.reason);
//! }
//! ```

mod entry;
mod error;
mod lister;
mod reconcile;


pub use entry::{Discrepancy, Entry, Reason, Side};
pub use error::{Result, VerifyError};
pub use lister::{EntryStream, PageSource, PagedLister};
pub use reconcile::{reconcile, Report};
