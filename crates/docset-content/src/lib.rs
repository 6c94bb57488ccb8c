//! Content snapshot abstraction for docset.
//!
//! This crate provides a [`ContentSnapshot`] trait answering the questions the
//! resolver asks about a content tree, without tying it to a real filesystem.
//! This enables:
//!
//! - **Unit testing** of resolution and site assembly without temp directories
//! - **Backend flexibility** (local checkout, archive, remote listing)
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ContentSnapshot`] trait with `has_root_content()`, `versioned_content()`
//!   and `has_sidebar()` methods
//! - [`VersionContent`] describing the state of one versioned snapshot directory
//! - [`MockSnapshot`] for testing (behind `mock` feature flag)
//!
//! The filesystem implementation lives in `docset-content-fs`.
//!
//! # Example
//!
//! ```ignore
//! use docset_content::{ContentSnapshot, MockSnapshot, VersionContent};
//!
//! let snapshot = MockSnapshot::new()
//!     .with_current("core")
//!     .with_version("core", "1.0");
//!
//! assert!(snapshot.has_root_content("core"));
//! assert_eq!(snapshot.versioned_content("core", "1.0"), VersionContent::Populated);
//! ```

#[cfg(feature = "mock")]
mod mock;
mod snapshot;

#[cfg(feature = "mock")]
pub use mock::MockSnapshot;
pub use snapshot::{ContentSnapshot, VersionContent};
