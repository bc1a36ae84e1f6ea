//! Nullable infrastructure for deterministic testing.
//!
//! The group trust checks reach the outside world through two seams: the
//! graph fetcher and the link store. This crate provides test-friendly
//! implementations of both that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Record how they were used
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod fetcher;
pub mod store;

pub use fetcher::NullGraphFetcher;
pub use store::NullLinkStore;
