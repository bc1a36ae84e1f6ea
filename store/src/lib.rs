//! Storage traits for WebID/account links.
//!
//! The group trust checks depend only on [`LinkStore`]. Persistent backends
//! live elsewhere; [`MemoryLinkStore`] covers configuration-driven setups.

pub mod error;
pub mod link;
pub mod memory;

pub use error::StoreError;
pub use link::LinkStore;
pub use memory::MemoryLinkStore;
