//! Fundamental types for group trust verification.
//!
//! WebIDs, RDF terms, in-memory graphs, the vocabulary the checks match on,
//! and the account link / credentials records exchanged with collaborators.

pub mod account;
pub mod error;
pub mod graph;
pub mod term;
pub mod vocab;
pub mod webid;

pub use account::{AccountLink, Credentials};
pub use error::TypesError;
pub use graph::Graph;
pub use term::{Term, Triple};
pub use webid::WebId;
