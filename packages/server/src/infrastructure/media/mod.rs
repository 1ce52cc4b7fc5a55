//! Media store implementations.
//!
//! - `local`: writes decoded images to a directory served under `/media`

pub mod local;

pub use local::LocalMediaStore;
