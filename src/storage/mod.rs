//! # Storage
//!
//! Sidecar persistence for hashes.

pub mod sidecar;

pub use sidecar::{load, save, HashSidecar};
