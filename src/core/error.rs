//! Typed errors for hash comparison

use thiserror::Error;

/// Errors returned by the checked comparison operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
	#[error("can't compare hash values created by different algorithms (id {left} vs {right})")]
	IncompatibleAlgorithm { left: u64, right: u64 },
}
