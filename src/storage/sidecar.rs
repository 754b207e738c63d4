//! Sidecar file format and I/O

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::Hash;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// On-disk record for a single hash.
///
/// `payload` holds the wire form from [`Hash::to_byte_array`], so files
/// written by any producer of that layout load back unchanged.
#[derive(Debug, Serialize, Deserialize)]
pub struct HashSidecar {
	version: String,
	algorithm_id: u64,
	bit_length: u32,
	payload: Vec<u8>,
}

impl HashSidecar {
	pub fn new(hash: &Hash) -> Self {
		Self {
			version: VERSION.to_string(),
			algorithm_id: hash.algorithm_id(),
			bit_length: hash.bit_resolution(),
			payload: hash.to_byte_array(),
		}
	}

	/// Reconstruct the hash, reversing the wire encoding.
	pub fn hash(&self) -> Hash {
		Hash::from_byte_array(&self.payload, self.bit_length, self.algorithm_id)
	}

	pub fn algorithm_id(&self) -> u64 {
		self.algorithm_id
	}

	pub fn bit_length(&self) -> u32 {
		self.bit_length
	}

	pub fn payload(&self) -> &[u8] {
		&self.payload
	}

	pub fn is_current_version(&self) -> bool {
		self.version == VERSION
	}
}

/// Save a hash sidecar to disk
pub fn save(sidecar: &HashSidecar, path: &Path) -> Result<()> {
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent).context("Failed to create sidecar directory")?;
		}
	}

	let bytes = rmp_serde::to_vec(sidecar).context("Failed to serialize sidecar")?;
	fs::write(path, bytes).context("Failed to write sidecar")?;

	Ok(())
}

/// Load a hash sidecar from disk
pub fn load(path: &Path) -> Result<HashSidecar> {
	let bytes = fs::read(path)
		.with_context(|| format!("Failed to read sidecar: {}", path.display()))?;
	rmp_serde::from_slice(&bytes).context("Failed to deserialize sidecar")
}
