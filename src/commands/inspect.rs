//! Inspect command - print a stored hash

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::storage;
use crate::ui;

pub fn run(path: &Path, json: bool) -> Result<()> {
	let sidecar = storage::load(path)?;
	let hash = sidecar.hash();

	if !sidecar.is_current_version() {
		ui::debug(&format!("Sidecar written by an older version: {}", path.display()));
	}

	if json {
		let record = serde_json::json!({
			"algorithm_id": hash.algorithm_id(),
			"bit_length": hash.bit_resolution(),
			"payload": hex(sidecar.payload()),
		});
		println!("{}", serde_json::to_string_pretty(&record)?);
		return Ok(());
	}

	ui::info(&format!("Inspecting {}", ui::path_link(path, 60)));
	println!();
	println!("  {}", hash.to_string().bright_white());
	println!("  {} {}", "Resolution:".bright_blue(), format!("{} bits", hash.bit_resolution()));
	println!("  {} {}", "Algorithm:".bright_blue(), hash.algorithm_id());
	println!("  {} {}", "Wire bytes:".bright_blue(), hex(sidecar.payload()).dimmed());
	println!();

	Ok(())
}

fn hex(bytes: &[u8]) -> String {
	bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
