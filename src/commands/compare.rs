//! Compare command - Hamming distance between two stored hashes

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::storage;
use crate::ui;

pub fn run(left: &Path, right: &Path, fast: bool) -> Result<()> {
	let a = storage::load(left)?.hash();
	let b = storage::load(right)?.hash();

	ui::info(&format!(
		"Comparing {} against {}",
		ui::path_link(left, 60),
		ui::path_link(right, 60)
	));
	ui::debug(&format!("Algorithm ids: {} vs {}", a.algorithm_id(), b.algorithm_id()));

	let (distance, normalized) = if fast {
		(a.hamming_distance_fast(&b), a.normalized_hamming_distance_fast(&b))
	} else {
		(a.hamming_distance(&b)?, a.normalized_hamming_distance(&b)?)
	};

	println!();
	println!("  {} {} / {} bits", "Distance:".bright_blue(), distance.to_string().bright_white(), a.bit_resolution());
	println!("  {} {}", "Normalized:".bright_blue(), format!("{:.6}", normalized).bright_white());
	println!();

	if distance == 0 {
		ui::success("Hashes are identical");
	}

	Ok(())
}
