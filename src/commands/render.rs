//! Render command - draw a stored hash as a bit grid image

use anyhow::{Context, Result};
use std::path::Path;

use crate::storage;
use crate::ui;

pub fn run(path: &Path, output: &Path, block_size: u32) -> Result<()> {
	let hash = storage::load(path)?.hash();

	ui::debug(&format!(
		"Rendering {} bits at block size {}",
		hash.bit_resolution(),
		block_size
	));

	let img = hash.to_image(block_size);
	if img.width() == 0 {
		ui::warn("Hash has no renderable bits");
		return Ok(());
	}

	img.save(output)
		.with_context(|| format!("Failed to write image: {}", output.display()))?;

	ui::success(&format!(
		"Wrote {} ({}x{})",
		ui::path_link(output, 60),
		img.width(),
		img.height()
	));

	Ok(())
}
