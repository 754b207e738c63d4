//! Gridhash - perceptual image hash comparison toolkit
//!
//! A command-line tool for inspecting, comparing, and visualizing
//! perceptual image hashes stored as sidecar files.

use anyhow::Result;
use clap::Parser;

use gridhash::cli::{Cli, Command};
use gridhash::commands;
use gridhash::ui::Log;

fn main() -> Result<()> {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);

	match cli.command {
		Command::Inspect { path, json } => commands::inspect::run(&path, json),
		Command::Compare { left, right, fast } => commands::compare::run(&left, &right, fast),
		Command::Render { path, output, block_size } => {
			commands::render::run(&path, &output, block_size)
		}
	}
}
