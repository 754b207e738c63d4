use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::DEFAULT_BLOCK_SIZE;

fn parse_block_size(s: &str) -> Result<u32, String> {
	let val: u32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if val == 0 {
		Err("block size must be at least 1".to_string())
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "gridhash",
	author,
	version,
	about = "Perceptual image hash comparison toolkit",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {inspect} {inspect_args}        {inspect_desc}
  {bin} {compare} {compare_args}   {compare_desc}
  {bin} {render}  {render_args}   {render_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "gridhash".bright_blue(),
		inspect = "inspect".yellow(),
		inspect_args = "photo.msgpack",
		inspect_desc = "Print a stored hash".dimmed(),
		compare = "compare".yellow(),
		compare_args = "a.msgpack b.msgpack",
		compare_desc = "Hamming distance between two hashes".dimmed(),
		render = "render".yellow(),
		render_args = "a.msgpack -o a.png",
		render_desc = "Draw the bit grid as an image".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print a stored hash (bit string, resolution, algorithm id)
	Inspect {
		/// Hash sidecar file
		#[arg(value_name = "HASH")]
		path: PathBuf,

		/// Emit machine-readable JSON instead of the human summary
		#[arg(long = "json")]
		json: bool,
	},

	/// Compare two stored hashes by Hamming distance
	Compare {
		/// First hash sidecar file
		#[arg(value_name = "A")]
		left: PathBuf,

		/// Second hash sidecar file
		#[arg(value_name = "B")]
		right: PathBuf,

		/// Skip the algorithm compatibility check
		#[arg(short = 'f', long = "fast")]
		fast: bool,
	},

	/// Render a stored hash as a black and white grid image
	Render {
		/// Hash sidecar file
		#[arg(value_name = "HASH")]
		path: PathBuf,

		/// Output image path (format from extension, e.g. .png)
		#[arg(short = 'o', long = "out")]
		output: PathBuf,

		/// Pixel size of each bit block
		#[arg(short = 'b', long = "block-size", default_value_t = DEFAULT_BLOCK_SIZE, value_parser = parse_block_size)]
		block_size: u32,
	},
}
