//! Specifies the CLI and handles arg parsing

use clap::{Args, Parser, Subcommand, ValueEnum};
use ringquant::DistanceMetric;
use std::path::PathBuf;

/// Parse a color difference metric by name
fn parse_metric(name: &str) -> Result<DistanceMetric, String> {
	DistanceMetric::from_name(name).ok_or_else(|| {
		let names = DistanceMetric::ALL.map(DistanceMetric::name);
		format!("expected one of: {}", names.join(", "))
	})
}

/// Supported formats for the histogram and cost summary
#[derive(Copy, Clone, ValueEnum)]
pub enum FormatOutput {
	/// Human readable table
	Text,
	/// JSON object with the histogram and the cost breakdown
	Json,
}

/// Map images onto a palette of physical ring colors and estimate the materials cost.
#[derive(Parser)]
#[command(version)]
pub struct Options {
	/// The operation to run
	#[command(subcommand)]
	pub command: Command,

	/// A JSON file with cost settings (rings per bag and bag prices)
	///
	/// Missing keys keep their defaults: 300 rings per bag,
	/// 7.58 per bag for names containing "matte" and 9.12 per bag otherwise.
	#[arg(long, global = true)]
	pub cost_config: Option<PathBuf>,

	/// The number of threads to use
	///
	/// A value of 0 indicates to automatically choose the number of threads.
	#[cfg(feature = "threads")]
	#[arg(short, long, global = true, default_value_t = 0)]
	pub threads: u8,

	/// Print additional information, such as the running time of each step
	#[arg(long, global = true)]
	pub verbose: bool,
}

/// The available operations
#[derive(Subcommand)]
pub enum Command {
	/// Replace every pixel of an image with its closest palette color and estimate the cost
	Apply(ApplyOptions),
	/// Estimate the cost of an image that already only uses palette colors
	Cost(CostOptions),
	/// Derive palette colors from photographs of each ring color
	BuildPalette(BuildPaletteOptions),
	/// Enlarge an image so that each pixel becomes a square block
	Scale(ScaleOptions),
}

/// Options for printing the histogram and cost summary
#[derive(Args)]
pub struct PrintOptions {
	/// The format to print the summary in
	#[arg(short, long, default_value = "text")]
	pub format: FormatOutput,

	/// Print a true color swatch in front of each palette name
	#[arg(short, long)]
	pub colorize: bool,
}

/// Options for the markdown report
#[derive(Args)]
pub struct ReportOptions {
	/// Append a markdown section with the images and cost breakdown to this file
	#[arg(short, long)]
	pub report: Option<PathBuf>,

	/// Text placed in front of every image path in the report
	///
	/// For a Jekyll site this could be "{{ site.baseurl }}{{ page.image_path }}/".
	#[arg(long, default_value = "")]
	pub image_prefix: String,
}

/// Options for the apply command
#[derive(Args)]
pub struct ApplyOptions {
	/// The path to the input image
	pub image: PathBuf,

	/// The palette JSON file, an object of names to 6 digit hex colors
	#[arg(short, long)]
	pub palette: PathBuf,

	/// The color difference metric: "euclidean" or "ciede2000"
	#[arg(short, long, default_value = "ciede2000", value_parser = parse_metric)]
	pub metric: DistanceMetric,

	/// Where to save the quantized image
	///
	/// Defaults to "<image>_<palette>.<ext>" next to the input image.
	#[arg(short, long)]
	pub output: Option<PathBuf>,

	/// Also save a copy of the quantized image where each pixel becomes an N by N block
	#[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
	pub ring_scale: Option<u32>,

	/// Where to save the block scaled image
	///
	/// Defaults to "<image>_rings.<ext>" next to the input image.
	#[arg(long, requires = "ring_scale")]
	pub ring_output: Option<PathBuf>,

	/// Save the histogram of palette names as JSON to this file
	#[arg(long)]
	pub histogram: Option<PathBuf>,

	#[command(flatten)]
	pub print: PrintOptions,

	#[command(flatten)]
	pub report: ReportOptions,
}

/// Options for the cost command
#[derive(Args)]
pub struct CostOptions {
	/// The path to an image containing only palette colors
	pub image: PathBuf,

	/// The palette JSON file the image was made with
	#[arg(short, long)]
	pub palette: PathBuf,

	#[command(flatten)]
	pub print: PrintOptions,

	#[command(flatten)]
	pub report: ReportOptions,
}

/// Options for the build-palette command
#[derive(Args)]
pub struct BuildPaletteOptions {
	/// The palette settings JSON file
	///
	/// Each key is a ring name mapped to an object with "file_path" (photo of the ring),
	/// optional "sample_path" (where to save the masked sample), "white_threshold"
	/// (pixels with all channels above it are background) and "color_hex" (filled in once computed).
	/// The file is updated with every computed color.
	pub settings: PathBuf,

	/// Where to save the palette JSON
	#[arg(short, long)]
	pub output: PathBuf,

	/// Recompute colors that already have a "color_hex"
	#[arg(long)]
	pub recompute: bool,

	/// Do not save the masked sample images
	#[arg(long)]
	pub no_samples: bool,
}

/// Options for the scale command
#[derive(Args)]
pub struct ScaleOptions {
	/// The path to the input image
	pub image: PathBuf,

	/// The width and height of the block each pixel becomes
	#[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
	pub factor: u32,

	/// Where to save the scaled image
	///
	/// Defaults to "<image>_<factor>x<factor>.<ext>" next to the input image.
	#[arg(short, long)]
	pub output: Option<PathBuf>,
}
