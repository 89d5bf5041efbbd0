//! Map images onto a palette of physical ring colors and estimate the materials cost.

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
	clippy::pedantic,
	clippy::cargo,
	clippy::use_debug,
	clippy::dbg_macro,
	clippy::todo,
	clippy::unimplemented,
	clippy::unwrap_used,
	clippy::unwrap_in_result,
	clippy::unneeded_field_pattern,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::unnecessary_self_imports,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::string_slice,
	missing_docs,
	clippy::missing_docs_in_private_items,
	rustdoc::all,
	clippy::float_cmp_const,
	clippy::lossy_float_literal
)]
#![allow(clippy::doc_markdown, clippy::module_name_repetitions, clippy::unreadable_literal)]

mod cli;
mod report;
mod settings;

#[allow(clippy::wildcard_imports)]
use cli::*;

use std::{
	fs::{self, OpenOptions},
	io::{self, Write},
	path::{Path, PathBuf},
	process::ExitCode,
	time::Instant,
};

use clap::Parser;
use image::{DynamicImage, RgbImage};
use palette::Srgb;
use report::ReportImages;
use ringquant::{
	CostBreakdown, CostConfig, DistanceMetric, Histogram, IgnorePolicy, LabColor, Palette, QuantizeOutput,
};
use serde::Serialize;
use settings::{PaletteSettings, SampleSettings};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Record the running time of an expression and log the elapsed time
macro_rules! time {
	($name: literal, $func_call: expr) => {{
		let start = Instant::now();
		let result = $func_call;
		info!("{} took {}ms", $name, start.elapsed().as_millis());
		result
	}};
}

/// Everything that can make a command fail
#[derive(Debug, Error)]
enum AppError {
	/// Failed to read or decode an image file
	#[error("failed to load the image {}: {source}", path.display())]
	ImageLoad {
		/// The image path
		path: PathBuf,
		/// The decoding error
		source: image::ImageError,
	},
	/// Failed to encode or write an image file
	#[error("failed to save the image {}: {source}", path.display())]
	ImageSave {
		/// The image path
		path: PathBuf,
		/// The encoding error
		source: image::ImageError,
	},
	/// A scaled image would not fit in `u32` dimensions
	#[error("the resulting image would be too large")]
	ImageTooLarge,
	/// Failed to read a text file
	#[error("failed to read {}: {source}", path.display())]
	Read {
		/// The file path
		path: PathBuf,
		/// The IO error
		source: io::Error,
	},
	/// Failed to write a text file
	#[error("failed to write {}: {source}", path.display())]
	Write {
		/// The file path
		path: PathBuf,
		/// The IO error
		source: io::Error,
	},
	/// A JSON file could not be parsed
	#[error("failed to parse {}: {source}", path.display())]
	Parse {
		/// The file path
		path: PathBuf,
		/// The parse error
		source: serde_json::Error,
	},
	/// Failed to format output as JSON
	#[error("failed to format JSON: {0}")]
	Format(#[from] serde_json::Error),
	/// Every pixel of a ring photograph was treated as background
	#[error("no pixels of {name} remain after ignoring pixels brighter than {threshold}")]
	EmptySample {
		/// The ring name
		name: String,
		/// The white threshold of the sample
		threshold: u8,
	},
	/// Quantization or cost estimation failed
	#[error(transparent)]
	Quantize(#[from] ringquant::Error),
	/// The thread pool could not be created
	#[cfg(feature = "threads")]
	#[error("failed to create the thread pool: {0}")]
	ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

fn main() -> ExitCode {
	let options = Options::parse();
	init_logging(options.verbose);

	// Returning Result<_> uses Debug printing instead of Display
	if let Err(e) = run(&options) {
		eprintln!("{e}");
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}

/// Log to stderr, filtered by `RUST_LOG` or else by the verbose flag
fn init_logging(verbose: bool) {
	let default = if verbose { "ringquant=info" } else { "ringquant=warn" };
	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
		.with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
		.init();
}

/// Builds a thread pool and then runs the command inside it
#[cfg(feature = "threads")]
fn run(options: &Options) -> Result<(), AppError> {
	let pool = rayon::ThreadPoolBuilder::new()
		.num_threads(usize::from(options.threads))
		.build()?;

	pool.install(|| run_command(options))
}

/// Runs the command on a single thread
#[cfg(not(feature = "threads"))]
fn run(options: &Options) -> Result<(), AppError> {
	run_command(options)
}

/// Dispatch to the selected subcommand
fn run_command(options: &Options) -> Result<(), AppError> {
	match &options.command {
		Command::Apply(apply) => run_apply(apply, options),
		Command::Cost(cost) => run_cost(cost, options),
		Command::BuildPalette(build) => run_build_palette(build),
		Command::Scale(scale) => run_scale(scale),
	}
}

/// Quantize an image, save the results and print the cost
fn run_apply(apply: &ApplyOptions, options: &Options) -> Result<(), AppError> {
	let palette = load_palette(&apply.palette)?;
	let cost_config = load_cost_config(options.cost_config.as_deref())?;
	let image = time!("Image loading", load_image(&apply.image))?.into_rgb8();
	let (width, height) = image.dimensions();
	let metric = apply.metric;

	info!(
		"Quantizing {width}x{height} image to {} palette colors using {}",
		palette.len(),
		metric.name()
	);

	let QuantizeOutput { pixels, histogram } = time!(
		"Quantization",
		quantize(ringquant::srgb_pixels(&image), &palette, metric, options)
	)?;
	let cost = cost_config.estimate(&histogram)?;

	let quantized = ringquant::rgb_image(width, height, pixels).ok_or(AppError::ImageTooLarge)?;
	let palette_stem = apply.palette.file_stem().unwrap_or_default().to_string_lossy();
	let output = apply
		.output
		.clone()
		.unwrap_or_else(|| derived_path(&apply.image, &palette_stem));
	time!("Image saving", save_image(&quantized, &output))?;

	let rings = match apply.ring_scale {
		Some(factor) => {
			let path = apply
				.ring_output
				.clone()
				.unwrap_or_else(|| derived_path(&apply.image, "rings"));
			save_image(&scale_blocks(&quantized, factor)?, &path)?;
			Some(path)
		},
		None => None,
	};

	if let Some(path) = &apply.histogram {
		write_file(path, &serde_json::to_string_pretty(&histogram)?)?;
	}

	print_summary(&histogram, &cost, &palette, &apply.print)?;

	if let Some(report) = &apply.report.report {
		let source = file_name(&apply.image);
		let applied = file_name(&output);
		let rings = rings.as_deref().map(file_name);
		let images = ReportImages {
			source: &source,
			palette_applied: &applied,
			rings: rings.as_deref(),
		};
		append_report(report, &apply.image, &apply.report.image_prefix, &images, &cost)?;
	}

	Ok(())
}

/// Count an already quantized image and print the cost
fn run_cost(cost_options: &CostOptions, options: &Options) -> Result<(), AppError> {
	let palette = load_palette(&cost_options.palette)?;
	let cost_config = load_cost_config(options.cost_config.as_deref())?;
	let image = time!("Image loading", load_image(&cost_options.image))?.into_rgb8();

	let histogram = time!(
		"Counting",
		ringquant::count_palettized(ringquant::srgb_pixels(&image), &palette)
	)?;
	let cost = cost_config.estimate(&histogram)?;

	print_summary(&histogram, &cost, &palette, &cost_options.print)?;

	if let Some(report) = &cost_options.report.report {
		let name = file_name(&cost_options.image);
		let images = ReportImages {
			source: &name,
			palette_applied: &name,
			rings: None,
		};
		append_report(report, &cost_options.image, &cost_options.report.image_prefix, &images, &cost)?;
	}

	Ok(())
}

/// Fill in missing sample colors, update the settings file and save the palette
fn run_build_palette(build: &BuildPaletteOptions) -> Result<(), AppError> {
	let mut settings = PaletteSettings::from_json(&read_file(&build.settings)?).map_err(|source| AppError::Parse {
		path: build.settings.clone(),
		source,
	})?;

	for i in 0..settings.rings.len() {
		let (name, sample) = &settings.rings[i];
		if sample.color_hex.is_some() && !build.recompute {
			continue;
		}

		let (color, lab) = time!("Sample averaging", sample_color(name, sample, !build.no_samples))?;
		let hex = ringquant::to_hex(color);
		println!("{name}: {hex} (L* {:.2}, a* {:.2}, b* {:.2})", lab.l, lab.a, lab.b);

		settings.rings[i].1.color_hex = Some(hex);
		write_file(&build.settings, &settings.to_json()?)?;
	}

	let palette = Palette::from_hex(
		settings
			.rings
			.iter()
			.map(|(name, sample)| (name.as_str(), sample.color_hex.as_deref().unwrap_or_default())),
	)?;

	write_file(&build.output, &palette.to_json()?)
}

/// Enlarge an image into pixel blocks
fn run_scale(scale: &ScaleOptions) -> Result<(), AppError> {
	let image = load_image(&scale.image)?.into_rgb8();
	let factor = scale.factor;
	let output = scale
		.output
		.clone()
		.unwrap_or_else(|| derived_path(&scale.image, &format!("{factor}x{factor}")));

	save_image(&scale_blocks(&image, factor)?, &output)
}

/// Quantize on the current thread pool, or sequentially if it only has one thread
#[cfg(feature = "threads")]
fn quantize(
	pixels: &[Srgb<u8>],
	palette: &Palette,
	metric: DistanceMetric,
	options: &Options,
) -> ringquant::Result<QuantizeOutput> {
	if options.threads == 1 {
		ringquant::quantize(pixels, palette, metric)
	} else {
		ringquant::quantize_par(pixels, palette, metric)
	}
}

/// Quantize sequentially
#[cfg(not(feature = "threads"))]
fn quantize(
	pixels: &[Srgb<u8>],
	palette: &Palette,
	metric: DistanceMetric,
	_options: &Options,
) -> ringquant::Result<QuantizeOutput> {
	ringquant::quantize(pixels, palette, metric)
}

/// Average the non-background pixels of a ring photograph in sRGB and in CIELAB,
/// saving the masked sample if requested
fn sample_color(
	name: &str,
	sample: &SampleSettings,
	save_sample: bool,
) -> Result<(Srgb<u8>, LabColor), AppError> {
	let threshold = sample.white_threshold;
	let ignore = IgnorePolicy::White { threshold };
	let image = load_image(&sample.file_path)?.into_rgb8();
	let pixels = ringquant::srgb_pixels(&image);

	let (Some(color), Some(lab)) = (ringquant::average_color(pixels, ignore), ringquant::average_lab(pixels, ignore))
	else {
		return Err(AppError::EmptySample {
			name: name.to_owned(),
			threshold,
		});
	};

	if let Some(path) = sample.sample_path.as_ref().filter(|_| save_sample) {
		save_image(&sample_image(&image, ignore, color)?, path)?;
	}

	Ok((color, lab))
}

/// The photograph with background pixels blacked out, next to a block of its average color
fn sample_image(image: &RgbImage, ignore: IgnorePolicy, color: Srgb<u8>) -> Result<RgbImage, AppError> {
	let (width, height) = image.dimensions();
	let masked = ringquant::masked(ringquant::srgb_pixels(image), ignore, Srgb::new(0, 0, 0));
	let masked = ringquant::rgb_image(width, height, masked).ok_or(AppError::ImageTooLarge)?;
	let total_width = width.checked_mul(2).ok_or(AppError::ImageTooLarge)?;
	let swatch = image::Rgb([color.red, color.green, color.blue]);

	Ok(RgbImage::from_fn(total_width, height, |x, y| {
		if x < width {
			*masked.get_pixel(x, y)
		} else {
			swatch
		}
	}))
}

/// Enlarge an image so each pixel becomes a `factor` by `factor` block
fn scale_blocks(image: &RgbImage, factor: u32) -> Result<RgbImage, AppError> {
	let (width, height) = image.dimensions();
	let (Some(scaled_width), Some(scaled_height)) = (width.checked_mul(factor), height.checked_mul(factor)) else {
		return Err(AppError::ImageTooLarge);
	};

	Ok(RgbImage::from_fn(scaled_width, scaled_height, |x, y| {
		*image.get_pixel(x / factor, y / factor)
	}))
}

/// The summary printed to stdout in JSON format
#[derive(Serialize)]
struct Summary<'a> {
	/// Pixels per palette name
	histogram: &'a Histogram,
	/// Bags and cost per palette name
	cost: &'a CostBreakdown,
}

/// Print the histogram and cost breakdown in the requested format
fn print_summary(
	histogram: &Histogram,
	cost: &CostBreakdown,
	palette: &Palette,
	print: &PrintOptions,
) -> Result<(), AppError> {
	match print.format {
		FormatOutput::Text => print!("{}", report::text_summary(cost, palette, print.colorize)),
		FormatOutput::Json => println!("{}", serde_json::to_string_pretty(&Summary { histogram, cost })?),
	}
	Ok(())
}

/// Append a markdown section named after `image` to the report file
fn append_report(
	report: &Path,
	image: &Path,
	prefix: &str,
	images: &ReportImages,
	cost: &CostBreakdown,
) -> Result<(), AppError> {
	let name = image.file_stem().unwrap_or_default().to_string_lossy();
	let section = report::markdown_section(&name, prefix, images, cost);

	OpenOptions::new()
		.create(true)
		.append(true)
		.open(report)
		.and_then(|mut file| file.write_all(section.as_bytes()))
		.map_err(|source| AppError::Write {
			path: report.to_owned(),
			source,
		})
}

/// `<dir>/<stem>_<suffix>.<ext>` for the input path `<dir>/<stem>.<ext>`
fn derived_path(path: &Path, suffix: &str) -> PathBuf {
	let stem = path.file_stem().unwrap_or_default().to_string_lossy();
	let mut name = format!("{stem}_{suffix}");
	if let Some(ext) = path.extension() {
		name.push('.');
		name.push_str(&ext.to_string_lossy());
	}
	path.with_file_name(name)
}

/// The final component of a path as a string
fn file_name(path: &Path) -> String {
	path.file_name().unwrap_or_default().to_string_lossy().into_owned()
}

/// Load the image at the given path
fn load_image(path: &Path) -> Result<DynamicImage, AppError> {
	image::open(path).map_err(|source| AppError::ImageLoad {
		path: path.to_owned(),
		source,
	})
}

/// Save an image, choosing the format from the file extension
fn save_image(image: &RgbImage, path: &Path) -> Result<(), AppError> {
	image.save(path).map_err(|source| AppError::ImageSave {
		path: path.to_owned(),
		source,
	})
}

/// Read a whole text file
fn read_file(path: &Path) -> Result<String, AppError> {
	fs::read_to_string(path).map_err(|source| AppError::Read {
		path: path.to_owned(),
		source,
	})
}

/// Replace the contents of a text file
fn write_file(path: &Path, contents: &str) -> Result<(), AppError> {
	fs::write(path, contents).map_err(|source| AppError::Write {
		path: path.to_owned(),
		source,
	})
}

/// Load a palette JSON file
fn load_palette(path: &Path) -> Result<Palette, AppError> {
	Palette::from_json(&read_file(path)?).map_err(|source| AppError::Parse {
		path: path.to_owned(),
		source,
	})
}

/// Load cost settings, or the defaults if no file was given
fn load_cost_config(path: Option<&Path>) -> Result<CostConfig, AppError> {
	let Some(path) = path else {
		return Ok(CostConfig::default());
	};

	CostConfig::from_json(&read_file(path)?).map_err(|source| AppError::Parse {
		path: path.to_owned(),
		source,
	})
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
	use super::*;

	/// A fresh directory under the system temp directory
	fn temp_dir(test: &str) -> PathBuf {
		let dir = std::env::temp_dir().join(format!("ringquant-{test}-{}", std::process::id()));
		let _ = fs::remove_dir_all(&dir);
		fs::create_dir_all(&dir).unwrap();
		dir
	}

	#[test]
	fn derived_paths() {
		assert_eq!(
			derived_path(Path::new("img/dragon.bmp"), "ring_lord"),
			PathBuf::from("img/dragon_ring_lord.bmp")
		);
		assert_eq!(derived_path(Path::new("dragon"), "2x2"), PathBuf::from("dragon_2x2"));
	}

	#[test]
	fn blocks_repeat_pixels() {
		let mut image = RgbImage::new(2, 1);
		image.put_pixel(1, 0, image::Rgb([9, 8, 7]));

		let scaled = scale_blocks(&image, 2).unwrap();
		assert_eq!(scaled.dimensions(), (4, 2));
		assert_eq!(*scaled.get_pixel(0, 1), image::Rgb([0, 0, 0]));
		assert_eq!(*scaled.get_pixel(2, 0), image::Rgb([9, 8, 7]));
		assert_eq!(*scaled.get_pixel(3, 1), image::Rgb([9, 8, 7]));

		assert_eq!(scale_blocks(&image, 1).unwrap(), image);
		assert!(matches!(scale_blocks(&image, u32::MAX), Err(AppError::ImageTooLarge)));
	}

	#[test]
	fn sample_image_masks_background() {
		let mut image = RgbImage::from_pixel(2, 1, image::Rgb([250, 250, 250]));
		image.put_pixel(0, 0, image::Rgb([100, 20, 20]));

		let color = Srgb::new(100, 20, 20);
		let sample = sample_image(&image, IgnorePolicy::white(), color).unwrap();
		assert_eq!(sample.dimensions(), (4, 1));
		assert_eq!(*sample.get_pixel(0, 0), image::Rgb([100, 20, 20]));
		assert_eq!(*sample.get_pixel(1, 0), image::Rgb([0, 0, 0]));
		assert_eq!(*sample.get_pixel(2, 0), image::Rgb([100, 20, 20]));
		assert_eq!(*sample.get_pixel(3, 0), image::Rgb([100, 20, 20]));
	}

	#[test]
	fn missing_cost_config_uses_defaults() {
		assert_eq!(load_cost_config(None).unwrap(), CostConfig::default());
	}

	#[test]
	fn metric_names_parse() {
		let parse = |metric: &str| {
			Options::try_parse_from(["ringquant", "apply", "in.png", "-p", "palette.json", "-m", metric])
		};

		let Command::Apply(apply) = parse("euclidean").unwrap().command else {
			panic!("expected the apply command");
		};
		assert_eq!(apply.metric, DistanceMetric::Euclidean);
		assert!(parse("cie76").is_err());
	}

	#[test]
	#[cfg(feature = "png")]
	fn apply_then_cost_writes_outputs() {
		let dir = temp_dir("apply");

		let mut photo = RgbImage::new(2, 1);
		photo.put_pixel(0, 0, image::Rgb([200, 30, 40]));
		photo.put_pixel(1, 0, image::Rgb([20, 30, 180]));
		photo.save(dir.join("photo.png")).unwrap();

		fs::write(dir.join("palette.json"), r#"{ "red": "FF0000", "blue matte": "0000FF" }"#).unwrap();

		let path = |file: &str| dir.join(file).to_string_lossy().into_owned();
		let apply = Options::try_parse_from([
			"ringquant".to_owned(),
			"apply".to_owned(),
			path("photo.png"),
			"--palette".to_owned(),
			path("palette.json"),
			"--ring-scale".to_owned(),
			"2".to_owned(),
			"--histogram".to_owned(),
			path("histogram.json"),
			"--report".to_owned(),
			path("report.md"),
			"--format".to_owned(),
			"json".to_owned(),
		])
		.unwrap();
		run_command(&apply).unwrap();

		let quantized = image::open(dir.join("photo_palette.png")).unwrap().into_rgb8();
		assert_eq!(quantized.dimensions(), (2, 1));
		assert_eq!(*quantized.get_pixel(0, 0), image::Rgb([255, 0, 0]));
		assert_eq!(*quantized.get_pixel(1, 0), image::Rgb([0, 0, 255]));

		let rings = image::open(dir.join("photo_rings.png")).unwrap().into_rgb8();
		assert_eq!(rings.dimensions(), (4, 2));
		assert_eq!(*rings.get_pixel(3, 1), image::Rgb([0, 0, 255]));

		let histogram: serde_json::Value =
			serde_json::from_str(&fs::read_to_string(dir.join("histogram.json")).unwrap()).unwrap();
		assert_eq!(histogram, serde_json::json!({ "red": 1, "blue matte": 1 }));

		let report = fs::read_to_string(dir.join("report.md")).unwrap();
		assert!(report.starts_with("## photo\n"));
		assert!(report.contains("src=\"photo_palette.png\""));
		assert!(report.contains("src=\"photo_rings.png\""));
		assert!(report.contains("Total Cost: $16.70\n"));

		let cost = Options::try_parse_from([
			"ringquant".to_owned(),
			"cost".to_owned(),
			path("photo_palette.png"),
			"--palette".to_owned(),
			path("palette.json"),
			"--report".to_owned(),
			path("report.md"),
		])
		.unwrap();
		run_command(&cost).unwrap();

		let report = fs::read_to_string(dir.join("report.md")).unwrap();
		assert_eq!(report.matches("Total Cost: $16.70\n").count(), 2);
		assert!(report.contains("## photo_palette\n"));

		let off_palette = Options::try_parse_from([
			"ringquant".to_owned(),
			"cost".to_owned(),
			path("photo.png"),
			"--palette".to_owned(),
			path("palette.json"),
		])
		.unwrap();
		assert!(matches!(
			run_command(&off_palette),
			Err(AppError::Quantize(ringquant::Error::UnknownColor { .. }))
		));

		fs::remove_dir_all(dir).unwrap();
	}

	#[test]
	#[cfg(feature = "png")]
	fn sample_color_averages_in_both_spaces() {
		let dir = temp_dir("sample-color");

		let mut photo = RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]));
		photo.put_pixel(0, 0, image::Rgb([0, 0, 0]));
		photo.put_pixel(1, 1, image::Rgb([100, 100, 100]));
		photo.save(dir.join("grey.png")).unwrap();

		let sample = SampleSettings {
			color_hex: None,
			file_path: dir.join("grey.png"),
			sample_path: None,
			white_threshold: 180,
		};
		let (color, lab) = sample_color("grey", &sample, false).unwrap();
		assert_eq!(color, Srgb::new(50, 50, 50));

		let expected = ringquant::rgb_to_lab(Srgb::new(100, 100, 100)).l / 2.0;
		assert!((lab.l - expected).abs() < 1e-9);

		RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]))
			.save(dir.join("white.png"))
			.unwrap();
		let blank = SampleSettings {
			file_path: dir.join("white.png"),
			..sample
		};
		assert!(matches!(
			sample_color("white", &blank, false),
			Err(AppError::EmptySample { threshold: 180, .. })
		));

		fs::remove_dir_all(dir).unwrap();
	}

	#[test]
	#[cfg(feature = "png")]
	fn build_palette_fills_missing_colors() {
		let dir = temp_dir("build-palette");

		let mut photo = RgbImage::from_pixel(4, 4, image::Rgb([255, 255, 255]));
		photo.put_pixel(1, 1, image::Rgb([10, 20, 200]));
		photo.put_pixel(2, 2, image::Rgb([20, 30, 210]));
		photo.save(dir.join("blue.png")).unwrap();

		let settings = PaletteSettings {
			rings: vec![
				(
					"silver".to_owned(),
					SampleSettings {
						color_hex: Some("C0C0C0".to_owned()),
						file_path: dir.join("missing.png"),
						sample_path: None,
						white_threshold: 180,
					},
				),
				(
					"blue".to_owned(),
					SampleSettings {
						color_hex: None,
						file_path: dir.join("blue.png"),
						sample_path: Some(dir.join("blue_sample.png")),
						white_threshold: 180,
					},
				),
			],
		};
		let settings_path = dir.join("settings.json");
		fs::write(&settings_path, settings.to_json().unwrap()).unwrap();

		let build = BuildPaletteOptions {
			settings: settings_path.clone(),
			output: dir.join("palette.json"),
			recompute: false,
			no_samples: false,
		};
		run_build_palette(&build).unwrap();

		let palette = Palette::from_json(&fs::read_to_string(dir.join("palette.json")).unwrap()).unwrap();
		assert_eq!(palette.iter().collect::<Vec<_>>(), [
			("silver", Srgb::new(192, 192, 192)),
			("blue", Srgb::new(15, 25, 205)),
		]);

		let updated = PaletteSettings::from_json(&fs::read_to_string(&settings_path).unwrap()).unwrap();
		assert_eq!(updated.rings[1].1.color_hex.as_deref(), Some("0F19CD"));

		let sample = image::open(dir.join("blue_sample.png")).unwrap().into_rgb8();
		assert_eq!(sample.dimensions(), (8, 4));

		fs::remove_dir_all(dir).unwrap();
	}
}
