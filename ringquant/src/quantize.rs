//! Per-pixel replacement of an image's colors with the closest palette colors

use crate::{DistanceMetric, Histogram, IgnorePolicy, Matcher, Palette, Result};
use palette::{rgb::channels::Rgba, Srgb};
use std::collections::HashMap;

/// The result of quantizing an image
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeOutput {
	/// Replacement pixels, one for each input pixel and in the same order
	pub pixels: Vec<Srgb<u8>>,
	/// The number of pixels assigned to each palette name
	pub histogram: Histogram,
}

/// Match `pixels` against the palette, writing replacements into `output` and tallying `counts`.
///
/// Ignored pixels are left untouched in `output` and are not counted.
fn quantize_chunk(
	matcher: &Matcher,
	palette: &Palette,
	ignore: IgnorePolicy,
	pixels: &[Srgb<u8>],
	output: &mut [Srgb<u8>],
	counts: &mut [u64],
) {
	// Images tend to repeat colors, so memoize each packed sRGB color's palette index
	let mut memo: HashMap<u32, usize> = HashMap::new();

	for (&pixel, out) in pixels.iter().zip(output) {
		if ignore.ignores(pixel) {
			continue;
		}

		let index = *memo
			.entry(pixel.into_u32::<Rgba>())
			.or_insert_with(|| matcher.find_closest(pixel));

		*out = palette.color(index);
		counts[index] += 1;
	}
}

/// Replace every pixel with its closest palette color.
///
/// The histogram counts sum to the number of pixels.
///
/// # Errors
/// Returns [`crate::Error::InvalidPalette`] if the palette is empty, before any pixel is processed.
pub fn quantize(pixels: &[Srgb<u8>], palette: &Palette, metric: DistanceMetric) -> Result<QuantizeOutput> {
	quantize_with(pixels, palette, metric, IgnorePolicy::None)
}

/// Like [`quantize`], but pixels matching `ignore` are copied through unchanged and left out of the histogram.
///
/// # Errors
/// Returns [`crate::Error::InvalidPalette`] if the palette is empty, before any pixel is processed.
pub fn quantize_with(
	pixels: &[Srgb<u8>],
	palette: &Palette,
	metric: DistanceMetric,
	ignore: IgnorePolicy,
) -> Result<QuantizeOutput> {
	let matcher = Matcher::new(palette, metric)?;
	let mut output = pixels.to_vec();
	let mut counts = vec![0; palette.len()];

	quantize_chunk(&matcher, palette, ignore, pixels, &mut output, &mut counts);

	Ok(QuantizeOutput {
		pixels: output,
		histogram: Histogram::from_palette_counts(palette, &counts),
	})
}

/// Replace every pixel with its closest palette color in parallel.
///
/// Produces the same output as [`quantize`].
///
/// # Errors
/// Returns [`crate::Error::InvalidPalette`] if the palette is empty, before any pixel is processed.
#[cfg(feature = "threads")]
pub fn quantize_par(pixels: &[Srgb<u8>], palette: &Palette, metric: DistanceMetric) -> Result<QuantizeOutput> {
	quantize_par_with(pixels, palette, metric, IgnorePolicy::None)
}

/// Like [`quantize_with`], but in parallel.
///
/// # Errors
/// Returns [`crate::Error::InvalidPalette`] if the palette is empty, before any pixel is processed.
#[cfg(feature = "threads")]
pub fn quantize_par_with(
	pixels: &[Srgb<u8>],
	palette: &Palette,
	metric: DistanceMetric,
	ignore: IgnorePolicy,
) -> Result<QuantizeOutput> {
	use rayon::prelude::*;

	/// Smallest number of pixels given to a single task
	const MIN_CHUNK: usize = 4096;

	let matcher = Matcher::new(palette, metric)?;
	let mut output = pixels.to_vec();
	let chunk_size = usize::max(MIN_CHUNK, pixels.len().div_ceil(rayon::current_num_threads()));

	let counts = pixels
		.par_chunks(chunk_size)
		.zip(output.par_chunks_mut(chunk_size))
		.map(|(pixels, output)| {
			let mut counts = vec![0; palette.len()];
			quantize_chunk(&matcher, palette, ignore, pixels, output, &mut counts);
			counts
		})
		.reduce(
			|| vec![0; palette.len()],
			|mut total, counts| {
				for (total, count) in total.iter_mut().zip(counts) {
					*total += count;
				}
				total
			},
		);

	Ok(QuantizeOutput {
		pixels: output,
		histogram: Histogram::from_palette_counts(palette, &counts),
	})
}
