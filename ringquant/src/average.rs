//! Average colors of sample images, used to derive palette entries from photographs

use crate::{lab::LabColor, rgb_to_lab, IgnorePolicy};
use palette::{Lab, Srgb};

/// The per-channel mean of the pixels not skipped by `ignore`, rounded down.
///
/// Returns `None` if there are no such pixels.
#[must_use]
pub fn average_color(pixels: &[Srgb<u8>], ignore: IgnorePolicy) -> Option<Srgb<u8>> {
	let mut sum = [0u64; 3];
	let mut count = 0u64;

	for &pixel in pixels.iter().filter(|&&pixel| !ignore.ignores(pixel)) {
		sum[0] += u64::from(pixel.red);
		sum[1] += u64::from(pixel.green);
		sum[2] += u64::from(pixel.blue);
		count += 1;
	}

	if count == 0 {
		return None;
	}

	// the mean of u8 values always fits in a u8
	let [red, green, blue] = sum.map(|s| u8::try_from(s / count).unwrap_or(u8::MAX));
	Some(Srgb::new(red, green, blue))
}

/// The mean CIELAB color of the pixels not skipped by `ignore`
#[must_use]
pub fn average_lab(pixels: &[Srgb<u8>], ignore: IgnorePolicy) -> Option<LabColor> {
	let mut sum = [0.0; 3];
	let mut count = 0u32;

	for &pixel in pixels.iter().filter(|&&pixel| !ignore.ignores(pixel)) {
		let lab = rgb_to_lab(pixel);
		sum[0] += lab.l;
		sum[1] += lab.a;
		sum[2] += lab.b;
		count += 1;
	}

	(count > 0).then(|| {
		let n = f64::from(count);
		Lab::new(sum[0] / n, sum[1] / n, sum[2] / n)
	})
}

/// Copy `pixels`, replacing the ones skipped by `ignore` with `fill`.
///
/// This shows which part of a sample contributes to its average color.
#[must_use]
pub fn masked(pixels: &[Srgb<u8>], ignore: IgnorePolicy, fill: Srgb<u8>) -> Vec<Srgb<u8>> {
	pixels
		.iter()
		.map(|&pixel| if ignore.ignores(pixel) { fill } else { pixel })
		.collect()
}
