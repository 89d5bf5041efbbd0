//! Map images onto a fixed palette of physical colors and estimate the materials needed.
//!
//! Every pixel is replaced by the perceptually closest palette color,
//! and the resulting counts per palette name are turned into bags of rings and a total cost.
//!
//! # Examples
//!
//! ## Quantize an image file and price the result.
//!
//! ```no_run
//! use ringquant::{CostConfig, DistanceMetric, Palette};
//!
//! let palette = Palette::from_json(&std::fs::read_to_string("palette.json").unwrap()).unwrap();
//! let image = image::open("some image").unwrap().into_rgb8();
//!
//! let output = ringquant::quantize(ringquant::srgb_pixels(&image), &palette, DistanceMetric::Ciede2000).unwrap();
//! let cost = CostConfig::default().estimate(&output.histogram).unwrap();
//! println!("{:.2}", cost.total_cost);
//! ```
//!
//! ## Find the closest palette entry for a single color.
//!
//! ```
//! use palette::Srgb;
//! use ringquant::{DistanceMetric, Palette};
//!
//! let palette = Palette::from_hex([("red", "FF0000"), ("blue", "0000FF")]).unwrap();
//! let name = ringquant::find_closest(Srgb::new(200, 30, 40), &palette, DistanceMetric::Ciede2000).unwrap();
//! assert_eq!(name, "red");
//! ```
//!
//! # Metrics
//!
//! [`DistanceMetric::Euclidean`] compares raw sRGB channels. It is cheap, but perceptually crude.
//!
//! [`DistanceMetric::Ciede2000`] converts colors to CIELAB (D65) and uses the CIEDE2000 color difference,
//! which tracks perceived differences much more closely, especially for blues and near-neutral colors.
//! Palette colors are converted once per [`Matcher`], not once per pixel.
//!
//! # Ties
//!
//! When several palette entries are equally close to a color, the first one in palette order is chosen.
//! Palette order is the order of the JSON object or of the entries given to [`Palette::new`].

#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::cargo)]
#![warn(clippy::use_debug, clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![warn(clippy::unwrap_used, clippy::unwrap_in_result)]
#![warn(clippy::unneeded_field_pattern, clippy::rest_pat_in_fully_bound_structs)]
#![warn(clippy::unnecessary_self_imports)]
#![warn(clippy::str_to_string, clippy::string_to_string, clippy::string_slice)]
#![warn(missing_docs, clippy::missing_docs_in_private_items, rustdoc::all)]
#![warn(clippy::float_cmp_const, clippy::lossy_float_literal)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::unreadable_literal)]

use image::RgbImage;
use palette::Srgb;

mod average;
mod cost;
mod distance;
mod error;
mod gamut;
mod histogram;
mod ignore;
mod lab;
mod matcher;
mod quantize;

pub use average::{average_color, average_lab, masked};
pub use cost::{bags_needed, estimate, CostBreakdown, CostConfig, CostLine, PriceRule, PriceTable};
pub use distance::{ciede2000, euclidean_rgb, DistanceMetric};
pub use error::{Error, Result};
pub use gamut::{parse_hex, to_hex, Palette};
pub use histogram::{count_palettized, Histogram};
pub use ignore::IgnorePolicy;
pub use lab::{normalized_rgb_to_lab, rgb_to_lab, LabColor};
pub use matcher::{find_closest, Matcher};
#[cfg(feature = "threads")]
pub use quantize::{quantize_par, quantize_par_with};
pub use quantize::{quantize, quantize_with, QuantizeOutput};

/// View the pixels of an image as sRGB colors
#[must_use]
pub fn srgb_pixels(image: &RgbImage) -> &[Srgb<u8>] {
	palette::cast::from_component_slice(image.as_raw())
}

/// Build an image from sRGB pixels in row-major order.
///
/// Returns `None` if `pixels` does not hold exactly `width * height` colors.
#[must_use]
pub fn rgb_image(width: u32, height: u32, pixels: Vec<Srgb<u8>>) -> Option<RgbImage> {
	let len = usize::try_from(width).ok()?.checked_mul(usize::try_from(height).ok()?)?;
	if pixels.len() != len {
		return None;
	}
	RgbImage::from_raw(width, height, palette::cast::into_component_vec(pixels))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn image_round_trip() {
		let mut image = RgbImage::new(3, 2);
		image.put_pixel(2, 1, image::Rgb([1, 2, 3]));

		let pixels = srgb_pixels(&image).to_vec();
		assert_eq!(pixels.len(), 6);
		assert_eq!(pixels[5], Srgb::new(1, 2, 3));

		assert_eq!(rgb_image(3, 2, pixels), Some(image));
	}

	#[test]
	fn image_needs_exact_pixel_count() {
		let pixels = vec![Srgb::new(1, 2, 3); 6];
		assert_eq!(rgb_image(2, 2, pixels.clone()), None);
		assert_eq!(rgb_image(4, 2, pixels.clone()), None);
		assert_eq!(rgb_image(u32::MAX, u32::MAX, pixels), None);
		assert_eq!(rgb_image(0, 0, Vec::new()).map(|image| image.dimensions()), Some((0, 0)));
	}
}
