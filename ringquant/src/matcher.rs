//! Nearest palette color selection

use crate::{
	distance::{Ciede2000, ColorDifference, EuclideanRgb},
	DistanceMetric, Palette, Result,
};
use palette::Srgb;

/// Palette colors converted once into the representation compared by the metric
#[derive(Debug, Clone)]
enum Points {
	/// sRGB channels for [`DistanceMetric::Euclidean`]
	Euclidean(Vec<<EuclideanRgb as ColorDifference>::Point>),
	/// CIELAB colors for [`DistanceMetric::Ciede2000`]
	Ciede2000(Vec<<Ciede2000 as ColorDifference>::Point>),
}

/// Finds the closest palette entry for colors under a fixed metric.
///
/// The palette colors are converted when the matcher is created,
/// so a single matcher should be reused for every pixel of an image.
/// A matcher holds no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Matcher {
	/// Converted palette colors, in palette order
	points: Points,
}

/// Index of the first point with the lowest rank to `color`
fn closest<D: ColorDifference>(points: &[D::Point], color: Srgb<u8>) -> usize {
	let color = D::point(color);
	let mut best = 0;
	let mut best_rank = f64::INFINITY;
	for (i, &point) in points.iter().enumerate() {
		let rank = D::rank(color, point);
		// strict comparison keeps the first of equally close entries
		if rank < best_rank {
			best = i;
			best_rank = rank;
		}
	}
	best
}

/// Convert every palette color with the given metric
fn points<D: ColorDifference>(palette: &Palette) -> Vec<D::Point> {
	palette.colors().map(D::point).collect()
}

impl Matcher {
	/// Create a matcher for the given palette and metric.
	///
	/// # Errors
	/// Returns [`crate::Error::InvalidPalette`] if the palette is empty.
	pub fn new(palette: &Palette, metric: DistanceMetric) -> Result<Self> {
		if palette.is_empty() {
			return Err(crate::Error::invalid_palette("the palette has no colors"));
		}

		let points = match metric {
			DistanceMetric::Euclidean => Points::Euclidean(points::<EuclideanRgb>(palette)),
			DistanceMetric::Ciede2000 => Points::Ciede2000(points::<Ciede2000>(palette)),
		};

		Ok(Self { points })
	}

	/// The palette index of the entry closest to `color`.
	///
	/// Of several equally close entries, the first in palette order is returned.
	#[must_use]
	pub fn find_closest(&self, color: Srgb<u8>) -> usize {
		match &self.points {
			Points::Euclidean(points) => closest::<EuclideanRgb>(points, color),
			Points::Ciede2000(points) => closest::<Ciede2000>(points, color),
		}
	}
}

/// Find the name of the palette entry closest to `color`.
///
/// This converts the whole palette on every call, so prefer a [`Matcher`] when matching many colors.
///
/// # Errors
/// Returns [`crate::Error::InvalidPalette`] if the palette is empty.
pub fn find_closest<'a>(color: Srgb<u8>, palette: &'a Palette, metric: DistanceMetric) -> Result<&'a str> {
	let matcher = Matcher::new(palette, metric)?;
	Ok(palette.name(matcher.find_closest(color)))
}
