//! Color difference metrics used to rank palette entries

use crate::lab::LabColor;
use palette::Srgb;

/// The available color difference metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
	/// Euclidean distance between raw sRGB channels
	Euclidean,
	/// CIEDE2000 color difference between CIELAB colors
	#[default]
	Ciede2000,
}

impl DistanceMetric {
	/// All metrics, in the order they are listed to users
	pub const ALL: [Self; 2] = [Self::Euclidean, Self::Ciede2000];

	/// The lowercase configuration name of this metric
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Euclidean => "euclidean",
			Self::Ciede2000 => "ciede2000",
		}
	}

	/// Look up a metric by its configuration name (case-insensitive)
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|metric| metric.name().eq_ignore_ascii_case(name))
	}

	/// The distance between two sRGB colors under this metric
	#[must_use]
	pub fn distance(self, x: Srgb<u8>, y: Srgb<u8>) -> f64 {
		match self {
			Self::Euclidean => euclidean_rgb(x, y),
			Self::Ciede2000 => ciede2000(crate::rgb_to_lab(x), crate::rgb_to_lab(y)),
		}
	}
}

/// Ranking function for one color representation.
///
/// `rank` only needs to order pairs the same way as the reported distance,
/// so it may skip a final square root.
pub(crate) trait ColorDifference {
	/// The color representation compared by this metric
	type Point: Copy + Send + Sync;

	/// Convert an sRGB color into the compared representation
	fn point(color: Srgb<u8>) -> Self::Point;

	/// A value that orders pairs identically to the distance
	fn rank(x: Self::Point, y: Self::Point) -> f64;
}

/// Euclidean distance in sRGB
pub(crate) struct EuclideanRgb;

impl ColorDifference for EuclideanRgb {
	type Point = [i32; 3];

	fn point(color: Srgb<u8>) -> Self::Point {
		[color.red, color.green, color.blue].map(i32::from)
	}

	fn rank(x: Self::Point, y: Self::Point) -> f64 {
		let dr = x[0] - y[0];
		let dg = x[1] - y[1];
		let db = x[2] - y[2];
		f64::from(dr * dr + dg * dg + db * db)
	}
}

/// CIEDE2000 in CIELAB
pub(crate) struct Ciede2000;

impl ColorDifference for Ciede2000 {
	type Point = LabColor;

	fn point(color: Srgb<u8>) -> Self::Point {
		crate::rgb_to_lab(color)
	}

	fn rank(x: Self::Point, y: Self::Point) -> f64 {
		ciede2000(x, y)
	}
}

/// Euclidean distance between two sRGB colors in raw channel units
#[must_use]
pub fn euclidean_rgb(x: Srgb<u8>, y: Srgb<u8>) -> f64 {
	EuclideanRgb::rank(EuclideanRgb::point(x), EuclideanRgb::point(y)).sqrt()
}

/// `25^7`
const POW25_7: f64 = 6_103_515_625.0;

/// Chroma and hue angle (degrees in `0.0..360.0`) from rectangular coordinates
fn chroma_hue(a: f64, b: f64) -> (f64, f64) {
	let chroma = a.hypot(b);
	let hue = if chroma == 0.0 {
		0.0
	} else {
		b.atan2(a).to_degrees().rem_euclid(360.0)
	};
	(chroma, hue)
}

/// The CIEDE2000 color difference between two CIELAB colors.
///
/// Follows the CIE formulation with `kL = kC = kH = 1`.
/// When either color is achromatic its hue is undefined,
/// so the hue difference is taken as zero and the mean hue as the plain sum.
#[must_use]
pub fn ciede2000(x: LabColor, y: LabColor) -> f64 {
	let c1 = x.a.hypot(x.b);
	let c2 = y.a.hypot(y.b);
	let c_bar_7 = ((c1 + c2) / 2.0).powi(7);
	let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + POW25_7)).sqrt());

	let (c1p, h1p) = chroma_hue(x.a * (1.0 + g), x.b);
	let (c2p, h2p) = chroma_hue(y.a * (1.0 + g), y.b);
	let achromatic = c1p * c2p == 0.0;

	let dl = y.l - x.l;
	let dc = c2p - c1p;

	let dh = if achromatic {
		0.0
	} else {
		let diff = h2p - h1p;
		if diff > 180.0 {
			diff - 360.0
		} else if diff < -180.0 {
			diff + 360.0
		} else {
			diff
		}
	};
	let dh_big = 2.0 * (c1p * c2p).sqrt() * (dh / 2.0).to_radians().sin();

	let l_bar = (x.l + y.l) / 2.0;
	let c_bar_p = (c1p + c2p) / 2.0;
	let h_bar = if achromatic {
		h1p + h2p
	} else if (h1p - h2p).abs() <= 180.0 {
		(h1p + h2p) / 2.0
	} else if h1p + h2p < 360.0 {
		(h1p + h2p + 360.0) / 2.0
	} else {
		(h1p + h2p - 360.0) / 2.0
	};

	let t = 1.0 - 0.17 * (h_bar - 30.0).to_radians().cos()
		+ 0.24 * (2.0 * h_bar).to_radians().cos()
		+ 0.32 * (3.0 * h_bar + 6.0).to_radians().cos()
		- 0.20 * (4.0 * h_bar - 63.0).to_radians().cos();

	let l_mid_sq = (l_bar - 50.0).powi(2);
	let s_l = 1.0 + 0.015 * l_mid_sq / (20.0 + l_mid_sq).sqrt();
	let s_c = 1.0 + 0.045 * c_bar_p;
	let s_h = 1.0 + 0.015 * c_bar_p * t;

	let c_bar_p_7 = c_bar_p.powi(7);
	let r_c = 2.0 * (c_bar_p_7 / (c_bar_p_7 + POW25_7)).sqrt();
	let d_theta = 30.0 * (-((h_bar - 275.0) / 25.0).powi(2)).exp();
	let r_t = -(2.0 * d_theta).to_radians().sin() * r_c;

	let l_term = dl / s_l;
	let c_term = dc / s_c;
	let h_term = dh_big / s_h;

	(l_term * l_term + c_term * c_term + h_term * h_term + r_t * c_term * h_term)
		.max(0.0)
		.sqrt()
}
