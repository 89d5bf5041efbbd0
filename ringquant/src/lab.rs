//! sRGB to CIELAB (D65) conversion

use crate::{Error, Result};
use palette::{white_point::D65, Lab, Srgb};

/// CIELAB color with a D65 white point and `f64` components
pub type LabColor = Lab<D65, f64>;

/// D65 reference white in XYZ
const WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

/// Linear sRGB to XYZ (sRGB primaries, D65)
const RGB_TO_XYZ: [[f64; 3]; 3] = [
	[0.4124564, 0.3575761, 0.1804375],
	[0.2126729, 0.7151522, 0.0721750],
	[0.0193339, 0.1191920, 0.9503041],
];

/// `(6/29)^3`, below which the CIELAB transfer function is linear
const EPSILON: f64 = 216.0 / 24389.0;

/// Expand a gamma encoded sRGB channel in `0.0..=1.0` to linear light
fn srgb_to_linear(v: f64) -> f64 {
	if v <= 0.04045 {
		v / 12.92
	} else {
		((v + 0.055) / 1.055).powf(2.4)
	}
}

/// The CIELAB nonlinear transfer function
fn lab_f(t: f64) -> f64 {
	if t > EPSILON {
		t.cbrt()
	} else {
		t * (841.0 / 108.0) + 4.0 / 29.0
	}
}

/// Convert already validated channels in `0.0..=1.0`
fn convert(rgb: [f64; 3]) -> LabColor {
	let linear = rgb.map(srgb_to_linear);

	let mut f = [0.0; 3];
	for ((out, row), white) in f.iter_mut().zip(&RGB_TO_XYZ).zip(WHITE) {
		let xyz = row[0] * linear[0] + row[1] * linear[1] + row[2] * linear[2];
		*out = lab_f(xyz / white);
	}

	let [fx, fy, fz] = f;
	Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert an 8-bit sRGB color to CIELAB.
///
/// This is a pure function of its input, so callers may freely cache the result.
#[must_use]
pub fn rgb_to_lab(color: Srgb<u8>) -> LabColor {
	convert([color.red, color.green, color.blue].map(|c| f64::from(c) / 255.0))
}

/// Convert an sRGB color with channels in `0.0..=1.0` to CIELAB.
///
/// # Errors
/// Returns [`Error::InvalidColor`] if a channel is NaN, infinite, or outside `0.0..=1.0`.
/// Values are never clamped.
pub fn normalized_rgb_to_lab(color: Srgb<f64>) -> Result<LabColor> {
	let channels = [("red", color.red), ("green", color.green), ("blue", color.blue)];
	for (channel, value) in channels {
		if !value.is_finite() || !(0.0..=1.0).contains(&value) {
			return Err(Error::InvalidColor { channel, value });
		}
	}

	Ok(convert([color.red, color.green, color.blue]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use palette::{FromColor, LinSrgb};

	fn assert_lab(color: LabColor, (l, a, b): (f64, f64, f64), eps: f64) {
		assert_abs_diff_eq!(color.l, l, epsilon = eps);
		assert_abs_diff_eq!(color.a, a, epsilon = eps);
		assert_abs_diff_eq!(color.b, b, epsilon = eps);
	}

	#[test]
	fn black_and_white() {
		assert_lab(rgb_to_lab(Srgb::new(0, 0, 0)), (0.0, 0.0, 0.0), 1e-2);
		assert_lab(rgb_to_lab(Srgb::new(255, 255, 255)), (100.0, 0.0, 0.0), 1e-2);
	}

	#[test]
	fn primaries() {
		assert_lab(rgb_to_lab(Srgb::new(255, 0, 0)), (53.24, 80.09, 67.20), 1e-1);
		assert_lab(rgb_to_lab(Srgb::new(0, 255, 0)), (87.73, -86.18, 83.18), 1e-1);
		assert_lab(rgb_to_lab(Srgb::new(0, 0, 255)), (32.30, 79.19, -107.86), 1e-1);
	}

	#[test]
	fn dark_colors_use_linear_segment() {
		// Y of (1, 1, 1) is far below EPSILON
		let lab = rgb_to_lab(Srgb::new(1, 1, 1));
		assert!(lab.l > 0.0 && lab.l < 0.5);
		assert_abs_diff_eq!(lab.a, 0.0, epsilon = 1e-2);
		assert_abs_diff_eq!(lab.b, 0.0, epsilon = 1e-2);
	}

	#[test]
	fn transfer_function_is_continuous() {
		assert_abs_diff_eq!(lab_f(EPSILON), EPSILON.cbrt(), epsilon = 1e-9);
	}

	#[test]
	fn agrees_with_palette_crate() {
		for r in (0..=255).step_by(51) {
			for g in (0..=255).step_by(51) {
				for b in (0..=255).step_by(51) {
					let srgb = Srgb::new(r, g, b);
					let linear: LinSrgb<f64> = srgb.into_format::<f64>().into_linear();
					let expected = Lab::<D65, f64>::from_color(linear);
					let lab = rgb_to_lab(srgb);
					assert_lab(lab, (expected.l, expected.a, expected.b), 5e-2);
				}
			}
		}
	}

	#[test]
	fn normalized_matches_8bit() {
		let lab = normalized_rgb_to_lab(Srgb::new(1.0, 0.0, 0.0)).unwrap();
		assert_eq!(lab, rgb_to_lab(Srgb::new(255, 0, 0)));
	}

	#[test]
	fn rejects_invalid_channels() {
		for (color, channel) in [
			(Srgb::new(f64::NAN, 0.0, 0.0), "red"),
			(Srgb::new(0.0, f64::INFINITY, 0.0), "green"),
			(Srgb::new(0.0, 0.0, 1.5), "blue"),
			(Srgb::new(-0.1, 0.0, 0.0), "red"),
		] {
			match normalized_rgb_to_lab(color) {
				Err(Error::InvalidColor { channel: c, .. }) => assert_eq!(c, channel),
				other => panic!("expected InvalidColor, got {other:?}"),
			}
		}
	}
}
