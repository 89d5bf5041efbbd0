//! Error types shared by every stage of the quantization pipeline

use thiserror::Error;

/// Result type alias for ringquant operations
pub type Result<T> = std::result::Result<T, Error>;

/// Data-integrity failures raised by the library.
///
/// None of these are transient: retrying with the same input fails the same way,
/// and each one halts the whole operation instead of producing a partial histogram.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
	/// The palette cannot be used for matching (empty, or holds a duplicate name)
	#[error("invalid palette: {reason}")]
	InvalidPalette {
		/// What is wrong with the palette
		reason: String,
	},

	/// A color channel was not finite or was outside `0.0..=1.0`
	#[error("invalid color channel {channel} = {value}")]
	InvalidColor {
		/// The offending channel (`red`, `green` or `blue`)
		channel: &'static str,
		/// The rejected channel value
		value: f64,
	},

	/// A histogram entry has no price in the price table
	#[error("no price for palette name {name:?}")]
	UnknownPaletteName {
		/// The unmatched palette name
		name: String,
	},

	/// A pixel of a palettized image is not one of the palette colors
	#[error("color {hex} is not in the palette")]
	UnknownColor {
		/// The pixel color as a 6 digit hex code
		hex: String,
	},

	/// A palette color is not a 6 digit hex code
	#[error("invalid hex color {value:?} for {name:?}")]
	InvalidHex {
		/// The palette name the color belongs to
		name: String,
		/// The rejected text
		value: String,
	},

	/// A configuration value is out of range
	#[error("invalid configuration: {parameter} = {value}")]
	InvalidConfig {
		/// The configuration key
		parameter: &'static str,
		/// The rejected value
		value: String,
	},
}

impl Error {
	/// Create an [`Error::InvalidPalette`] with the given reason
	pub(crate) fn invalid_palette(reason: impl Into<String>) -> Self {
		Self::InvalidPalette { reason: reason.into() }
	}
}
