//! The named set of physical colors available for substitution

use crate::{Error, Result};
use palette::Srgb;
use serde::{
	de::{self, MapAccess, Visitor},
	ser::SerializeMap,
	Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

/// An ordered list of uniquely named sRGB colors.
///
/// Iteration order is the order the entries were given in,
/// which decides ties when two entries are equally close to a color.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
	/// Name and color of each entry
	entries: Vec<(String, Srgb<u8>)>,
}

impl Palette {
	/// Create a palette from `(name, color)` pairs.
	///
	/// # Errors
	/// Returns [`Error::InvalidPalette`] if a name appears more than once.
	pub fn new<N: Into<String>>(entries: impl IntoIterator<Item = (N, Srgb<u8>)>) -> Result<Self> {
		let mut palette = Self::default();
		for (name, color) in entries {
			palette.push(name.into(), color)?;
		}
		Ok(palette)
	}

	/// Create a palette from `(name, hex)` pairs, see [`parse_hex`].
	///
	/// # Errors
	/// Returns [`Error::InvalidHex`] for malformed colors and [`Error::InvalidPalette`] for duplicate names.
	pub fn from_hex<N: Into<String>, H: AsRef<str>>(entries: impl IntoIterator<Item = (N, H)>) -> Result<Self> {
		let mut palette = Self::default();
		for (name, hex) in entries {
			let name = name.into();
			let color = parse_hex(&name, hex.as_ref())?;
			palette.push(name, color)?;
		}
		Ok(palette)
	}

	/// Append an entry, rejecting duplicate names
	fn push(&mut self, name: String, color: Srgb<u8>) -> Result<()> {
		if self.index_of(&name).is_some() {
			return Err(Error::invalid_palette(format!("duplicate name {name:?}")));
		}
		self.entries.push((name, color));
		Ok(())
	}

	/// Parse a palette from a JSON object of `"name": "RRGGBB"` pairs
	///
	/// # Errors
	/// Returns an error if the JSON is malformed or a color or name is invalid.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	/// Format the palette as a pretty printed JSON object
	///
	/// # Errors
	/// Only fails if serialization to a string fails, which should not happen.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}

	/// The number of entries
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the palette has no entries
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// The name of the entry at `index`
	///
	/// # Panics
	/// Panics if `index` is out of bounds.
	#[must_use]
	pub fn name(&self, index: usize) -> &str {
		&self.entries[index].0
	}

	/// The color of the entry at `index`
	///
	/// # Panics
	/// Panics if `index` is out of bounds.
	#[must_use]
	pub fn color(&self, index: usize) -> Srgb<u8> {
		self.entries[index].1
	}

	/// The color with the given name
	#[must_use]
	pub fn get(&self, name: &str) -> Option<Srgb<u8>> {
		self.index_of(name).map(|i| self.entries[i].1)
	}

	/// The position of the entry with the given name
	#[must_use]
	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.entries.iter().position(|(n, _)| n == name)
	}

	/// Iterate over `(name, color)` pairs in palette order
	pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, Srgb<u8>)> + '_ {
		self.entries.iter().map(|(name, color)| (name.as_str(), *color))
	}

	/// Iterate over the colors in palette order
	pub fn colors(&self) -> impl ExactSizeIterator<Item = Srgb<u8>> + '_ {
		self.entries.iter().map(|&(_, color)| color)
	}
}

/// Parse a 6 digit hex color with an optional leading `#`.
///
/// `name` is only used for error reporting.
///
/// # Errors
/// Returns [`Error::InvalidHex`] unless `hex` is exactly 6 hex digits after the optional `#`.
pub fn parse_hex(name: &str, hex: &str) -> Result<Srgb<u8>> {
	let invalid = || Error::InvalidHex {
		name: name.to_owned(),
		value: hex.to_owned(),
	};

	let digits = hex.strip_prefix('#').unwrap_or(hex);
	if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
		return Err(invalid());
	}

	let [_, red, green, blue] = u32::from_str_radix(digits, 16).map_err(|_| invalid())?.to_be_bytes();
	Ok(Srgb::new(red, green, blue))
}

/// Format a color as 6 upper case hex digits without a leading `#`
#[must_use]
pub fn to_hex(color: Srgb<u8>) -> String {
	format!("{color:X}")
}

impl Serialize for Palette {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (name, color) in self.iter() {
			map.serialize_entry(name, &to_hex(color))?;
		}
		map.end()
	}
}

impl<'de> Deserialize<'de> for Palette {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		/// Collects map entries in document order
		struct PaletteVisitor;

		impl<'de> Visitor<'de> for PaletteVisitor {
			type Value = Palette;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("a map of color names to 6 digit hex colors")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Palette, A::Error> {
				let mut palette = Palette::default();
				while let Some((name, hex)) = map.next_entry::<String, String>()? {
					let color = parse_hex(&name, &hex).map_err(<A::Error as de::Error>::custom)?;
					palette.push(name, color).map_err(<A::Error as de::Error>::custom)?;
				}
				Ok(palette)
			}
		}

		deserializer.deserialize_map(PaletteVisitor)
	}
}
