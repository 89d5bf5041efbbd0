//! Pixel counts per palette name

use crate::{gamut::to_hex, Error, Palette, Result};
use palette::{rgb::channels::Rgba, Srgb};
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::collections::HashMap;

/// The number of pixels assigned to each palette name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Histogram {
	/// `(name, count)` pairs with unique names
	entries: Vec<(String, u64)>,
}

impl Histogram {
	/// Build a histogram from per-index counts, skipping zero counts
	pub(crate) fn from_palette_counts(palette: &Palette, counts: &[u64]) -> Self {
		debug_assert_eq!(palette.len(), counts.len());
		palette
			.iter()
			.zip(counts)
			.filter(|&(_, &count)| count > 0)
			.map(|((name, _), &count)| (name, count))
			.collect()
	}

	/// The count for `name`, or `0` if it has no entry
	#[must_use]
	pub fn get(&self, name: &str) -> u64 {
		self.entries
			.iter()
			.find_map(|(n, count)| (n == name).then_some(*count))
			.unwrap_or(0)
	}

	/// The sum of all counts
	#[must_use]
	pub fn total(&self) -> u64 {
		self.entries.iter().map(|&(_, count)| count).sum()
	}

	/// The number of entries
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether there are no entries
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate over `(name, count)` pairs
	pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, u64)> + '_ {
		self.entries.iter().map(|(name, count)| (name.as_str(), *count))
	}
}

/// Entries with the same name are summed, keeping the position of the first one
impl<N: Into<String>> FromIterator<(N, u64)> for Histogram {
	fn from_iter<I: IntoIterator<Item = (N, u64)>>(iter: I) -> Self {
		let mut entries: Vec<(String, u64)> = Vec::new();
		for (name, count) in iter {
			let name = name.into();
			match entries.iter_mut().find(|(n, _)| *n == name) {
				Some((_, total)) => *total += count,
				None => entries.push((name, count)),
			}
		}
		Self { entries }
	}
}

impl Serialize for Histogram {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (name, count) in self.iter() {
			map.serialize_entry(name, &count)?;
		}
		map.end()
	}
}

/// Count the pixels of an image that only contains palette colors.
///
/// If two palette entries share a color, the first one receives the pixels.
///
/// # Errors
/// Returns [`Error::UnknownColor`] for the first pixel that is not a palette color.
pub fn count_palettized(pixels: &[Srgb<u8>], palette: &Palette) -> Result<Histogram> {
	let mut lookup = HashMap::with_capacity(palette.len());
	for (i, color) in palette.colors().enumerate() {
		lookup.entry(color.into_u32::<Rgba>()).or_insert(i);
	}

	let mut counts = vec![0; palette.len()];
	for &pixel in pixels {
		let &i = lookup
			.get(&pixel.into_u32::<Rgba>())
			.ok_or_else(|| Error::UnknownColor { hex: to_hex(pixel) })?;
		counts[i] += 1;
	}

	Ok(Histogram::from_palette_counts(palette, &counts))
}
