//! Policies for skipping pixels, such as the white background behind a photographed sample

use palette::Srgb;

/// Which pixels to leave out of matching and averaging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IgnorePolicy {
	/// Keep every pixel
	#[default]
	None,
	/// Skip pixels whose channels are all strictly above `threshold`
	White {
		/// Channel value that must be exceeded by red, green and blue
		threshold: u8,
	},
	/// Skip pixels with equal red, green and blue channels
	Greyscale,
}

impl IgnorePolicy {
	/// The white threshold used for photographed ring samples
	pub const DEFAULT_WHITE_THRESHOLD: u8 = 180;

	/// [`IgnorePolicy::White`] with the default threshold
	#[must_use]
	pub const fn white() -> Self {
		Self::White { threshold: Self::DEFAULT_WHITE_THRESHOLD }
	}

	/// Whether `color` should be skipped
	#[must_use]
	pub const fn ignores(self, color: Srgb<u8>) -> bool {
		match self {
			Self::None => false,
			Self::White { threshold } => color.red > threshold && color.green > threshold && color.blue > threshold,
			Self::Greyscale => color.red == color.green && color.green == color.blue,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn none_keeps_everything() {
		assert!(!IgnorePolicy::None.ignores(Srgb::new(255, 255, 255)));
		assert!(!IgnorePolicy::default().ignores(Srgb::new(0, 0, 0)));
	}

	#[test]
	fn white_threshold_is_exclusive() {
		let policy = IgnorePolicy::white();
		assert!(policy.ignores(Srgb::new(181, 181, 181)));
		assert!(policy.ignores(Srgb::new(255, 200, 190)));
		assert!(!policy.ignores(Srgb::new(180, 255, 255)));
		assert!(!policy.ignores(Srgb::new(255, 0, 0)));

		let strict = IgnorePolicy::White { threshold: 250 };
		assert!(!strict.ignores(Srgb::new(240, 240, 240)));
	}

	#[test]
	fn greyscale() {
		assert!(IgnorePolicy::Greyscale.ignores(Srgb::new(0, 0, 0)));
		assert!(IgnorePolicy::Greyscale.ignores(Srgb::new(97, 97, 97)));
		assert!(!IgnorePolicy::Greyscale.ignores(Srgb::new(97, 97, 98)));
	}
}
