//! Settings files read and written by the CLI

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Background pixels have all channels above this value unless a sample says otherwise
const fn default_white_threshold() -> u8 {
	ringquant::IgnorePolicy::DEFAULT_WHITE_THRESHOLD
}

/// How to derive the color of one ring from a photograph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSettings {
	/// The derived color, `None` until it has been computed
	#[serde(default)]
	pub color_hex: Option<String>,
	/// The photograph of the ring on a white background
	pub file_path: PathBuf,
	/// Where to save the masked photograph next to its average color
	#[serde(default)]
	pub sample_path: Option<PathBuf>,
	/// Pixels with all channels above this value are treated as background
	#[serde(default = "default_white_threshold")]
	pub white_threshold: u8,
}

/// Sample settings for every ring, in file order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaletteSettings {
	/// `(ring name, settings)` pairs
	pub rings: Vec<(String, SampleSettings)>,
}

impl PaletteSettings {
	/// Parse settings from a JSON object of ring names to [`SampleSettings`]
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		let map: Map<String, Value> = serde_json::from_str(json)?;
		let rings = map
			.into_iter()
			.map(|(name, value)| -> serde_json::Result<_> { Ok((name, serde_json::from_value(value)?)) })
			.collect::<serde_json::Result<Vec<(String, SampleSettings)>>>()?;

		Ok(Self { rings })
	}

	/// Format the settings as pretty printed JSON, keeping the ring order
	pub fn to_json(&self) -> serde_json::Result<String> {
		let map = self
			.rings
			.iter()
			.map(|(name, settings)| -> serde_json::Result<_> { Ok((name.clone(), serde_json::to_value(settings)?)) })
			.collect::<serde_json::Result<Map<_, _>>>()?;

		serde_json::to_string_pretty(&map)
	}
}
