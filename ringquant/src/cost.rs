//! Materials cost estimation from a histogram of ring colors

use crate::{Error, Histogram, Result};
use serde::{Deserialize, Serialize};

/// A price applying to every palette name containing a substring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRule {
	/// Substring of the palette name, matched case-sensitively
	pub contains: String,
	/// Price of one bag
	pub price_per_bag: f64,
}

/// Classifies palette names into bag prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTable {
	/// Rules tried in order, the first match wins
	pub rules: Vec<PriceRule>,
	/// Price for names that match no rule
	pub default_price: Option<f64>,
}

impl Default for PriceTable {
	/// Matte rings at 7.58 per bag, everything else at 9.12
	fn default() -> Self {
		Self {
			rules: vec![PriceRule {
				contains: "matte".to_owned(),
				price_per_bag: 7.58,
			}],
			default_price: Some(9.12),
		}
	}
}

impl PriceTable {
	/// The bag price for `name`, if any rule or the default applies
	#[must_use]
	pub fn price(&self, name: &str) -> Option<f64> {
		self.rules
			.iter()
			.find(|rule| name.contains(&rule.contains))
			.map(|rule| rule.price_per_bag)
			.or(self.default_price)
	}
}

/// Settings for cost estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostConfig {
	/// Number of rings sold in one bag
	pub rings_per_bag: u32,
	/// Bag prices
	pub prices: PriceTable,
}

impl Default for CostConfig {
	fn default() -> Self {
		Self {
			rings_per_bag: 300,
			prices: PriceTable::default(),
		}
	}
}

impl CostConfig {
	/// Parse and validate settings from JSON. Missing fields take their default values.
	///
	/// # Errors
	/// Returns an error if the JSON is malformed or [`CostConfig::validate`] fails.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		let config: Self = serde_json::from_str(json)?;
		config.validate().map_err(<serde_json::Error as serde::de::Error>::custom)?;
		Ok(config)
	}

	/// Check that the bag size is positive and every price is a finite, non-negative number.
	///
	/// # Errors
	/// Returns [`Error::InvalidConfig`] naming the first bad value.
	pub fn validate(&self) -> Result<()> {
		if self.rings_per_bag == 0 {
			return Err(Error::InvalidConfig {
				parameter: "rings_per_bag",
				value: "0".to_owned(),
			});
		}

		let prices = self.prices.rules.iter().map(|rule| rule.price_per_bag).chain(self.prices.default_price);
		for price in prices {
			if !price.is_finite() || price < 0.0 {
				return Err(Error::InvalidConfig {
					parameter: "price_per_bag",
					value: price.to_string(),
				});
			}
		}

		Ok(())
	}

	/// Estimate the cost of a histogram with these settings
	///
	/// # Errors
	/// See [`estimate`].
	pub fn estimate(&self, histogram: &Histogram) -> Result<CostBreakdown> {
		estimate(histogram, self.rings_per_bag, &self.prices)
	}
}

/// Rings, bags and cost for a single palette name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLine {
	/// Palette name
	pub name: String,
	/// Rings needed, i.e. the histogram count
	pub rings: u64,
	/// Bags needed to cover `rings`
	pub bags: u64,
	/// Rings bought beyond those needed
	pub extra_rings: u64,
	/// Price of one bag
	pub price_per_bag: f64,
	/// `bags * price_per_bag`
	pub cost: f64,
}

/// The cost of every histogram entry, in histogram order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
	/// Number of rings in one bag
	pub rings_per_bag: u32,
	/// One line per histogram entry
	pub lines: Vec<CostLine>,
	/// Sum of the line costs
	pub total_cost: f64,
}

impl CostBreakdown {
	/// Rings needed across all lines
	#[must_use]
	pub fn total_rings(&self) -> u64 {
		self.lines.iter().map(|line| line.rings).sum()
	}

	/// Bags needed across all lines
	#[must_use]
	pub fn total_bags(&self) -> u64 {
		self.lines.iter().map(|line| line.bags).sum()
	}

	/// Rings contained in all purchased bags
	#[must_use]
	pub fn rings_purchased(&self) -> u64 {
		self.total_bags() * u64::from(self.rings_per_bag)
	}
}

/// The number of bags needed for `rings` rings, rounded up
#[must_use]
pub fn bags_needed(rings: u64, rings_per_bag: u32) -> u64 {
	rings.div_ceil(u64::from(rings_per_bag))
}

/// Compute bags and cost for each histogram entry.
///
/// # Errors
/// Returns [`Error::InvalidConfig`] if `rings_per_bag` is zero
/// and [`Error::UnknownPaletteName`] if an entry has no price.
/// No partial breakdown is returned.
pub fn estimate(histogram: &Histogram, rings_per_bag: u32, prices: &PriceTable) -> Result<CostBreakdown> {
	if rings_per_bag == 0 {
		return Err(Error::InvalidConfig {
			parameter: "rings_per_bag",
			value: "0".to_owned(),
		});
	}

	let lines = histogram
		.iter()
		.map(|(name, rings)| {
			let price_per_bag = prices
				.price(name)
				.ok_or_else(|| Error::UnknownPaletteName { name: name.to_owned() })?;
			let bags = bags_needed(rings, rings_per_bag);

			// bag counts are far below 2^52
			#[allow(clippy::cast_precision_loss)]
			let cost = bags as f64 * price_per_bag;

			Ok(CostLine {
				name: name.to_owned(),
				rings,
				bags,
				extra_rings: bags * u64::from(rings_per_bag) - rings,
				price_per_bag,
				cost,
			})
		})
		.collect::<Result<Vec<_>>>()?;

	let total_cost = lines.iter().map(|line| line.cost).sum();

	Ok(CostBreakdown {
		rings_per_bag,
		lines,
		total_cost,
	})
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn single(name: &str, rings: u64) -> Histogram {
		[(name, rings)].into_iter().collect()
	}

	#[test]
	fn bag_counts_round_up() {
		let prices = PriceTable::default();
		for (rings, bags) in [(650, 3), (300, 1), (301, 2), (1, 1), (0, 0)] {
			let breakdown = estimate(&single("red", rings), 300, &prices).unwrap();
			assert_eq!(breakdown.lines[0].bags, bags, "{rings} rings");
		}
	}

	#[test]
	fn extra_rings_and_totals() {
		let histogram = [("bright red", 650), ("matte black", 100)].into_iter().collect::<Histogram>();
		let breakdown = CostConfig::default().estimate(&histogram).unwrap();

		assert_eq!(breakdown.lines[0].extra_rings, 250);
		assert_eq!(breakdown.lines[1].extra_rings, 200);
		assert_eq!(breakdown.total_rings(), 750);
		assert_eq!(breakdown.total_bags(), 4);
		assert_eq!(breakdown.rings_purchased(), 1200);
		assert_relative_eq!(breakdown.total_cost, 3.0 * 9.12 + 7.58, epsilon = 1e-9);
	}

	#[test]
	fn first_matching_rule_wins() {
		let prices = PriceTable {
			rules: vec![
				PriceRule { contains: "matte".to_owned(), price_per_bag: 1.0 },
				PriceRule { contains: "black".to_owned(), price_per_bag: 2.0 },
			],
			default_price: None,
		};

		assert_eq!(prices.price("matte black"), Some(1.0));
		assert_eq!(prices.price("bright black"), Some(2.0));
		assert_eq!(prices.price("Matte red"), None);
	}

	#[test]
	fn unpriced_name_fails() {
		let prices = PriceTable { rules: Vec::new(), default_price: None };
		let histogram = [("red", 10)].into_iter().collect::<Histogram>();
		assert_eq!(
			estimate(&histogram, 300, &prices),
			Err(Error::UnknownPaletteName { name: "red".to_owned() })
		);
	}

	#[test]
	fn zero_bag_size_fails() {
		assert!(matches!(
			estimate(&single("red", 1), 0, &PriceTable::default()),
			Err(Error::InvalidConfig { .. })
		));
	}

	#[test]
	fn config_from_json() {
		let config = CostConfig::from_json(r#"{ "rings_per_bag": 500 }"#).unwrap();
		assert_eq!(config.rings_per_bag, 500);
		assert_eq!(config.prices, PriceTable::default());

		let config = CostConfig::from_json(
			r#"{ "prices": { "rules": [{ "contains": "gold", "price_per_bag": 20.5 }] } }"#,
		)
		.unwrap();
		assert_eq!(config.rings_per_bag, 300);
		assert_eq!(config.prices.price("gold"), Some(20.5));
		assert_eq!(config.prices.price("silver"), Some(9.12));

		let config = CostConfig::from_json(r#"{ "prices": { "default_price": null } }"#).unwrap();
		assert_eq!(config.prices.price("silver"), None);
		assert_eq!(config.prices.price("matte silver"), Some(7.58));

		assert!(CostConfig::from_json(r#"{ "rings_per_bag": 0 }"#).is_err());
		assert!(CostConfig::from_json(r#"{ "prices": { "default_price": -1.0 } }"#).is_err());
	}
}
