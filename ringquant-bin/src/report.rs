//! Markdown report sections and terminal summaries

use colored::Colorize;
use ringquant::{CostBreakdown, Palette};

/// File names of the images shown in a report section
pub struct ReportImages<'a> {
	/// The original image
	pub source: &'a str,
	/// The image after replacing colors with palette colors
	pub palette_applied: &'a str,
	/// The block scaled version of the quantized image, if one was made
	pub rings: Option<&'a str>,
}

/// An image heading and tag
fn image_block(title: &str, prefix: &str, file: &str) -> String {
	format!("### {title}\n\n<img src=\"{prefix}{file}\" style=\"max-height: min(200px, 95vh)\">\n\n\n")
}

/// A markdown section with the images and cost breakdown of one project
pub fn markdown_section(name: &str, prefix: &str, images: &ReportImages, cost: &CostBreakdown) -> String {
	let mut out = format!("## {name}\n\n");

	out += &image_block("Source Image", prefix, images.source);
	out += &image_block("Palette Applied", prefix, images.palette_applied);
	if let Some(rings) = images.rings {
		out += &image_block("Ring Version", prefix, rings);
	}

	out += "### Cost Info\n\n";
	out += &format!("Total Cost: ${:.2}\n", cost.total_cost);
	out += &format!("Total Rings: {}\n", cost.total_rings());
	out += &format!("Rings Purchased: {}\n\n", cost.rings_purchased());

	for line in &cost.lines {
		out += &format!("* {}:\n", line.name);
		out += &format!("\t* Bags:  {}\n", line.bags);
		out += &format!("\t* Rings: {}\n", line.rings);
		out += &format!("\t* Extra Rings: {}\n", line.extra_rings);
	}

	out += "\n\n";
	out
}

/// A plain text summary of the cost breakdown, optionally with a color swatch in front of each name
pub fn text_summary(cost: &CostBreakdown, palette: &Palette, colorize: bool) -> String {
	let width = cost.lines.iter().map(|line| line.name.len()).max().unwrap_or(0);

	let mut out = format!(
		"Total Cost: ${:.2}\nTotal Rings: {}\nRings Purchased: {} ({} bags of {})\n",
		cost.total_cost,
		cost.total_rings(),
		cost.rings_purchased(),
		cost.total_bags(),
		cost.rings_per_bag,
	);

	for line in &cost.lines {
		let swatch = match palette.get(&line.name) {
			Some(color) if colorize => format!("{} ", "   ".on_truecolor(color.red, color.green, color.blue)),
			_ => String::new(),
		};

		out += &format!(
			"{swatch}{:width$}  {:>8} rings  {:>4} bags  {:>5} extra  ${:.2}\n",
			line.name, line.rings, line.bags, line.extra_rings, line.cost,
		);
	}

	out
}
