/*!
SVG previews: fixed-slot chart skeletons and plain swatch strips.

Colors are checked with [`Rgb::from_hex_str`] before they reach the markup.
*/

use std::{fmt::Write, str::FromStr};

use crate::{PaletteError, Rgb, resize};

/**
Placeholder colors marking the slots of every chart skeleton, in document order.
*/
const SLOTS: [&str; 5] = ["#0000F0", "#00FF00", "#00F000", "#FF0000", "#F00000"];

const STYLE: &str = "<defs><style><![CDATA[
    .svglite line, .svglite polyline, .svglite polygon, .svglite path, .svglite rect, .svglite circle {
      fill: none;
      stroke: #000000;
      stroke-linecap: round;
      stroke-linejoin: round;
      stroke-miterlimit: 10.00;
    }
  ]]></style></defs>";

const BAR: &str = r#"<path d="M25.9 13.6h167.2v81.9H25.9z" style="stroke-width: 1.07; stroke: none; stroke-linecap: butt; stroke-linejoin: miter; fill: #0000F0;"/><path d="M25.9 104.6h234v81.9h-234z" style="stroke-width: 1.07; stroke: none; stroke-linecap: butt; stroke-linejoin: miter; fill: #00FF00;"/><path d="M25.9 195.6h518.2v81.9H25.9z" style="stroke-width: 1.07; stroke: none; stroke-linecap: butt; stroke-linejoin: miter; fill: #00F000;"/><path d="M25.9 286.5h250.7v81.9H25.9z" style="stroke-width: 1.07; stroke: none; stroke-linecap: butt; stroke-linejoin: miter; fill: #FF0000;"/><path d="M25.9 377.5h351v81.9h-351z" style="stroke-width: 1.07; stroke: none; stroke-linecap: butt; stroke-linejoin: miter; fill: #F00000;"/>"#;

const LINE: &str = r#"<polyline points="25.9,420.0 155.5,380.2 285.0,395.7 414.6,330.1 544.1,350.8" style="stroke-width: 2.13; stroke: #0000F0;"/><polyline points="25.9,340.4 155.5,300.9 285.0,310.3 414.6,260.5 544.1,240.2" style="stroke-width: 2.13; stroke: #00FF00;"/><polyline points="25.9,260.1 155.5,250.7 285.0,210.4 414.6,190.9 544.1,160.3" style="stroke-width: 2.13; stroke: #00F000;"/><polyline points="25.9,190.6 155.5,150.2 285.0,140.8 414.6,100.5 544.1,90.7" style="stroke-width: 2.13; stroke: #FF0000;"/><polyline points="25.9,120.3 155.5,80.4 285.0,60.1 414.6,40.6 544.1,20.2" style="stroke-width: 2.13; stroke: #F00000;"/>"#;

/**
The chart skeletons available for previews.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
	Bar,
	Line,
}

impl ChartKind {
	pub const ALL: [Self; 2] = [Self::Bar, Self::Line];

	pub fn name(self) -> &'static str {
		match self {
			Self::Bar => "bar",
			Self::Line => "line",
		}
	}

	/**
	Number of colors the skeleton draws.
	*/
	pub fn slots(self) -> usize {
		SLOTS.len()
	}

	fn body(self) -> &'static str {
		match self {
			Self::Bar => BAR,
			Self::Line => LINE,
		}
	}
}

impl FromStr for ChartKind {
	type Err = PaletteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.name() == s)
			.ok_or_else(|| PaletteError::UnsupportedChart(s.to_owned()))
	}
}

/**
Renders a chart preview with the given colors.

The colors are resampled to the chart's slot count, so any non-empty palette fits. Slots are filled in a single left-to-right pass; a color that happens to equal a placeholder is never substituted twice.

Every color must be a valid hex color, even those the resampling drops.
*/
pub fn render_chart<S: AsRef<str>>(kind: ChartKind, colors: &[S]) -> Result<String, PaletteError> {
	let colors = checked(colors)?;
	let colors = resize(&colors, kind.slots())?;

	let mut body = String::with_capacity(kind.body().len());
	let mut rest = kind.body();

	for (placeholder, color) in SLOTS.iter().zip(&colors) {
		let Some(at) = rest.find(placeholder) else {
			break;
		};
		body.push_str(&rest[..at]);
		body.push_str(color);
		rest = &rest[at + placeholder.len()..];
	}
	body.push_str(rest);

	Ok(format!(
		r#"<svg xmlns="http://www.w3.org/2000/svg" width="760" height="630.7" class="svglite" viewBox="0 0 570 473">{STYLE}<rect width="100%" height="100%" style="stroke: none; fill: none;"/>{body}</svg>"#
	))
}

fn checked<S: AsRef<str>>(colors: &[S]) -> Result<Vec<&str>, PaletteError> {
	colors
		.iter()
		.map(|color| {
			let color = color.as_ref();
			Rgb::from_hex_str(color).map(|_| color)
		})
		.collect()
}

/**
A horizontal strip of equal-width swatches, one per color, each titled with its color.

Fails with `InvalidHex` on the first color that is not a hex color.
*/
pub fn swatch_strip<S: AsRef<str>>(colors: &[S], width: u32, height: u32) -> Result<String, PaletteError> {
	let colors = checked(colors)?;
	let mut svg = format!(
		r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
	);

	let swatch = if colors.is_empty() {
		0.0
	} else {
		f64::from(width) / colors.len() as f64
	};

	for (i, color) in colors.iter().enumerate() {
		// Writing to a String cannot fail.
		let _ = write!(
			svg,
			r#"<rect x="{x}" y="0" width="{swatch}" height="{height}" style="fill: {color};"><title>{color}</title></rect>"#,
			x = swatch * i as f64,
		);
	}

	svg.push_str("</svg>");
	Ok(svg)
}
