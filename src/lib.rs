#![allow(clippy::tabs_in_doc_comments)]

/*!
The non-visual core of a color palette gallery.

A [`Catalog`] holds named palettes from a static dataset and answers search and type filters. Each palette can be previewed as a swatch strip or a chart, checked against color-vision deficiencies, and turned into R or Python code.

```rust
use palette_gallery::{Catalog, ChartKind, Deficiency, PaletteFilter, render_chart, resize, simulate};

let catalog = Catalog::from_json_str(r##"[
	{"package": "awtools", "palette": "gpalette", "length": 4, "type": "sequential",
	 "colors": ["#D6D6D6FF", "#ADADADFF", "#707070FF", "#333333FF"], "gh": "awhstin/awtools"}
]"##)?;

let palette = catalog.find("awtools::gpalette").unwrap();
assert_eq!(catalog.filter(&PaletteFilter::new("gpal", "sequential")).len(), 1);

// How the palette looks without red cone function
let seen = palette.simulated(Deficiency::Protanopia)?;
assert_eq!(seen.len(), 4);
assert_eq!(simulate("#2A363B", Deficiency::Achromatopsia)?, "#333333");

// Chart skeletons have a fixed number of slots
assert_eq!(resize(&palette.colors, 2)?, ["#D6D6D6FF", "#333333FF"]);
let svg = render_chart(ChartKind::Bar, &seen)?;
assert!(svg.starts_with("<svg"));
# Ok::<(), palette_gallery::PaletteError>(())
```
*/

use thiserror::Error;

mod catalog;
mod chart;
mod color;
mod resize;
mod simulate;
mod snippet;

pub use catalog::{Catalog, ColorDetail, KindFilter, PackageLinks, Palette, PaletteFilter, Selection};
pub use chart::{ChartKind, render_chart, swatch_strip};
pub use color::Rgb;
pub use resize::resize;
pub use simulate::{Deficiency, simulate, simulate_all};
pub use snippet::{Language, python_snippet, r_snippet, snippet};

#[derive(Debug, Error)]
pub enum PaletteError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid palette data: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("invalid hex color: {0:?}")]
	InvalidHex(String),

	#[error("invalid color blindness type: {0:?}")]
	InvalidDeficiency(String),

	#[error("unsupported chart type: {0:?}")]
	UnsupportedChart(String),

	#[error("unsupported snippet language: {0:?}")]
	UnsupportedLanguage(String),

	#[error("empty input not supported")]
	EmptyInput,
}

impl PaletteError {
	/**
	Whether the error was caused by a bad argument rather than by I/O or dataset contents.
	*/
	#[must_use]
	pub fn is_invalid_argument(&self) -> bool {
		matches!(
			self,
			Self::InvalidHex(_)
				| Self::InvalidDeficiency(_)
				| Self::UnsupportedChart(_)
				| Self::UnsupportedLanguage(_)
				| Self::EmptyInput
		)
	}
}
