use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use crate::PaletteError;

/**
An opaque 8-bit sRGB color, as found in the palette dataset.

Parsing accepts `#RRGGBB` and `#RRGGBBAA` (any case). The alpha pair is checked but dropped, since nothing downstream of the catalog renders transparency.

```rust
use palette_gallery::Rgb;

let color: Rgb = "#2A363BFF".parse().unwrap();
assert_eq!(color.to_hex(), "#2a363b");
assert_eq!(color.css_rgb(), "rgb(42, 54, 59)");
```
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
	pub red: u8,
	pub green: u8,
	pub blue: u8,
}

impl Rgb {
	pub const fn new(red: u8, green: u8, blue: u8) -> Self {
		Self { red, green, blue }
	}

	/**
	Parses a hex color string.

	Supported formats:
	- RRGGBB: "#RRGGBB"
	- RRGGBBAA: "#RRGGBBAA"

	The "#" prefix is required.
	*/
	pub fn from_hex_str(hex: &str) -> Result<Self, PaletteError> {
		let invalid = || PaletteError::InvalidHex(hex.to_owned());

		let digits = hex.strip_prefix('#').ok_or_else(invalid)?;

		if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
			return Err(invalid());
		}

		let pair = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

		Ok(Self::new(pair(0)?, pair(2)?, pair(4)?))
	}

	/**
	Returns the channels scaled into `0.0..=1.0`.
	*/
	pub fn to_unit(self) -> [f64; 3] {
		[
			f64::from(self.red) / 255.0,
			f64::from(self.green) / 255.0,
			f64::from(self.blue) / 255.0,
		]
	}

	/**
	Quantizes unit-range channels back to bytes.

	Each channel is clamped to `0.0..=1.0` first, then scaled and rounded half away from zero.
	*/
	pub fn from_unit([red, green, blue]: [f64; 3]) -> Self {
		Self::new(quantize(red), quantize(green), quantize(blue))
	}

	/**
	Lowercase `#rrggbb`.
	*/
	pub fn to_hex(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
	}

	/**
	CSS functional notation, for example `rgb(42, 54, 59)`.
	*/
	pub fn css_rgb(self) -> String {
		format!("rgb({}, {}, {})", self.red, self.green, self.blue)
	}
}

// NaN clamps to NaN and then casts to 0.
#[must_use]
#[inline]
fn quantize(value: f64) -> u8 {
	(value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

impl FromStr for Rgb {
	type Err = PaletteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_hex_str(s)
	}
}

impl From<(u8, u8, u8)> for Rgb {
	fn from((red, green, blue): (u8, u8, u8)) -> Self {
		Self::new(red, green, blue)
	}
}

impl Serialize for Rgb {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.to_hex().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for Rgb {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let hex: String = Deserialize::deserialize(deserializer)?;
		Self::from_hex_str(&hex).map_err(serde::de::Error::custom)
	}
}
