/*!
Color-vision-deficiency simulation.

Each deficiency is approximated by a fixed 4×5 color matrix (rows R, G, B, A) applied to normalized channels. Only the first three rows feed the output.
*/

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{PaletteError, Rgb};

type ColorMatrix = [[f64; 5]; 4];

const PROTANOPIA: ColorMatrix = [
	[0.567, 0.433, 0.0, 0.0, 0.0],
	[0.558, 0.442, 0.0, 0.0, 0.0],
	[0.0, 0.242, 0.758, 0.0, 0.0],
	[0.0, 0.0, 0.0, 1.0, 0.0],
];

const DEUTERANOPIA: ColorMatrix = [
	[0.625, 0.375, 0.0, 0.0, 0.0],
	[0.7, 0.3, 0.0, 0.0, 0.0],
	[0.0, 0.3, 0.7, 0.0, 0.0],
	[0.0, 0.0, 0.0, 1.0, 0.0],
];

const TRITANOPIA: ColorMatrix = [
	[0.95, 0.05, 0.0, 0.0, 0.0],
	[0.0, 0.433, 0.567, 0.0, 0.0],
	[0.0, 0.475, 0.525, 0.0, 0.0],
	[0.0, 0.0, 0.0, 1.0, 0.0],
];

const ACHROMATOPSIA: ColorMatrix = [
	[0.299, 0.587, 0.114, 0.0, 0.0],
	[0.299, 0.587, 0.114, 0.0, 0.0],
	[0.299, 0.587, 0.114, 0.0, 0.0],
	[0.0, 0.0, 0.0, 1.0, 0.0],
];

/**
A kind of color-vision deficiency, or `None` for typical vision.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
	#[default]
	None,
	Achromatopsia,
	Protanopia,
	Deuteranopia,
	Tritanopia,
}

impl Deficiency {
	/**
	Every kind, in the order the gallery presents them.
	*/
	pub const ALL: [Self; 5] = [
		Self::None,
		Self::Achromatopsia,
		Self::Protanopia,
		Self::Deuteranopia,
		Self::Tritanopia,
	];

	pub fn name(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Achromatopsia => "achromatopsia",
			Self::Protanopia => "protanopia",
			Self::Deuteranopia => "deuteranopia",
			Self::Tritanopia => "tritanopia",
		}
	}

	/**
	The simulation matrix, or `None` when no transform applies.
	*/
	pub fn matrix(self) -> Option<&'static ColorMatrix> {
		match self {
			Self::None => None,
			Self::Achromatopsia => Some(&ACHROMATOPSIA),
			Self::Protanopia => Some(&PROTANOPIA),
			Self::Deuteranopia => Some(&DEUTERANOPIA),
			Self::Tritanopia => Some(&TRITANOPIA),
		}
	}

	/**
	A short explanation suitable for showing next to a simulated preview.
	*/
	pub fn description(self) -> &'static str {
		match self {
			Self::None => {
				"Colors don't look the same to all people. Choose a type of color blindness to simulate how the palette appears to people with this form of color vision deficiency."
			}
			Self::Achromatopsia => "Complete color blindness; vision is entirely in grayscale.",
			Self::Protanopia => {
				"Red-blindness; difficulty distinguishing reds and greens due to lack of red cone function."
			}
			Self::Deuteranopia => {
				"Green-blindness; difficulty distinguishing reds and greens due to lack of green cone function."
			}
			Self::Tritanopia => {
				"Blue-yellow blindness; difficulty distinguishing blues and yellows due to lack of blue cone function."
			}
		}
	}
}

impl fmt::Display for Deficiency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Deficiency {
	type Err = PaletteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.name() == s)
			.ok_or_else(|| PaletteError::InvalidDeficiency(s.to_owned()))
	}
}

/**
Applies the deficiency's matrix to a single color.

The color channels are normalized, transformed (each row's fourth coefficient is added as an unscaled bias), clamped and re-quantized. The result is always lowercase `#rrggbb`, dropping any alpha the input carried. `Deficiency::None` returns the input untouched, without validating it.

```rust
use palette_gallery::{simulate, Deficiency};

assert_eq!(simulate("#2A363B", Deficiency::Achromatopsia).unwrap(), "#333333");
assert_eq!(simulate("#FF0000", Deficiency::Protanopia).unwrap(), "#918e00");
assert_eq!(simulate("#2A363B", Deficiency::None).unwrap(), "#2A363B");
```
*/
pub fn simulate(color: &str, kind: Deficiency) -> Result<String, PaletteError> {
	let Some(matrix) = kind.matrix() else {
		return Ok(color.to_owned());
	};

	let rgb = Rgb::from_hex_str(color)?;
	Ok(transform(rgb, matrix).to_hex())
}

/**
Simulates every color, preserving order and length.

Fails as a whole on the first malformed color.
*/
pub fn simulate_all<S: AsRef<str>>(colors: &[S], kind: Deficiency) -> Result<Vec<String>, PaletteError> {
	colors.iter().map(|color| simulate(color.as_ref(), kind)).collect()
}

fn transform(rgb: Rgb, matrix: &ColorMatrix) -> Rgb {
	let [r, g, b] = rgb.to_unit();
	let row = |i: usize| {
		let m = &matrix[i];
		m[0] * r + m[1] * g + m[2] * b + m[3]
	};

	Rgb::from_unit([row(0), row(1), row(2)])
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_achromatopsia_fixture() {
		// 0.299 * 42 + 0.587 * 54 + 0.114 * 59 = 50.982
		assert_eq!(simulate("#2A363B", Deficiency::Achromatopsia).unwrap(), "#333333");
		assert_eq!(simulate("#2A363BFF", Deficiency::Achromatopsia).unwrap(), "#333333");
	}

	#[test]
	fn test_primary_fixtures() {
		assert_eq!(simulate("#FF0000", Deficiency::Protanopia).unwrap(), "#918e00");
		assert_eq!(simulate("#0000FF", Deficiency::Tritanopia).unwrap(), "#009186");
		assert_eq!(simulate("#FF0000", Deficiency::Deuteranopia).unwrap(), "#9fb300");
		assert_eq!(simulate("#00FF00", Deficiency::Tritanopia).unwrap(), "#0d6e79");
	}

	#[test]
	fn test_white_and_black_are_invariant() {
		for kind in Deficiency::ALL {
			assert_eq!(simulate("#FFFFFF", kind).unwrap().to_lowercase(), "#ffffff");
			assert_eq!(simulate("#000000", kind).unwrap(), "#000000");
		}
	}

	#[test]
	fn test_none_is_identity_without_parsing() {
		assert_eq!(simulate("#AbCdEf80", Deficiency::None).unwrap(), "#AbCdEf80");
		assert_eq!(simulate("not a color", Deficiency::None).unwrap(), "not a color");
	}

	#[test]
	fn test_malformed_hex_is_rejected() {
		let err = simulate("#12345", Deficiency::Tritanopia).unwrap_err();
		assert!(matches!(err, PaletteError::InvalidHex(_)));
	}

	#[test]
	fn test_parse_deficiency() {
		assert_eq!("none".parse::<Deficiency>().unwrap(), Deficiency::None);
		assert_eq!("deuteranopia".parse::<Deficiency>().unwrap(), Deficiency::Deuteranopia);

		let err = "monochromacy".parse::<Deficiency>().unwrap_err();
		assert!(matches!(err, PaletteError::InvalidDeficiency(ref s) if s == "monochromacy"));
		assert!(err.is_invalid_argument());

		assert!("Protanopia".parse::<Deficiency>().is_err());
	}

	#[test]
	fn test_deficiency_serde_names() {
		let json = serde_json::to_string(&Deficiency::ALL).unwrap();
		assert_eq!(json, r#"["none","achromatopsia","protanopia","deuteranopia","tritanopia"]"#);

		for kind in Deficiency::ALL {
			assert_eq!(kind.to_string().parse::<Deficiency>().unwrap(), kind);
		}
	}

	#[test]
	fn test_matrix_alpha_row_is_identity() {
		for kind in Deficiency::ALL {
			match kind.matrix() {
				Some(matrix) => assert_eq!(matrix[3], [0.0, 0.0, 0.0, 1.0, 0.0]),
				None => assert_eq!(kind, Deficiency::None),
			}
		}
	}

	#[test]
	fn test_simulate_all_preserves_order() {
		let colors = ["#FFFFFF", "#2A363BFF", "#000000"];
		let simulated = simulate_all(&colors, Deficiency::Achromatopsia).unwrap();
		assert_eq!(simulated, vec!["#ffffff", "#333333", "#000000"]);
	}

	#[test]
	fn test_simulate_all_fails_as_a_whole() {
		let colors = vec!["#FFFFFF".to_string(), "#nope".to_string()];
		assert!(simulate_all(&colors, Deficiency::Protanopia).is_err());

		let empty: [&str; 0] = [];
		assert!(simulate_all(&empty, Deficiency::Protanopia).unwrap().is_empty());
	}

	fn any_deficiency() -> impl Strategy<Value = Deficiency> {
		prop::sample::select(Deficiency::ALL.to_vec())
	}

	proptest! {
		#[test]
		fn prop_output_is_well_formed(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), kind in any_deficiency()) {
			prop_assume!(kind != Deficiency::None);
			let input = format!("#{r:02X}{g:02X}{b:02X}");
			let output = simulate(&input, kind).unwrap();

			prop_assert_eq!(output.len(), 7);
			prop_assert!(output.starts_with('#'));
			prop_assert!(output[1..].bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
		}

		#[test]
		fn prop_none_is_identity(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
			let input = format!("#{r:02x}{g:02X}{b:02x}{a:02X}");
			prop_assert_eq!(simulate(&input, Deficiency::None).unwrap(), input);
		}

		#[test]
		fn prop_deterministic(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), kind in any_deficiency()) {
			let input = format!("#{r:02x}{g:02x}{b:02x}");
			prop_assert_eq!(simulate(&input, kind).unwrap(), simulate(&input, kind).unwrap());
		}

		#[test]
		fn prop_achromatopsia_is_gray(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
			let output = simulate(&format!("#{r:02x}{g:02x}{b:02x}"), Deficiency::Achromatopsia).unwrap();
			prop_assert_eq!(&output[1..3], &output[3..5]);
			prop_assert_eq!(&output[3..5], &output[5..7]);
		}
	}
}
