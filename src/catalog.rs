use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{Deficiency, PaletteError, Rgb, simulate_all};

/**
A named palette from the gallery dataset.

The JSON shape matches the dataset records:

```json
{"package": "awtools", "palette": "gpalette", "length": 4, "type": "sequential",
 "colors": ["#D6D6D6FF", "#ADADADFF", "#707070FF", "#333333FF"], "gh": "awhstin/awtools"}
```

`id` is optional in the dataset and filled in as `package::palette` when loading a [`Catalog`].
*/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
	/**
	Name of the package that ships the palette.
	*/
	pub package: String,

	/**
	Name of the palette within its package.
	*/
	#[serde(rename = "palette")]
	pub name: String,

	/**
	Number of colors the package advertises for the palette.
	*/
	pub length: usize,

	/**
	Color model tag, such as `sequential`, `diverging` or `qualitative`.
	*/
	#[serde(rename = "type")]
	pub kind: String,

	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub id: String,

	/**
	Hex colors, in dataset order and spelling.
	*/
	pub colors: Vec<String>,

	/**
	GitHub `owner/repo` of the package, if it is published there.
	*/
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gh: Option<String>,

	/**
	Whether the package is published on CRAN.
	*/
	#[serde(default)]
	pub cran: bool,
}

/**
One color of a palette as shown in the detail list.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorDetail {
	pub hex: String,
	pub rgb: Rgb,
}

impl ColorDetail {
	pub fn css_rgb(&self) -> String {
		self.rgb.css_rgb()
	}
}

/**
Where a palette's package can be found.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageLinks {
	pub github: Option<String>,
	pub cran: Option<String>,
}

impl Palette {
	pub fn new(package: impl Into<String>, name: impl Into<String>, kind: impl Into<String>, colors: Vec<String>) -> Self {
		let mut palette = Self {
			package: package.into(),
			name: name.into(),
			length: colors.len(),
			kind: kind.into(),
			id: String::new(),
			colors,
			gh: None,
			cran: false,
		};
		palette.id = palette.default_id();
		palette
	}

	fn default_id(&self) -> String {
		format!("{}::{}", self.package, self.name)
	}

	/**
	Subtitle text, for example `8 colors • sequential`.
	*/
	pub fn summary(&self) -> String {
		format!("{} colors • {}", self.length, self.kind)
	}

	/**
	All colors joined with `", "`, ready for the clipboard.
	*/
	pub fn joined_colors(&self) -> String {
		self.colors.join(", ")
	}

	pub fn color_details(&self) -> Result<Vec<ColorDetail>, PaletteError> {
		self.colors
			.iter()
			.map(|hex| {
				Ok(ColorDetail {
					hex: hex.clone(),
					rgb: Rgb::from_hex_str(hex)?,
				})
			})
			.collect()
	}

	/**
	The palette's colors as seen with the given deficiency.
	*/
	pub fn simulated(&self, kind: Deficiency) -> Result<Vec<String>, PaletteError> {
		simulate_all(&self.colors, kind)
	}

	pub fn links(&self) -> PackageLinks {
		PackageLinks {
			github: self.gh.as_ref().map(|gh| format!("https://github.com/{gh}")),
			cran: self
				.cran
				.then(|| format!("https://cran.r-project.org/package={}", self.package)),
		}
	}

	fn matches(&self, filter: &PaletteFilter) -> bool {
		let kind_matches = match &filter.kind {
			KindFilter::All => true,
			KindFilter::Only(kind) => self.kind == *kind,
		};

		kind_matches && self.name.to_lowercase().contains(&filter.search.to_lowercase())
	}
}

/**
Which palette types to show.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KindFilter {
	#[default]
	All,
	Only(String),
}

impl From<&str> for KindFilter {
	fn from(kind: &str) -> Self {
		match kind {
			"all" => Self::All,
			kind => Self::Only(kind.to_owned()),
		}
	}
}

// Serialized as the bare type name, with "all" for no restriction.
impl Serialize for KindFilter {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Self::All => serializer.serialize_str("all"),
			Self::Only(kind) => serializer.serialize_str(kind),
		}
	}
}

impl<'de> Deserialize<'de> for KindFilter {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let kind: String = Deserialize::deserialize(deserializer)?;
		Ok(Self::from(kind.as_str()))
	}
}

/**
Search and type restriction applied to a [`Catalog`].
*/
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteFilter {
	/**
	Case-insensitive substring of the palette name. Empty matches everything.
	*/
	pub search: String,

	pub kind: KindFilter,
}

impl PaletteFilter {
	pub fn new(search: impl Into<String>, kind: impl Into<KindFilter>) -> Self {
		Self {
			search: search.into(),
			kind: kind.into(),
		}
	}
}

/**
The palette that is currently open, mirrored into the `palette` query parameter of the page URL.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	pub palette: Option<String>,
}

impl Selection {
	pub fn open(id: impl Into<String>) -> Self {
		Self {
			palette: Some(id.into()),
		}
	}

	/**
	Reads the selection from a URL query string such as `?palette=awtools%3A%3Agpalette`.

	Other parameters are ignored. A missing or empty `palette` parameter means nothing is open.
	*/
	pub fn from_query(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);

		let palette = query
			.split('&')
			.filter_map(|pair| pair.split_once('='))
			.find(|(key, _)| *key == "palette")
			.map(|(_, value)| decode_component(value))
			.filter(|id| !id.is_empty());

		Self { palette }
	}

	/**
	Renders the query string for this selection, without the leading `?`.

	Empty when nothing is open.
	*/
	pub fn to_query(&self) -> String {
		match &self.palette {
			Some(id) => format!("palette={}", encode_component(id)),
			None => String::new(),
		}
	}
}

fn encode_component(value: &str) -> String {
	let mut encoded = String::with_capacity(value.len());
	for byte in value.bytes() {
		match byte {
			b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => encoded.push(byte as char),
			b' ' => encoded.push('+'),
			_ => encoded.push_str(&format!("%{byte:02X}")),
		}
	}
	encoded
}

// Malformed escapes are kept verbatim.
fn decode_component(value: &str) -> String {
	let bytes = value.as_bytes();
	let hex_digit = |i: usize| bytes.get(i).and_then(|c| (*c as char).to_digit(16)).map(|d| d as u8);

	let mut decoded = Vec::with_capacity(bytes.len());
	let mut i = 0;

	while i < bytes.len() {
		match bytes[i] {
			b'+' => decoded.push(b' '),
			b'%' => match (hex_digit(i + 1), hex_digit(i + 2)) {
				(Some(hi), Some(lo)) => {
					decoded.push(hi << 4 | lo);
					i += 2;
				}
				_ => decoded.push(b'%'),
			},
			byte => decoded.push(byte),
		}
		i += 1;
	}

	String::from_utf8_lossy(&decoded).into_owned()
}

/**
The full set of palettes shown by the gallery, in dataset order.

Serialized as a plain JSON array of [`Palette`] records.
*/
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Palette>", into = "Vec<Palette>")]
pub struct Catalog {
	pub palettes: Vec<Palette>,
}

impl From<Vec<Palette>> for Catalog {
	fn from(palettes: Vec<Palette>) -> Self {
		Self::new(palettes)
	}
}

impl From<Catalog> for Vec<Palette> {
	fn from(catalog: Catalog) -> Self {
		catalog.palettes
	}
}

impl Catalog {
	pub fn new(palettes: Vec<Palette>) -> Self {
		let mut catalog = Self { palettes };
		catalog.normalize();
		catalog
	}

	/**
	Parses a catalog from dataset JSON.
	*/
	pub fn from_json_str(json: &str) -> Result<Self, PaletteError> {
		Ok(serde_json::from_str(json)?)
	}

	/**
	Reads a catalog from a dataset file.

	- `path`: The JSON file to read.
	*/
	pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PaletteError> {
		let path = path.as_ref();
		let data = fs::read_to_string(path)?;
		let catalog = Self::from_json_str(&data)?;
		tracing::debug!(path = %path.display(), palettes = catalog.len(), "loaded palette catalog");
		Ok(catalog)
	}

	/**
	Writes the catalog as pretty-printed dataset JSON.

	- `path`: The file path to write to.
	*/
	pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PaletteError> {
		let path = path.as_ref();
		let json = serde_json::to_string_pretty(self)?;
		fs::write(path, json)?;
		tracing::debug!(path = %path.display(), palettes = self.len(), "wrote palette catalog");
		Ok(())
	}

	fn normalize(&mut self) {
		for palette in &mut self.palettes {
			if palette.id.is_empty() {
				palette.id = palette.default_id();
			}

			if palette.length != palette.colors.len() {
				tracing::warn!(
					id = %palette.id,
					length = palette.length,
					colors = palette.colors.len(),
					"palette length does not match its color count"
				);
			}
		}
	}

	pub fn len(&self) -> usize {
		self.palettes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.palettes.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Palette> {
		self.palettes.iter()
	}

	pub fn find(&self, id: &str) -> Option<&Palette> {
		self.palettes.iter().find(|palette| palette.id == id)
	}

	/**
	Returns the palette a selection points at, if it exists.
	*/
	pub fn resolve(&self, selection: &Selection) -> Option<&Palette> {
		selection.palette.as_deref().and_then(|id| self.find(id))
	}

	/**
	Distinct palette types, in order of first appearance.
	*/
	pub fn kinds(&self) -> Vec<&str> {
		let mut kinds: Vec<&str> = Vec::new();
		for palette in &self.palettes {
			if !kinds.contains(&palette.kind.as_str()) {
				kinds.push(&palette.kind);
			}
		}
		kinds
	}

	pub fn filter(&self, filter: &PaletteFilter) -> Vec<&Palette> {
		self.palettes.iter().filter(|palette| palette.matches(filter)).collect()
	}
}

impl<'a> IntoIterator for &'a Catalog {
	type Item = &'a Palette;
	type IntoIter = std::slice::Iter<'a, Palette>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
