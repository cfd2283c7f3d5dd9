/*!
Copy-paste snippets that bring a palette into R or Python plotting code.
*/

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Palette, PaletteError};

/**
A plotting ecosystem a snippet can target.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	R,
	Python,
}

impl Language {
	pub const ALL: [Self; 2] = [Self::R, Self::Python];

	pub fn name(self) -> &'static str {
		match self {
			Self::R => "r",
			Self::Python => "python",
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Language {
	type Err = PaletteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|language| language.name() == s)
			.ok_or_else(|| PaletteError::UnsupportedLanguage(s.to_owned()))
	}
}

/**
Returns the snippet for `language`, or `None` when the palette has nothing to offer in it.
*/
pub fn snippet(palette: &Palette, language: Language) -> Option<String> {
	match language {
		Language::R => r_snippet(palette),
		Language::Python => Some(python_snippet(palette)),
	}
}

/**
R installation and ggplot2 usage.

CRAN packages are installed with `install.packages`, GitHub-only packages through `remotes`. Palettes published on neither yield `None`.
*/
pub fn r_snippet(palette: &Palette) -> Option<String> {
	let Palette {
		package, name, length, ..
	} = palette;

	let install = if palette.cran {
		format!("# Install the package if needed\ninstall.packages(\"{package}\")")
	} else if let Some(gh) = &palette.gh {
		format!("# Install from GitHub\nremotes::install_github(\"{gh}\")")
	} else {
		return None;
	};

	Some(format!(
		"{install}
library({package})

# Use the palette
{name}({length})

# Use with ggplot2
library(ggplot2)
ggplot(data, aes(x, y, fill = group)) +
  scale_fill_manual(values = {name}({length}))"
	))
}

/**
The colors as a Python list, with Matplotlib and Seaborn usage.
*/
pub fn python_snippet(palette: &Palette) -> String {
	let colors = python_list(&palette.colors);

	format!(
		"# Define the color palette
colors = {colors}

# Use with Matplotlib
import matplotlib.pyplot as plt

# For sequential data
plt.style.use('default')
for i, color in enumerate(colors):
    plt.plot(data[i], color=color)

# For categorical data
plt.bar(x, height, color=colors)

# Use with Seaborn
import seaborn as sns

# Set palette for all plots
sns.set_palette(colors)

# Or use in specific plots
sns.barplot(data=df, x='category', y='value', palette=colors)"
	)
}

// A JSON array of strings is also a valid Python list literal.
fn python_list(colors: &[String]) -> String {
	// Serializing a list of strings cannot fail.
	serde_json::to_string_pretty(colors).unwrap_or_default()
}
