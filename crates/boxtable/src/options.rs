//! Typed table configuration.
//!
//! [`TableOptions`] carries every recognized option with its default. It can be
//! built in code through [`TableOptions::builder`] or loaded from a YAML or
//! JSON document:
//!
//! ```rust
//! use boxtable::{MaxWidth, TableOptions};
//!
//! let options = TableOptions::from_yaml(r#"
//! padding: 0
//! max_width: 40
//! straight:
//!   vertical: "|"
//!   horizontal: "-"
//! "#).unwrap();
//!
//! assert_eq!(options.padding, 0);
//! assert_eq!(options.max_width, MaxWidth::Columns(40));
//! assert_eq!(options.straight.vertical.as_char(), '|');
//! ```
//!
//! # Corner naming
//!
//! Corner names are part of the configuration contract and are mirrored
//! relative to their geometric position: `top_right` is the glyph drawn at the
//! start of the top border (`┌` by default) and `top_left` the one at its end
//! (`┐`). The bottom corners follow the same convention.
//!
//! # Validation
//!
//! Every glyph must be exactly one printable character. A glyph group that is
//! present in a document must name all of its glyphs; only absent groups fall
//! back to their defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// A single printable character used to draw the table frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Glyph(char);

impl Glyph {
    /// Validates a glyph for `field`, reporting the field name on failure.
    pub fn parse(field: &'static str, value: &str) -> Result<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Ok(Glyph(c)),
            _ => Err(TableError::InvalidGlyph {
                field,
                value: value.to_string(),
            }),
        }
    }

    /// The glyph's character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Glyph {
    type Error = TableError;

    fn try_from(c: char) -> Result<Self> {
        if c.is_control() {
            return Err(TableError::InvalidGlyph {
                field: "glyph",
                value: c.to_string(),
            });
        }
        Ok(Glyph(c))
    }
}

impl TryFrom<&str> for Glyph {
    type Error = TableError;

    fn try_from(value: &str) -> Result<Self> {
        Glyph::parse("glyph", value)
    }
}

impl TryFrom<String> for Glyph {
    type Error = TableError;

    fn try_from(value: String) -> Result<Self> {
        Glyph::parse("glyph", &value)
    }
}

impl From<Glyph> for String {
    fn from(glyph: Glyph) -> Self {
        glyph.0.to_string()
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Corner glyphs. See the module docs for the naming convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Corners {
    /// Start of the top border.
    pub top_right: Glyph,
    /// End of the top border.
    pub top_left: Glyph,
    /// Start of the bottom border.
    pub bottom_right: Glyph,
    /// End of the bottom border.
    pub bottom_left: Glyph,
}

impl Corners {
    /// Builds a corner set from strings, in `top_right, top_left,
    /// bottom_right, bottom_left` order.
    pub fn new(
        top_right: &str,
        top_left: &str,
        bottom_right: &str,
        bottom_left: &str,
    ) -> Result<Self> {
        Ok(Corners {
            top_right: Glyph::parse("top_right", top_right)?,
            top_left: Glyph::parse("top_left", top_left)?,
            bottom_right: Glyph::parse("bottom_right", bottom_right)?,
            bottom_left: Glyph::parse("bottom_left", bottom_left)?,
        })
    }
}

impl Default for Corners {
    fn default() -> Self {
        BorderStyle::Light.corners()
    }
}

/// Vertical and horizontal line glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Straight {
    /// Drawn between cells and at both row edges.
    pub vertical: Glyph,
    /// Repeated along the top and bottom borders.
    pub horizontal: Glyph,
}

impl Straight {
    /// Builds a line set from strings.
    pub fn new(vertical: &str, horizontal: &str) -> Result<Self> {
        Ok(Straight {
            vertical: Glyph::parse("vertical", vertical)?,
            horizontal: Glyph::parse("horizontal", horizontal)?,
        })
    }
}

impl Default for Straight {
    fn default() -> Self {
        BorderStyle::Light.straight()
    }
}

/// Column-boundary glyphs on border lines.
///
/// `middle` is accepted and stored but never drawn: interior rows separate
/// columns with the vertical glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Junctions {
    /// Column boundary on the top border.
    pub top: Glyph,
    /// Interior crossing glyph.
    pub middle: Glyph,
    /// Column boundary on the bottom border.
    pub bottom: Glyph,
}

impl Junctions {
    /// Builds a junction set from strings.
    pub fn new(top: &str, middle: &str, bottom: &str) -> Result<Self> {
        Ok(Junctions {
            top: Glyph::parse("top", top)?,
            middle: Glyph::parse("middle", middle)?,
            bottom: Glyph::parse("bottom", bottom)?,
        })
    }
}

impl Default for Junctions {
    fn default() -> Self {
        BorderStyle::Light.junctions()
    }
}

/// Built-in glyph sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Light box-drawing characters: ┌ ┐ └ ┘ │ ─ ┬ ┼ ┴
    #[default]
    Light,
    /// Heavy box-drawing characters: ┏ ┓ ┗ ┛ ┃ ━ ┳ ╋ ┻
    Heavy,
    /// Double-line box-drawing characters: ╔ ╗ ╚ ╝ ║ ═ ╦ ╬ ╩
    Double,
    /// Rounded corners with light lines: ╭ ╮ ╰ ╯ │ ─ ┬ ┼ ┴
    Rounded,
    /// Plain ASCII: + | -
    Ascii,
}

impl BorderStyle {
    // (start-of-top, end-of-top, start-of-bottom, end-of-bottom)
    fn corner_chars(self) -> [char; 4] {
        match self {
            BorderStyle::Light => ['┌', '┐', '└', '┘'],
            BorderStyle::Heavy => ['┏', '┓', '┗', '┛'],
            BorderStyle::Double => ['╔', '╗', '╚', '╝'],
            BorderStyle::Rounded => ['╭', '╮', '╰', '╯'],
            BorderStyle::Ascii => ['+', '+', '+', '+'],
        }
    }

    /// Corner glyphs for this style.
    pub fn corners(self) -> Corners {
        let [top_right, top_left, bottom_right, bottom_left] = self.corner_chars();
        Corners {
            top_right: Glyph(top_right),
            top_left: Glyph(top_left),
            bottom_right: Glyph(bottom_right),
            bottom_left: Glyph(bottom_left),
        }
    }

    /// Line glyphs for this style.
    pub fn straight(self) -> Straight {
        let (vertical, horizontal) = match self {
            BorderStyle::Light | BorderStyle::Rounded => ('│', '─'),
            BorderStyle::Heavy => ('┃', '━'),
            BorderStyle::Double => ('║', '═'),
            BorderStyle::Ascii => ('|', '-'),
        };
        Straight {
            vertical: Glyph(vertical),
            horizontal: Glyph(horizontal),
        }
    }

    /// Junction glyphs for this style.
    pub fn junctions(self) -> Junctions {
        let (top, middle, bottom) = match self {
            BorderStyle::Light | BorderStyle::Rounded => ('┬', '┼', '┴'),
            BorderStyle::Heavy => ('┳', '╋', '┻'),
            BorderStyle::Double => ('╦', '╬', '╩'),
            BorderStyle::Ascii => ('+', '+', '+'),
        };
        Junctions {
            top: Glyph(top),
            middle: Glyph(middle),
            bottom: Glyph(bottom),
        }
    }
}

/// Upper bound on the rendered width of the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MaxWidthRaw", into = "MaxWidthRaw")]
pub enum MaxWidth {
    /// Columns keep their natural widths.
    #[default]
    Unbounded,
    /// Fit columns into this many characters.
    Columns(usize),
    /// Use the width of the attached terminal, or unbounded when there is none.
    Terminal,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum MaxWidthRaw {
    Columns(usize),
    Keyword(String),
}

impl From<MaxWidth> for MaxWidthRaw {
    fn from(width: MaxWidth) -> Self {
        match width {
            MaxWidth::Unbounded => MaxWidthRaw::Keyword("unbounded".to_string()),
            MaxWidth::Columns(n) => MaxWidthRaw::Columns(n),
            MaxWidth::Terminal => MaxWidthRaw::Keyword("terminal".to_string()),
        }
    }
}

impl TryFrom<MaxWidthRaw> for MaxWidth {
    type Error = String;

    fn try_from(raw: MaxWidthRaw) -> std::result::Result<Self, Self::Error> {
        match raw {
            MaxWidthRaw::Columns(n) => Ok(MaxWidth::Columns(n)),
            MaxWidthRaw::Keyword(s) if s == "unbounded" => Ok(MaxWidth::Unbounded),
            MaxWidthRaw::Keyword(s) if s == "terminal" => Ok(MaxWidth::Terminal),
            MaxWidthRaw::Keyword(s) => Err(format!(
                "Invalid max_width: '{}'. Expected a number, 'unbounded' or 'terminal'.",
                s
            )),
        }
    }
}

impl MaxWidth {
    /// Resolves to a concrete limit, `None` meaning unbounded.
    pub fn limit(self) -> Option<usize> {
        match self {
            MaxWidth::Unbounded => None,
            MaxWidth::Columns(n) => Some(n),
            MaxWidth::Terminal => {
                terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize)
            }
        }
    }
}

/// Layout and glyph options for rendering a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    /// Separate multi-line rows from their neighbours with a blank line.
    pub space_linebroken: bool,
    /// Spaces on each side of cell content.
    pub padding: usize,
    /// Width budget for the whole table.
    pub max_width: MaxWidth,
    /// Corner glyphs.
    pub corners: Corners,
    /// Line glyphs.
    pub straight: Straight,
    /// Junction glyphs.
    pub junctions: Junctions,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            space_linebroken: true,
            padding: 1,
            max_width: MaxWidth::Unbounded,
            corners: Corners::default(),
            straight: Straight::default(),
            junctions: Junctions::default(),
        }
    }
}

impl TableOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for fluent construction.
    pub fn builder() -> TableOptionsBuilder {
        TableOptionsBuilder::default()
    }

    /// Parse options from YAML. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse options from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a file. `.json` files are parsed as JSON, anything
    /// else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }
}

/// Builder for [`TableOptions`].
///
/// ```rust
/// use boxtable::{BorderStyle, TableOptions};
///
/// let options = TableOptions::builder()
///     .padding(2)
///     .max_width(60)
///     .border(BorderStyle::Rounded)
///     .build();
/// assert_eq!(options.corners.top_right.as_char(), '╭');
/// ```
#[derive(Clone, Debug, Default)]
pub struct TableOptionsBuilder {
    options: TableOptions,
}

impl TableOptionsBuilder {
    /// Set whether multi-line rows get a trailing blank line.
    pub fn space_linebroken(mut self, enabled: bool) -> Self {
        self.options.space_linebroken = enabled;
        self
    }

    /// Set the padding on each side of cell content.
    pub fn padding(mut self, padding: usize) -> Self {
        self.options.padding = padding;
        self
    }

    /// Limit the table to `width` characters.
    pub fn max_width(mut self, width: usize) -> Self {
        self.options.max_width = MaxWidth::Columns(width);
        self
    }

    /// Set the width limit strategy.
    pub fn max_width_mode(mut self, width: MaxWidth) -> Self {
        self.options.max_width = width;
        self
    }

    /// Use every glyph from a built-in style.
    pub fn border(mut self, style: BorderStyle) -> Self {
        self.options.corners = style.corners();
        self.options.straight = style.straight();
        self.options.junctions = style.junctions();
        self
    }

    /// Set corner glyphs.
    pub fn corners(mut self, corners: Corners) -> Self {
        self.options.corners = corners;
        self
    }

    /// Set line glyphs.
    pub fn straight(mut self, straight: Straight) -> Self {
        self.options.straight = straight;
        self
    }

    /// Set junction glyphs.
    pub fn junctions(mut self, junctions: Junctions) -> Self {
        self.options.junctions = junctions;
        self
    }

    /// Build the options.
    pub fn build(self) -> TableOptions {
        self.options
    }
}
