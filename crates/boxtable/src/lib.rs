//! # boxtable - Box-Drawn Text Tables
//!
//! `boxtable` renders rows of text as a fixed-width grid framed with
//! box-drawing characters. Cells may span several lines and may carry terminal
//! style sequences (`ESC [ ... m`); those are kept intact and never count
//! toward column widths.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxtable::{render, TableOptions};
//!
//! let rows = vec![
//!     vec!["first", "second"],
//!     vec!["third", "i am fourth"],
//! ];
//!
//! let table = render(&rows, &TableOptions::builder().padding(0).build()).unwrap();
//! assert_eq!(
//!     table,
//!     "┌─────┬───────────┐\n\
//!      │first│second     │\n\
//!      │third│i am fourth│\n\
//!      └─────┴───────────┘\n"
//! );
//! ```
//!
//! ## Pipeline
//!
//! 1. [`normalize`]: multi-line cells become stacked rows, optionally followed
//!    by a blank separator row.
//! 2. [`widths`]: each column's natural width is measured and, under a
//!    [`MaxWidth`] limit, wide columns are clipped to an even share.
//! 3. [`wrap`]: each cell is cut into lines of exactly its column's width,
//!    closing and reopening style sequences across line breaks.
//! 4. [`render()`]: borders, padding and column separators are assembled.
//!
//! ## Width Limits
//!
//! ```rust
//! use boxtable::{render, TableOptions};
//!
//! let options = TableOptions::builder().padding(0).max_width(5).build();
//! assert_eq!(
//!     render(&[["cell"]], &options).unwrap(),
//!     "┌───┐\n│cel│\n│l  │\n│   │\n└───┘\n"
//! );
//! ```
//!
//! ## Configuration
//!
//! [`TableOptions`] can be built in code, or loaded from YAML or JSON with
//! [`TableOptions::from_yaml`], [`TableOptions::from_json`] and
//! [`TableOptions::from_file`]. Glyph sets are available as [`BorderStyle`]
//! presets.
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, width planning and row layout emit
//! `tracing` events at debug and trace level.

pub mod ansi;
mod error;
pub mod normalize;
mod options;
mod render;
pub mod widths;
pub mod wrap;

pub use error::{Result, TableError};
pub use options::{
    BorderStyle, Corners, Glyph, Junctions, MaxWidth, Straight, TableOptions,
    TableOptionsBuilder,
};
pub use render::{render, render_normalized, Table};
pub use widths::ColumnWidths;
