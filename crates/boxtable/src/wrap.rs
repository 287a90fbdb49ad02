//! Fixed-width wrapping that keeps style sequences intact.
//!
//! A cell is cut into lines of exactly `width` visible characters, counted one
//! per character with no regard for word boundaries. Style sequences never
//! count toward the width and are never split.
//!
//! Styles are tracked per line without interpreting them. Every sequence seen
//! while filling a line is closed with a generic reset at the end of that line
//! and re-emitted, in its original order, at the start of the next line. A
//! sequence that is itself a reset is treated no differently, so cells with
//! explicit resets accumulate redundant sequences across wrapped lines:
//!
//! ```rust
//! use boxtable::wrap::wrap_cell;
//!
//! let lines = wrap_cell("\x1b[1mab\x1b[mcd", 2).unwrap();
//! assert_eq!(lines, vec!["\x1b[1mab\x1b[m", "\x1b[1m\x1b[mcd\x1b[m\x1b[m"]);
//! ```

use std::iter;

use crate::ansi::{tokenize, Token, RESET};
use crate::error::{Result, TableError};

/// A style sequence and the visible position it precedes within its line.
#[derive(Clone, Copy, Debug)]
struct StyleRun<'a> {
    code: &'a str,
    at: usize,
}

/// One line under construction.
#[derive(Debug, Default)]
struct Bucket<'a> {
    text: String,
    visible: usize,
    runs: Vec<StyleRun<'a>>,
}

impl<'a> Bucket<'a> {
    /// Starts the line following `self`, reopening all of its runs.
    fn continuation(&self) -> Self {
        Bucket {
            text: String::new(),
            visible: 0,
            runs: self
                .runs
                .iter()
                .map(|run| StyleRun {
                    code: run.code,
                    at: 0,
                })
                .collect(),
        }
    }

    /// Pads the line to `width` and places its style runs and resets.
    ///
    /// Runs are stored in ascending position order, ties in the order they
    /// were opened. A run positioned after the last character lands before
    /// the padding.
    fn finish(self, width: usize) -> String {
        let padding = width.saturating_sub(self.visible);
        let codes: usize = self.runs.iter().map(|r| r.code.len()).sum();
        let mut out =
            String::with_capacity(self.text.len() + padding + codes + RESET.len() * self.runs.len());

        let mut runs = self.runs.iter().peekable();
        let chars = self.text.chars().chain(iter::repeat(' ').take(padding));
        for (i, c) in chars.enumerate() {
            while let Some(run) = runs.next_if(|r| r.at == i) {
                out.push_str(run.code);
            }
            out.push(c);
        }
        for run in runs {
            out.push_str(run.code);
        }
        for _ in &self.runs {
            out.push_str(RESET);
        }
        out
    }
}

/// Splits `text` into lines of exactly `width` visible characters.
///
/// The last line is padded on the right with spaces. A cell without visible
/// characters produces a single blank line. Style sequences trailing the last
/// visible character, after a line has been filled, are dropped along with
/// the empty line they would have started.
///
/// # Errors
///
/// - [`TableError::MalformedStyleSequence`] if the cell contains an incomplete
///   style sequence.
/// - [`TableError::ZeroWidth`] if `width` is zero and the cell has visible text.
///
/// # Example
///
/// ```rust
/// use boxtable::wrap::wrap_cell;
///
/// assert_eq!(wrap_cell("cell", 3).unwrap(), vec!["cel", "l  "]);
/// assert_eq!(wrap_cell("a", 3).unwrap(), vec!["a  "]);
/// assert_eq!(wrap_cell("", 2).unwrap(), vec!["  "]);
/// ```
pub fn wrap_cell(text: &str, width: usize) -> Result<Vec<String>> {
    let tokens = tokenize(text)?;
    if !tokens.iter().any(|t| matches!(t, Token::Visible(_))) {
        return Ok(vec![" ".repeat(width)]);
    }
    if width == 0 {
        return Err(TableError::ZeroWidth);
    }

    let mut lines = Vec::new();
    let mut bucket = Bucket::default();

    for token in tokens {
        match token {
            Token::Style(code) => bucket.runs.push(StyleRun {
                code,
                at: bucket.visible,
            }),
            Token::Visible(c) => {
                bucket.text.push(c);
                bucket.visible += 1;
                if bucket.visible == width {
                    let next = bucket.continuation();
                    lines.push(std::mem::replace(&mut bucket, next).finish(width));
                }
            }
        }
    }

    if bucket.visible > 0 {
        lines.push(bucket.finish(width));
    }

    Ok(lines)
}
