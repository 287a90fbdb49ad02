//! Recognition of terminal style sequences embedded in cell text.
//!
//! Only SGR-shaped sequences are recognized: the escape character, `[`, any
//! number of ASCII digits or `;`, terminated by `m`. They are carried through
//! to the output verbatim but never count toward a cell's width. Width is a
//! plain character count; wide glyphs are not measured as two columns.

use crate::error::{Result, TableError};

/// The escape character that introduces a style sequence.
pub const ESC: char = '\x1b';

/// Generic reset sequence appended when a wrapped line closes its styles.
pub const RESET: &str = "\x1b[m";

/// A piece of cell text: either one visible character or a whole style sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// A character that occupies one column.
    Visible(char),
    /// A complete style sequence, verbatim.
    Style(&'a str),
}

/// Splits `text` into visible characters and style sequences.
///
/// # Errors
///
/// Returns [`TableError::MalformedStyleSequence`] when an escape character is
/// not followed by a complete `[<digits/semicolons>m` tail.
///
/// # Example
///
/// ```rust
/// use boxtable::ansi::{tokenize, Token};
///
/// let tokens = tokenize("\x1b[1mhi").unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::Style("\x1b[1m"), Token::Visible('h'), Token::Visible('i')]
/// );
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::with_capacity(text.len());
    let mut chars = text.char_indices().enumerate();

    while let Some((offset, (start, c))) = chars.next() {
        if c != ESC {
            tokens.push(Token::Visible(c));
            continue;
        }

        let malformed = |end: usize| TableError::MalformedStyleSequence {
            offset,
            fragment: text[start..end].to_string(),
        };

        match chars.next() {
            Some((_, (_, '['))) => {}
            Some((_, (at, other))) => return Err(malformed(at + other.len_utf8())),
            None => return Err(malformed(text.len())),
        }

        loop {
            match chars.next() {
                Some((_, (at, 'm'))) => {
                    tokens.push(Token::Style(&text[start..=at]));
                    break;
                }
                Some((_, (_, d))) if d.is_ascii_digit() || d == ';' => {}
                Some((_, (at, other))) => return Err(malformed(at + other.len_utf8())),
                None => return Err(malformed(text.len())),
            }
        }
    }

    Ok(tokens)
}

/// Returns the number of visible characters in `text`.
///
/// ```rust
/// use boxtable::ansi::visible_width;
///
/// assert_eq!(visible_width("hello").unwrap(), 5);
/// assert_eq!(visible_width("\x1b[38;2;249;38;114mred\x1b[m").unwrap(), 3);
/// ```
pub fn visible_width(text: &str) -> Result<usize> {
    if !text.contains(ESC) {
        return Ok(text.chars().count());
    }
    Ok(tokenize(text)?
        .iter()
        .filter(|t| matches!(t, Token::Visible(_)))
        .count())
}

/// Returns `text` with every style sequence removed.
pub fn strip_styles(text: &str) -> Result<String> {
    Ok(tokenize(text)?
        .into_iter()
        .filter_map(|t| match t {
            Token::Visible(c) => Some(c),
            Token::Style(_) => None,
        })
        .collect())
}
