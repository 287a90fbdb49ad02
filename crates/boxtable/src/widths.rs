//! Column width planning.
//!
//! Every column starts at its natural width: the widest visible text of any
//! of its cells. When a width limit is set and the natural widths overflow the
//! space left after one frame character per column boundary, each column wider
//! than an even share of that space is clipped to the share. Narrower columns
//! keep their natural width, and the space they leave unused is not handed to
//! the clipped columns.

use crate::ansi::visible_width;
use crate::error::Result;

/// Final widths for each column, in display characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    widths: Vec<usize>,
    natural: Vec<usize>,
}

impl ColumnWidths {
    /// Get the width of a column by index.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Sum of all column widths.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Whether there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Final widths as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.widths
    }

    /// Iterate over final widths.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.widths.iter().copied()
    }

    /// Widths before any clipping.
    pub fn natural(&self) -> &[usize] {
        &self.natural
    }
}

impl From<Vec<usize>> for ColumnWidths {
    fn from(widths: Vec<usize>) -> Self {
        ColumnWidths {
            natural: widths.clone(),
            widths,
        }
    }
}

/// Computes the natural width of every column of `rows`.
///
/// Rows are expected to be rectangular (see
/// [`normalize_rows`](crate::normalize::normalize_rows)); missing cells count
/// as empty.
pub fn natural_widths<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Vec<usize>> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(visible_width(cell.as_ref())?);
        }
    }
    Ok(widths)
}

/// Plans column widths for `rows` under an optional total width limit.
///
/// ```rust
/// use boxtable::widths::plan_widths;
///
/// let rows = vec![vec!["short", "im long im long im long", "smol"]];
/// // 20 minus 4 frame characters leaves 16, an even share of 5 per column.
/// let widths = plan_widths(&rows, Some(20)).unwrap();
/// assert_eq!(widths.as_slice(), &[5, 5, 4]);
/// ```
pub fn plan_widths<S: AsRef<str>>(
    rows: &[Vec<S>],
    max_width: Option<usize>,
) -> Result<ColumnWidths> {
    let natural = natural_widths(rows)?;
    Ok(balance(natural, max_width))
}

/// Clips `natural` widths to fit `max_width`.
pub fn balance(natural: Vec<usize>, max_width: Option<usize>) -> ColumnWidths {
    let Some(max_width) = max_width else {
        return ColumnWidths::from(natural);
    };

    let columns = natural.len();
    let budget = max_width.saturating_sub(columns + 1);
    let total: usize = natural.iter().sum();
    if columns == 0 || total <= budget {
        return ColumnWidths::from(natural);
    }

    let share = (budget / columns).max(1);
    let widths: Vec<usize> = natural.iter().map(|&w| w.min(share)).collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        ?natural,
        budget,
        share,
        ?widths,
        "clipped columns to fit max width"
    );

    ColumnWidths { widths, natural }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_natural_widths_ignore_styles() {
        let data = rows(&[&["ab", "\x1b[31mred\x1b[m"], &["abcd", ""]]);
        assert_eq!(natural_widths(&data).unwrap(), vec![4, 3]);
    }

    #[test]
    fn test_natural_widths_propagates_malformed() {
        let data = rows(&[&["\x1b[31"]]);
        assert!(natural_widths(&data).is_err());
    }

    #[test]
    fn test_unbounded_keeps_natural() {
        let widths = balance(vec![5, 40, 10], None);
        assert_eq!(widths.as_slice(), &[5, 40, 10]);
        assert_eq!(widths.natural(), &[5, 40, 10]);
    }

    #[test]
    fn test_fits_budget_keeps_natural() {
        // 3 columns + 4 frame characters == 20
        let widths = balance(vec![5, 6, 5], Some(20));
        assert_eq!(widths.as_slice(), &[5, 6, 5]);
    }

    #[test]
    fn test_overflow_clips_to_even_share() {
        let widths = balance(vec![5, 40, 10], Some(20));
        assert_eq!(widths.as_slice(), &[5, 5, 5]);
        assert_eq!(widths.natural(), &[5, 40, 10]);
    }

    #[test]
    fn test_narrow_columns_do_not_donate_space() {
        // budget 27, share 9: the 2-wide column leaves 7 unused that the wide
        // column does not receive.
        let widths = balance(vec![2, 40, 30], Some(31));
        assert_eq!(widths.as_slice(), &[2, 9, 9]);
        assert_eq!(widths.total(), 20);
    }

    #[test]
    fn test_share_floors_at_one() {
        let widths = balance(vec![5, 11], Some(5));
        assert_eq!(widths.as_slice(), &[1, 1]);

        let widths = balance(vec![5, 11], Some(0));
        assert_eq!(widths.as_slice(), &[1, 1]);
    }

    #[test]
    fn test_zero_width_columns_stay_zero() {
        let widths = balance(vec![0, 30], Some(10));
        assert_eq!(widths.as_slice(), &[0, 3]);
    }

    #[test]
    fn test_no_columns() {
        let widths = balance(vec![], Some(3));
        assert!(widths.is_empty());
        assert_eq!(widths.len(), 0);
        assert_eq!(widths.get(0), None);
    }
}
