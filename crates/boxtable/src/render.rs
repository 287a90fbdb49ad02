//! Table assembly: borders, wrapped cells and column separators.

use crate::error::Result;
use crate::normalize::normalize_rows;
use crate::options::{Glyph, TableOptions};
use crate::widths::{plan_widths, ColumnWidths};
use crate::wrap::wrap_cell;

/// Renders `rows` as a box-drawn table.
///
/// Multi-line cells are split into stacked rows, column widths are planned
/// against `options.max_width`, and every cell is wrapped to its column's
/// width. The result ends with a newline after the bottom border.
///
/// ```rust
/// use boxtable::{render, TableOptions};
///
/// let options = TableOptions::builder().padding(0).build();
/// let table = render(&[["cell"]], &options).unwrap();
/// assert_eq!(table, "┌────┐\n│cell│\n└────┘\n");
/// ```
///
/// # Errors
///
/// Fails with [`TableError::MalformedStyleSequence`](crate::TableError::MalformedStyleSequence)
/// if any cell holds an incomplete style sequence.
pub fn render<'a, R, S>(rows: &'a [R], options: &TableOptions) -> Result<String>
where
    R: AsRef<[S]>,
    S: AsRef<str> + 'a,
{
    let rows = normalize_rows(rows, options.space_linebroken);
    let widths = plan_widths(&rows, options.max_width.limit())?;
    render_normalized(&rows, &widths, options)
}

/// Renders already-normalized rows at the given column widths.
pub fn render_normalized<S: AsRef<str>>(
    rows: &[Vec<S>],
    widths: &ColumnWidths,
    options: &TableOptions,
) -> Result<String> {
    let mut table = String::new();
    let (corners, junctions) = (&options.corners, &options.junctions);

    push_border(
        &mut table,
        widths,
        options,
        corners.top_right,
        junctions.top,
        corners.top_left,
    );
    for row in rows {
        push_row(&mut table, row, widths, options)?;
    }
    push_border(
        &mut table,
        widths,
        options,
        corners.bottom_right,
        junctions.bottom,
        corners.bottom_left,
    );

    Ok(table)
}

fn push_border(
    out: &mut String,
    widths: &ColumnWidths,
    options: &TableOptions,
    start: Glyph,
    junction: Glyph,
    end: Glyph,
) {
    let horizontal = options.straight.horizontal.as_char();
    out.push(start.as_char());
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(junction.as_char());
        }
        out.extend(std::iter::repeat(horizontal).take(width + options.padding * 2));
    }
    out.push(end.as_char());
    out.push('\n');
}

fn push_row<S: AsRef<str>>(
    out: &mut String,
    row: &[S],
    widths: &ColumnWidths,
    options: &TableOptions,
) -> Result<()> {
    let mut cells = Vec::with_capacity(widths.len());
    for (col, width) in widths.iter().enumerate() {
        let text = row.get(col).map_or("", |s| s.as_ref());
        cells.push(wrap_cell(text, width)?);
    }

    let mut height = cells.iter().map(Vec::len).max().unwrap_or(0);
    if height > 1 && options.space_linebroken {
        height += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(columns = cells.len(), height, "rendering row");

    for (cell, width) in cells.iter_mut().zip(widths.iter()) {
        cell.resize(height, " ".repeat(width));
    }

    let pad = " ".repeat(options.padding);
    let vertical = options.straight.vertical.as_char();

    for line in 0..height {
        out.push(vertical);
        out.push_str(&pad);
        for (col, cell) in cells.iter().enumerate() {
            if col > 0 {
                out.push_str(&pad);
                out.push(vertical);
                out.push_str(&pad);
            }
            out.push_str(&cell[line]);
        }
        out.push_str(&pad);
        out.push(vertical);
        out.push('\n');
    }

    Ok(())
}

/// A reusable table renderer bound to one set of options.
///
/// ```rust
/// use boxtable::{BorderStyle, Table, TableOptions};
///
/// let table = Table::new(TableOptions::builder().border(BorderStyle::Ascii).build());
/// let out = table.render(&[vec!["a", "b"]]).unwrap();
/// assert_eq!(out, "+---+---+\n| a | b |\n+---+---+\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Table {
    options: TableOptions,
}

impl Table {
    /// Create a table renderer with the given options.
    pub fn new(options: TableOptions) -> Self {
        Table { options }
    }

    /// The options this table renders with.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Render `rows` with this table's options.
    pub fn render<'a, R, S>(&self, rows: &'a [R]) -> Result<String>
    where
        R: AsRef<[S]>,
        S: AsRef<str> + 'a,
    {
        render(rows, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BorderStyle, MaxWidth};

    fn plain(padding: usize) -> TableOptions {
        TableOptions::builder().padding(padding).build()
    }

    #[test]
    fn test_single_cell() {
        let out = render(&[["cell"]], &plain(1)).unwrap();
        assert_eq!(out, "┌──────┐\n│ cell │\n└──────┘\n");
    }

    #[test]
    fn test_middle_junction_never_drawn() {
        let options = TableOptions::builder()
            .padding(0)
            .junctions(crate::options::Junctions::new("T", "+", "W").unwrap())
            .build();
        let out = render(&[vec!["a\nb", "c"], vec!["d", "e"]], &options).unwrap();
        assert!(!out.contains('+'));
        assert_eq!(out, "┌─T─┐\n│a│c│\n│b│ │\n│ │ │\n│d│e│\n└─W─┘\n");
    }

    #[test]
    fn test_no_rows() {
        let rows: Vec<Vec<&str>> = Vec::new();
        assert_eq!(render(&rows, &plain(1)).unwrap(), "┌┐\n└┘\n");
    }

    #[test]
    fn test_rows_without_cells() {
        let rows: Vec<Vec<&str>> = vec![vec![], vec![]];
        assert_eq!(render(&rows, &plain(2)).unwrap(), "┌┐\n└┘\n");
    }

    #[test]
    fn test_empty_cells_render_padding_only() {
        let out = render(&[["", ""]], &plain(1)).unwrap();
        assert_eq!(out, "┌──┬──┐\n│  │  │\n└──┴──┘\n");
    }

    #[test]
    fn test_ragged_rows() {
        let out = render(&[vec!["a", "b"], vec!["c"]], &plain(0)).unwrap();
        assert_eq!(out, "┌─┬─┐\n│a│b│\n│c│ │\n└─┴─┘\n");
    }

    #[test]
    fn test_wrapped_row_height_without_spacing() {
        let options = TableOptions::builder()
            .padding(0)
            .max_width(5)
            .space_linebroken(false)
            .build();
        let out = render(&[["cell"]], &options).unwrap();
        assert_eq!(out, "┌───┐\n│cel│\n│l  │\n└───┘\n");
    }

    #[test]
    fn test_rounded_border() {
        let table = Table::new(
            TableOptions::builder()
                .padding(0)
                .border(BorderStyle::Rounded)
                .build(),
        );
        assert_eq!(table.render(&[["x"]]).unwrap(), "╭─╮\n│x│\n╰─╯\n");
        assert_eq!(table.options().max_width, MaxWidth::Unbounded);
    }

    #[test]
    fn test_malformed_cell_fails() {
        assert!(render(&[["\x1b[1"]], &plain(0)).is_err());
    }
}
