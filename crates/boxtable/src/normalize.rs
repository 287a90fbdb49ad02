//! Splitting of multi-line cells into stacked rows.

/// Expands every input row into one row per line of its tallest cell.
///
/// Each cell is split on line breaks (`\n`, with `\r\n` treated as one break).
/// Cells with fewer lines than the tallest are padded with empty strings, and
/// the lines are transposed so that line `i` of every cell forms row `i`. When
/// a row expands into more than one line and `space_linebroken` is set, an
/// all-empty row is appended after it.
///
/// Trailing line breaks do not add lines: `"a\n\n"` is a single line. The
/// separator row holds empty strings, so a column containing nothing but
/// separators and empty cells measures 0 wide.
///
/// Rows shorter than the widest row are padded with empty cells, so every
/// returned row has the same number of cells.
///
/// ```rust
/// use boxtable::normalize::normalize_rows;
///
/// let input = [vec!["first", "sec\nond"]];
/// let rows = normalize_rows(&input, true);
/// assert_eq!(
///     rows,
///     vec![vec!["first", "sec"], vec!["", "ond"], vec!["", ""]]
/// );
/// ```
pub fn normalize_rows<'a, R, S>(rows: &'a [R], space_linebroken: bool) -> Vec<Vec<&'a str>>
where
    R: AsRef<[S]>,
    S: AsRef<str> + 'a,
{
    let columns = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
    let mut normalized = Vec::with_capacity(rows.len());

    for row in rows {
        let cells: Vec<Vec<&str>> = row
            .as_ref()
            .iter()
            .map(|c| split_lines(c.as_ref()))
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);

        for line in 0..height {
            let mut out = Vec::with_capacity(columns);
            for col in 0..columns {
                let text = cells
                    .get(col)
                    .and_then(|lines| lines.get(line))
                    .copied()
                    .unwrap_or("");
                out.push(text);
            }
            normalized.push(out);
        }

        if height > 1 && space_linebroken {
            normalized.push(vec![""; columns]);
        }
    }

    normalized
}

// Trailing empty lines are dropped, but an empty cell still occupies one line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        lines.push("");
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_rows_pass_through() {
        let rows = [["first", "second"], ["third", "i am fourth"]];
        let normalized = normalize_rows(&rows, true);
        assert_eq!(
            normalized,
            vec![vec!["first", "second"], vec!["third", "i am fourth"]]
        );
    }

    #[test]
    fn test_multi_line_without_separator() {
        let rows = [vec!["first", "sec\nond"], vec!["third", "fourth"]];
        let normalized = normalize_rows(&rows, false);
        assert_eq!(
            normalized,
            vec![
                vec!["first", "sec"],
                vec!["", "ond"],
                vec!["third", "fourth"],
            ]
        );
    }

    #[test]
    fn test_multi_line_with_separator() {
        let rows = [vec!["a\nb\nc", "d"]];
        let normalized = normalize_rows(&rows, true);
        assert_eq!(
            normalized,
            vec![vec!["a", "d"], vec!["b", ""], vec!["c", ""], vec!["", ""]]
        );
    }

    #[test]
    fn test_crlf_and_trailing_newline() {
        let rows = [vec!["one\r\ntwo\n"]];
        let normalized = normalize_rows(&rows, false);
        assert_eq!(normalized, vec![vec!["one"], vec!["two"]]);
    }

    #[test]
    fn test_trailing_line_breaks_add_no_lines() {
        let rows = [vec!["a\n\n", "b"], vec!["c\r\n\r\n\n", "d"]];
        let normalized = normalize_rows(&rows, true);
        assert_eq!(normalized, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_inner_blank_lines_are_kept() {
        let rows = [vec!["a\n\nb\n\n"]];
        let normalized = normalize_rows(&rows, false);
        assert_eq!(normalized, vec![vec!["a"], vec![""], vec!["b"]]);
    }

    #[test]
    fn test_only_line_breaks_is_one_empty_line() {
        let rows = [vec!["\n\n", "x"]];
        let normalized = normalize_rows(&rows, true);
        assert_eq!(normalized, vec![vec!["", "x"]]);
    }

    #[test]
    fn test_empty_cells_keep_their_row() {
        let rows = [vec!["", ""]];
        let normalized = normalize_rows(&rows, true);
        assert_eq!(normalized, vec![vec!["", ""]]);
    }

    #[test]
    fn test_ragged_rows_padded_with_empty_cells() {
        let rows: Vec<Vec<String>> = vec![
            vec!["a".into(), "b".into(), "c".into()],
            vec!["d".into()],
        ];
        let normalized = normalize_rows(&rows, true);
        assert_eq!(normalized, vec![vec!["a", "b", "c"], vec!["d", "", ""]]);
    }

    #[test]
    fn test_no_rows() {
        let rows: [[&str; 0]; 0] = [];
        assert!(normalize_rows(&rows, true).is_empty());
    }
}
