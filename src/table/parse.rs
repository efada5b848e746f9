//! Parse tables from text

use crate::error::{ParseErrorKind, ParseTableError};
use crate::table::MulTable;

const UNKNOWN: &str = ".";
const COMMENT: char = '#';

/// parse a `MulTable` from a string
///
/// Each non-empty line is a row of whitespace-separated products. A product is
/// a 1-based element or `.` if unknown. The number of rows is the table order.
pub(crate) fn parse_table(s: &str) -> Result<MulTable, ParseTableError> {
    let rows: Vec<(usize, Vec<(usize, &str)>)> = s
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with(COMMENT)
        })
        .map(|(i, line)| (i + 1, tokens(line)))
        .collect();
    let order = rows.len();
    if order == 0 {
        return Err(ParseTableError::from_kind(ParseErrorKind::Empty));
    }
    let mut table = MulTable::new(order).map_err(|_| ParseTableError::from_kind(ParseErrorKind::Empty))?;
    for (a, (line, row)) in rows.iter().enumerate() {
        if row.len() != order {
            let (column, token) = row.get(order).or_else(|| row.last()).copied().unwrap_or((1, ""));
            return Err(ParseTableError::new(ParseErrorKind::RaggedRow, token, *line, column));
        }
        for (b, &(column, token)) in row.iter().enumerate() {
            if let Some(c) = parse_product(token, order, *line, column)? {
                table.set_product(a, b, c);
            }
        }
    }
    Ok(table)
}

/// Splits a line into tokens paired with their 1-based column
fn tokens(line: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                tokens.push((s + 1, &line[s..i]));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push((s + 1, &line[s..]));
    }
    tokens
}

fn parse_product(
    token: &str,
    order: usize,
    line: usize,
    column: usize,
) -> Result<Option<usize>, ParseTableError> {
    if token == UNKNOWN {
        return Ok(None);
    }
    let value: usize = token
        .parse()
        .map_err(|_| ParseTableError::new(ParseErrorKind::InvalidToken, token, line, column))?;
    if value < 1 || value > order {
        return Err(ParseTableError::new(ParseErrorKind::ValueOutOfRange, token, line, column));
    }
    Ok(Some(value - 1))
}

#[cfg(test)]
mod tests {
    use crate::error::ParseErrorKind;
    use crate::table::parse::{parse_table, tokens};
    use crate::table::MulTable;

    #[test]
    fn tokens_with_columns() {
        assert_eq!(vec![(1, "1"), (4, "."), (6, "12")], tokens("1  . 12 "));
    }

    #[test]
    fn parse() {
        let table = parse_table("# Z/2\n1 2\n2 .\n").unwrap();
        assert_eq!(2, table.order());
        assert_eq!(Some(0), table.product(0, 0));
        assert_eq!(Some(1), table.product(1, 0));
        assert_eq!(None, table.product(1, 1));
    }

    #[test]
    fn display_parses_back() {
        let table = MulTable::from_assignments(3, vec![(0, 2, 1), (2, 2, 0)]).unwrap();
        assert_eq!(table, parse_table(&table.to_string()).unwrap());
    }

    #[test]
    fn empty() {
        let err = parse_table("\n# nothing\n").unwrap_err();
        assert_eq!(ParseErrorKind::Empty, err.kind());
    }

    #[test]
    fn ragged_row() {
        let err = parse_table("1 2\n2\n").unwrap_err();
        assert_eq!(ParseErrorKind::RaggedRow, err.kind());
    }

    #[test]
    fn value_out_of_range() {
        let err = parse_table("1 3\n. .\n").unwrap_err();
        assert_eq!(ParseErrorKind::ValueOutOfRange, err.kind());
        assert_eq!("Value out of range: \"3\" at 1:3", err.to_string());
        let err = parse_table("0 .\n. .\n").unwrap_err();
        assert_eq!(ParseErrorKind::ValueOutOfRange, err.kind());
    }

    #[test]
    fn invalid_token() {
        let err = parse_table("a .\n. .\n").unwrap_err();
        assert_eq!(ParseErrorKind::InvalidToken, err.kind());
    }
}
