use std::sync::LazyLock;

use regex::Regex;

use crate::utils::prelude::*;

static ROW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[A-Za-z.]+$").unwrap()
});

/// Splits notation of the form `.T./TTT` (rows separated by slashes or newlines) into rows
/// of cell markers. Blank rows are skipped, so a trailing newline is harmless.
///
/// Only checks the alphabet; extents are the business of whoever builds the grid.
pub fn parse_rows(s: &str) -> Result<Vec<Vec<char>>> {
    let mut rows = vec![];
    for row in s.split(['/', '\n']).map(str::trim).filter(|r| !r.is_empty()) {
        if !ROW_PATTERN.is_match(row) {
            return Err(anyhow!("invalid row {row}; expected letters and '.' only"));
        }
        rows.push(row.chars().collect());
    }
    if rows.is_empty() {
        return Err(anyhow!("notation {s:?} has no rows"));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::parse_rows;

    #[test]
    fn slashes_and_newlines() {
        let a = parse_rows(".T./TTT").unwrap();
        let b = parse_rows(".T.\nTTT\n").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, vec![vec!['.', 'T', '.'], vec!['T', 'T', 'T']]);
    }

    #[test]
    fn keeps_ragged_rows_for_the_caller() {
        let rows = parse_rows("AB/C").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!['C']);
    }

    #[test]
    fn rejects_foreign_characters() {
        assert!(parse_rows("A B").is_err());
        assert!(parse_rows("1..").is_err());
        assert!(parse_rows(" / \n").is_err());
    }
}
