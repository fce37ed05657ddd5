//! Parsing of the graph source format.
//!
//! Each non-blank line describes one vertex with three `;`-separated fields:
//! the name, a `,`-separated list of adjacent names, and an `x,y`
//! coordinate pair. Whitespace around every token is ignored.

use crate::error::{LoadError, Result};
use crate::vertex::Position;

const FIELD_SEPARATOR: char = ';';
const LIST_SEPARATOR: char = ',';

/// One parsed line of the graph source.
///
/// Adjacent names are kept as strings; they are resolved once every
/// record has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number within the source this record came from.
    pub line: usize,
    pub name: String,
    /// Adjacent vertex names in file order.
    pub adjacent: Vec<String>,
    pub position: Position,
}

/// Parses a single source line.
///
/// Returns `Ok(None)` for blank lines. Empty adjacency entries are dropped,
/// so `A;;0,0` is a vertex with no neighbours.
pub fn parse_record(text: &str, line: usize) -> Result<Option<Record>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    if fields.len() != 3 {
        return Err(LoadError::malformed(
            line,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    }

    let name = fields[0].trim();
    if name.is_empty() {
        return Err(LoadError::malformed(line, "vertex name is empty"));
    }

    let adjacent = fields[1]
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    let position = parse_position(fields[2], line)?;

    Ok(Some(Record {
        line,
        name: name.to_string(),
        adjacent,
        position,
    }))
}

/// Parses every line of a source, skipping blank ones.
///
/// Stops at the first malformed line.
pub fn parse_source(source: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (index, text) in source.lines().enumerate() {
        if let Some(record) = parse_record(text, index + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

fn parse_position(field: &str, line: usize) -> Result<Position> {
    let parts: Vec<&str> = field.split(LIST_SEPARATOR).map(str::trim).collect();
    if parts.len() != 2 {
        return Err(LoadError::malformed(
            line,
            format!("expected an x,y coordinate pair, found \"{}\"", field.trim()),
        ));
    }

    let coordinate = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| LoadError::malformed(line, format!("invalid coordinate \"{}\"", s)))
    };

    Ok(Position::new(coordinate(parts[0])?, coordinate(parts[1])?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_record() {
        let record = parse_record("B;A,C;10,0", 2).unwrap().unwrap();
        assert_eq!(record.line, 2);
        assert_eq!(record.name, "B");
        assert_eq!(record.adjacent, vec!["A", "C"]);
        assert_eq!(record.position, Position::new(10, 0));
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let record = parse_record("  Collis Center ;  Baker ,Sanborn  ; 12 , -7 ", 1)
            .unwrap()
            .unwrap();
        assert_eq!(record.name, "Collis Center");
        assert_eq!(record.adjacent, vec!["Baker", "Sanborn"]);
        assert_eq!(record.position, Position::new(12, -7));
    }

    #[test]
    fn test_empty_adjacency() {
        let record = parse_record("A;;0,0", 1).unwrap().unwrap();
        assert!(record.adjacent.is_empty());

        let padded = parse_record("A;  ;0,0", 1).unwrap().unwrap();
        assert!(padded.adjacent.is_empty());
    }

    #[test]
    fn test_blank_line_is_skipped() {
        assert!(parse_record("", 1).unwrap().is_none());
        assert!(parse_record("   \t", 1).unwrap().is_none());
    }

    #[test]
    fn test_non_integer_coordinate() {
        let err = parse_record("A;B;notanumber", 4).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { line: 4, .. }));

        let err = parse_record("A;B;1.5,2", 1).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { .. }));
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_record("A;0,0", 3).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { line: 3, .. }));
        assert_eq!(err.line(), Some(3));

        let err = parse_record("A;B;0,0;extra", 1).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { .. }));
    }

    #[test]
    fn test_empty_name() {
        let err = parse_record(" ;B;0,0", 1).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { .. }));
    }

    #[test]
    fn test_parse_source_numbers_lines() {
        let source = "A;B;0,0\n\nB;A;5,5\n";
        let records = parse_source(source).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[1].line, 3);
    }

    #[test]
    fn test_parse_source_stops_at_first_error() {
        let err = parse_source("A;B;0,0\nB;A;x,y\nC;;1").unwrap_err();
        assert_eq!(err.line(), Some(2));
    }
}
