//! Text embedding format reader
//!
//! One entry per line: `token v0 v1 ... vN-1`, whitespace separated (the
//! GloVe text layout). A word2vec-style `count dimension` header on the first
//! line is skipped. Every entry must have the dimension of the first one.

use std::io::BufRead;
use std::path::Path;

use crate::errors::{Result, SummarizerError};

/// A parsed entry borrowed from its source line
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry<'a> {
    pub token: &'a str,
    pub values: Vec<f32>,
}

/// Parse one line; blank lines yield `None`
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<RawEntry<'_>>> {
    let mut parts = line.split_whitespace();
    let token = match parts.next() {
        Some(token) => token,
        None => return Ok(None),
    };

    let values = parts
        .map(|value| {
            value
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| SummarizerError::InvalidEmbeddingValue {
                    line: line_no,
                    value: value.to_string(),
                })
        })
        .collect::<Result<Vec<f32>>>()?;

    if values.is_empty() {
        return Err(SummarizerError::MissingEmbeddingValues {
            line: line_no,
            token: token.to_string(),
        });
    }

    Ok(Some(RawEntry { token, values }))
}

fn is_header(line: &str) -> bool {
    let parts: Vec<_> = line.split_whitespace().collect();
    parts.len() == 2 && parts.iter().all(|p| p.parse::<usize>().is_ok())
}

/// Read every entry from a reader, checking dimensions as it goes
///
/// `visit` receives each entry in file order. Returns the dimension and the
/// number of entries read. `origin` names the source in I/O errors.
pub fn read_entries<R, F>(reader: R, origin: &Path, mut visit: F) -> Result<(usize, usize)>
where
    R: BufRead,
    F: FnMut(&str, Vec<f32>),
{
    let mut dimension = None;
    let mut count = 0;

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|e| SummarizerError::io(origin, e))?;
        if line_no == 1 && is_header(&line) {
            continue;
        }

        let Some(entry) = parse_line(&line, line_no)? else {
            continue;
        };

        let expected = *dimension.get_or_insert(entry.values.len());
        if entry.values.len() != expected {
            return Err(SummarizerError::MalformedEmbedding {
                line: line_no,
                expected,
                found: entry.values.len(),
            });
        }

        visit(entry.token, entry.values);
        count += 1;
    }

    match dimension {
        Some(dimension) => Ok((dimension, count)),
        None => Err(SummarizerError::EmptyEmbeddingSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_line() {
        let entry = parse_line("dog 0.1 -0.2 3e-1", 1).unwrap().unwrap();
        assert_eq!(entry.token, "dog");
        assert_eq!(entry.values, vec![0.1, -0.2, 0.3]);

        assert!(parse_line("   ", 2).unwrap().is_none());
    }

    #[test]
    fn test_parse_line_errors() {
        let err = parse_line("dog 0.1 abc", 4).unwrap_err();
        assert!(matches!(
            err,
            SummarizerError::InvalidEmbeddingValue { line: 4, ref value } if value == "abc"
        ));

        let err = parse_line("dog", 5).unwrap_err();
        assert!(matches!(err, SummarizerError::MissingEmbeddingValues { line: 5, .. }));

        let err = parse_line("dog NaN 1.0", 6).unwrap_err();
        assert!(matches!(err, SummarizerError::InvalidEmbeddingValue { line: 6, .. }));
    }

    #[test]
    fn test_read_entries() {
        let data = "dog 1 0\n\ncat 0 1\n";
        let mut seen = Vec::new();
        let (dim, count) = read_entries(Cursor::new(data), Path::new("test"), |t, v| {
            seen.push((t.to_string(), v))
        })
        .unwrap();

        assert_eq!(dim, 2);
        assert_eq!(count, 2);
        assert_eq!(seen[1], ("cat".to_string(), vec![0.0, 1.0]));
    }

    #[test]
    fn test_dimension_mismatch_reports_line() {
        let data = "dog 1 0\ncat 0 1\nbird 1\n";
        let err = read_entries(Cursor::new(data), Path::new("test"), |_, _| {}).unwrap_err();
        assert!(matches!(
            err,
            SummarizerError::MalformedEmbedding {
                line: 3,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_word2vec_header_skipped() {
        let data = "2 3\ndog 1 0 0\ncat 0 1 0\n";
        let (dim, count) = read_entries(Cursor::new(data), Path::new("test"), |_, _| {}).unwrap();
        assert_eq!((dim, count), (3, 2));
    }

    #[test]
    fn test_empty_source() {
        let err = read_entries(Cursor::new("\n\n"), Path::new("test"), |_, _| {}).unwrap_err();
        assert!(matches!(err, SummarizerError::EmptyEmbeddingSource));
    }
}
