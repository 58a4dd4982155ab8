//! Pattern files.
//!
//! A pattern file holds one integer per pixel, separated by any mix of
//! spaces and newlines. Blank lines are ignored.

use crate::error::{HopfieldError, Result};
use crate::kernel::Pattern;
use std::path::Path;

/// Parse pattern text. `path` is only used in error messages.
pub fn parse_pattern(text: &str, path: &Path) -> Result<Pattern> {
    let values = text
        .split_whitespace()
        .map(|token| {
            token.parse::<i32>().map_err(|_| HopfieldError::Parse {
                path: path.to_path_buf(),
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<i32>>>()?;
    Ok(Pattern::from_ints(&values))
}

/// Read and parse one pattern file.
pub fn read_pattern(path: impl AsRef<Path>) -> Result<Pattern> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    parse_pattern(&text, path)
}

/// Read a pattern and check it has exactly `expected` units.
pub fn read_pattern_of_len(path: impl AsRef<Path>, expected: usize) -> Result<Pattern> {
    let pattern = read_pattern(path)?;
    if pattern.dimensions() != expected {
        return Err(HopfieldError::DimensionMismatch {
            expected,
            got: pattern.dimensions(),
        });
    }
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_mixed_whitespace() {
        let text = "1 0  1\n\n0\t1\n  -1 \n";
        let p = parse_pattern(text, Path::new("glyph.txt")).unwrap();
        assert_eq!(p.data(), &[1.0, 0.0, 1.0, 0.0, 1.0, -1.0]);
    }

    #[test]
    fn test_empty_text() {
        let p = parse_pattern("\n  \n", Path::new("empty.txt")).unwrap();
        assert_eq!(p.dimensions(), 0);
    }

    #[test]
    fn test_bad_token() {
        let err = parse_pattern("1 0 x 1", Path::new("bad.txt")).unwrap_err();
        match err {
            HopfieldError::Parse { path, token } => {
                assert_eq!(path, Path::new("bad.txt"));
                assert_eq!(token, "x");
            }
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_read_with_length_check() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 1 1\n0 0 0").unwrap();

        let p = read_pattern_of_len(file.path(), 6).unwrap();
        assert_eq!(p.dimensions(), 6);

        let err = read_pattern_of_len(file.path(), 63).unwrap_err();
        assert!(matches!(
            err,
            HopfieldError::DimensionMismatch {
                expected: 63,
                got: 6
            }
        ));
    }
}
