//! Point files: one `x y` pair per line, whitespace separated.

use std::fmt;
use std::fs;
use std::path::Path;

use nalgebra::Vector2;

/// What was wrong with a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    FieldCount { found: usize },
    BadNumber { field: String },
    NonFinite { field: String },
}

/// Malformed coordinate line (1-based `line`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::FieldCount { found } => write!(
                f,
                "line {}: expected 2 coordinates, found {found}",
                self.line
            ),
            ParseErrorKind::BadNumber { field } => {
                write!(f, "line {}: {field:?} is not a number", self.line)
            }
            ParseErrorKind::NonFinite { field } => {
                write!(f, "line {}: {field:?} is not finite", self.line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Reading a point file failed.
#[derive(Debug)]
pub enum ReadError {
    Io(std::io::Error),
    Parse(ParseError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "reading points: {e}"),
            ReadError::Parse(e) => write!(f, "parsing points: {e}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            ReadError::Parse(e) => Some(e),
        }
    }
}

/// Parse points in file order. Blank lines are skipped.
pub fn parse_points(text: &str) -> Result<Vec<Vector2<f64>>, ParseError> {
    let mut out = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 2 {
            return Err(ParseError {
                line,
                kind: ParseErrorKind::FieldCount {
                    found: fields.len(),
                },
            });
        }
        let x = parse_coord(fields[0], line)?;
        let y = parse_coord(fields[1], line)?;
        out.push(Vector2::new(x, y));
    }
    Ok(out)
}

fn parse_coord(field: &str, line: usize) -> Result<f64, ParseError> {
    let v: f64 = field.parse().map_err(|_| ParseError {
        line,
        kind: ParseErrorKind::BadNumber {
            field: field.to_string(),
        },
    })?;
    if !v.is_finite() {
        return Err(ParseError {
            line,
            kind: ParseErrorKind::NonFinite {
                field: field.to_string(),
            },
        });
    }
    Ok(v)
}

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Vector2<f64>>, ReadError> {
    let text = fs::read_to_string(path).map_err(ReadError::Io)?;
    parse_points(&text).map_err(ReadError::Parse)
}

/// Inverse of `parse_points` (shortest round-trip float formatting).
pub fn format_points(points: &[Vector2<f64>]) -> String {
    let mut s = String::with_capacity(points.len() * 16);
    for p in points {
        s.push_str(&format!("{} {}\n", p.x, p.y));
    }
    s
}
