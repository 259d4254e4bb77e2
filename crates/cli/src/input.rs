//! Point loading for the CLI: plain `x y` text, or `.csv` through polars.

use anyhow::{bail, Context, Result};
use nalgebra::Vector2;
use polars::prelude::*;
use std::path::Path;

/// Load points in file order. CSV files need a header row; the first two
/// columns are read as x and y.
pub fn load_points(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let is_csv = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    let points = if is_csv {
        load_csv(path)?
    } else {
        dchull::io::read_points(path).with_context(|| format!("loading {}", path.display()))?
    };
    tracing::info!(path = %path.display(), points = points.len(), csv = is_csv, "loaded");
    Ok(points)
}

fn load_csv(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening csv {}", path.display()))?
        .collect()?;
    let cols = df.get_columns();
    if cols.len() < 2 {
        bail!("{}: expected at least 2 columns, found {}", path.display(), cols.len());
    }
    let xs = cols[0].cast(&DataType::Float64)?;
    let ys = cols[1].cast(&DataType::Float64)?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.f64()?.into_iter().zip(ys.f64()?.into_iter()).enumerate() {
        let (Some(x), Some(y)) = (x, y) else {
            bail!("{}: row {} has a missing coordinate", path.display(), row + 1);
        };
        if !x.is_finite() || !y.is_finite() {
            bail!("{}: row {} is not finite", path.display(), row + 1);
        }
        out.push(Vector2::new(x, y));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_text_points() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("pts.txt");
        fs::write(&p, "0 0\n4 0\n\n2 3\n").unwrap();
        let pts = load_points(&p).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[2], Vector2::new(2.0, 3.0));
    }

    #[test]
    fn loads_csv_points() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("pts.csv");
        fs::write(&p, "x,y\n0,0\n4.5,1\n-1,2\n").unwrap();
        let pts = load_points(&p).unwrap();
        assert_eq!(
            pts,
            vec![Vector2::new(0.0, 0.0), Vector2::new(4.5, 1.0), Vector2::new(-1.0, 2.0)]
        );
    }

    #[test]
    fn text_parse_errors_carry_the_line() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("bad.txt");
        fs::write(&p, "0 0\n1 two\n").unwrap();
        let err = load_points(&p).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }
}
