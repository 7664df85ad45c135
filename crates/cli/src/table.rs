//! Tabular I/O: city sets in, scored-tour tables out.
//!
//! - Input CSV needs `x` and `y` columns (any numeric type; cast to f64).
//! - Output tables have one row per enumerated tour; `.parquet` paths get
//!   Parquet, anything else CSV.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use tsp_exact::api::{Point, Step};

/// Load a city set from a CSV file with `x` and `y` columns.
pub fn read_points_csv(path: &str) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {path}"))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {path}"))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Point::new(x, y)),
            _ => bail!("{path}: row {row} is missing a coordinate"),
        }
    }
    tracing::info!(path, cities = points.len(), "points_csv");
    Ok(points)
}

/// One row per step: enumeration index, tour, its length, running best.
pub fn steps_frame(steps: &[Step]) -> Result<DataFrame> {
    let index: Vec<u64> = steps.iter().map(|s| s.index).collect();
    let tour: Vec<String> = steps.iter().map(|s| s.tour.to_string()).collect();
    let length: Vec<f64> = steps.iter().map(|s| s.length).collect();
    let best_length: Vec<f64> = steps.iter().map(|s| s.best_length).collect();
    let improved: Vec<bool> = steps.iter().map(|s| s.improved).collect();
    let df = df!(
        "index" => index,
        "tour" => tour,
        "length" => length,
        "best_length" => best_length,
        "improved" => improved
    )?;
    Ok(df)
}

/// Write `df` to `out`, creating parent directories.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let is_parquet = out.extension().is_some_and(|ext| ext == "parquet");
    if is_parquet {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).finish(df)?;
    }
    tracing::info!(out = %out.display(), rows = df.height(), "table_written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tsp_exact::api::solve_streaming;

    #[test]
    fn reads_integer_and_float_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        std::fs::write(&path, "x,y\n0,0\n10,0\n0,10.5\n").unwrap();
        let pts = read_points_csv(path.to_str().unwrap()).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[2], Point::new(0.0, 10.5));
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "x,z\n0,0\n").unwrap();
        assert!(read_points_csv(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn steps_table_round_trips_through_csv() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        let steps: Vec<Step> = solve_streaming(&pts).unwrap().collect();
        let mut df = steps_frame(&steps).unwrap();
        assert_eq!(df.shape(), (6, 5));

        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("tours.csv");
        write_frame(&mut df, &out).unwrap();
        let back = LazyCsvReader::new(&out).finish().unwrap().collect().unwrap();
        assert_eq!(back.height(), 6);
        assert_eq!(back.width(), 5);
    }
}
