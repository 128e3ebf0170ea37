//! Loading samples from CSV files and parsing point lists.
//!
//! Series files have `x,y` columns. Grid files are in long format with
//! `x,y,z` columns and one row per node, in any order.

use std::path::Path;

use cfspline_math::interpolation::Grid2D;
use ndarray::Array2;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{CliError, CliResult};

#[derive(Debug, Deserialize)]
struct SeriesRow {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct GridRow {
    x: f64,
    y: f64,
    z: f64,
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> CliResult<Vec<T>> {
    let input_error = |source| CliError::Input {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(input_error)?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(input_error)?;
    if rows.is_empty() {
        return Err(CliError::EmptyInput(path.to_path_buf()));
    }
    Ok(rows)
}

/// Reads an `x,y` series, returning abscissas and ordinates in file order.
pub fn load_series(path: &Path) -> CliResult<(Vec<f64>, Vec<f64>)> {
    let rows: Vec<SeriesRow> = read_rows(path)?;
    tracing::debug!(path = %path.display(), samples = rows.len(), "series loaded");
    Ok(rows.into_iter().map(|r| (r.x, r.y)).unzip())
}

/// Reads a long-format `x,y,z` grid.
///
/// The distinct x and y values become the grid axes; every (x, y) node must
/// appear exactly once.
pub fn load_grid(path: &Path) -> CliResult<Grid2D> {
    let rows: Vec<GridRow> = read_rows(path)?;
    let xs = distinct_sorted(rows.iter().map(|r| r.x));
    let ys = distinct_sorted(rows.iter().map(|r| r.y));

    let mut cells: Array2<Option<f64>> = Array2::from_elem((xs.len(), ys.len()), None);
    for row in &rows {
        let i = axis_index(&xs, row.x);
        let j = axis_index(&ys, row.y);
        let cell = &mut cells[[i, j]];
        if cell.is_some() {
            return Err(CliError::DuplicateNode { x: row.x, y: row.y });
        }
        *cell = Some(row.z);
    }

    let mut z = Array2::<f64>::zeros(cells.dim());
    for ((i, j), cell) in cells.indexed_iter() {
        z[[i, j]] = cell.ok_or_else(|| CliError::MissingNode { x: xs[i], y: ys[j] })?;
    }

    tracing::debug!(
        path = %path.display(),
        nx = xs.len(),
        ny = ys.len(),
        "grid loaded"
    );
    Ok(Grid2D::new(xs, ys, z)?)
}

fn distinct_sorted(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut out: Vec<f64> = values.collect();
    out.sort_by(f64::total_cmp);
    out.dedup_by(|a, b| a.total_cmp(b).is_eq());
    out
}

// Every value was collected into `axis`, so the search always succeeds.
fn axis_index(axis: &[f64], value: f64) -> usize {
    axis.binary_search_by(|probe| probe.total_cmp(&value))
        .unwrap_or_else(|i| i)
}

/// Parses a comma-separated list of numbers, e.g. `0.5,1,2.25`.
pub fn parse_values(name: &'static str, text: &str) -> CliResult<Vec<f64>> {
    text.split(',')
        .map(|item| parse_number(name, item))
        .collect()
}

/// Parses a comma-separated list of `x:y` points, e.g. `0:0,10:5`.
pub fn parse_points(name: &'static str, text: &str) -> CliResult<Vec<(f64, f64)>> {
    text.split(',')
        .map(|item| {
            let (x, y) = item.split_once(':').ok_or_else(|| CliError::InvalidArgument {
                name,
                value: item.trim().to_string(),
            })?;
            Ok((parse_number(name, x)?, parse_number(name, y)?))
        })
        .collect()
}

fn parse_number(name: &'static str, text: &str) -> CliResult<f64> {
    let text = text.trim();
    text.parse().map_err(|_| CliError::InvalidArgument {
        name,
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_series_keeps_file_order() {
        let file = write_csv("x,y\n0,1\n1, 3\n2,5\n");
        let (xs, ys) = load_series(file.path()).unwrap();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        assert_eq!(ys, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_load_series_empty() {
        let file = write_csv("x,y\n");
        assert!(matches!(
            load_series(file.path()),
            Err(CliError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_load_series_bad_row() {
        let file = write_csv("x,y\n0,1\n1,oops\n");
        let err = load_series(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Input { .. }));
    }

    #[test]
    fn test_load_grid_any_order() {
        let mut csv = String::from("x,y,z\n");
        for &y in &[20.0, 10.0] {
            for &x in &[3.0, 1.0, 2.0] {
                csv.push_str(&format!("{x},{y},{}\n", x * 100.0 + y));
            }
        }
        let file = write_csv(&csv);
        let grid = load_grid(file.path()).unwrap();
        assert_eq!(grid.xs(), &[1.0, 2.0, 3.0]);
        assert_eq!(grid.ys(), &[10.0, 20.0]);
        assert_eq!(grid.z()[[2, 1]], 320.0);
        assert_eq!(grid.z()[[0, 0]], 110.0);
    }

    #[test]
    fn test_load_grid_missing_node() {
        let file = write_csv("x,y,z\n0,0,1\n1,0,2\n0,1,3\n");
        let err = load_grid(file.path()).unwrap_err();
        assert!(matches!(err, CliError::MissingNode { x, y } if x == 1.0 && y == 1.0));
    }

    #[test]
    fn test_load_grid_duplicate_node() {
        let file = write_csv("x,y,z\n0,0,1\n1,0,2\n0,0,3\n1,1,4\n");
        let err = load_grid(file.path()).unwrap_err();
        assert!(matches!(err, CliError::DuplicateNode { .. }));
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("--at", "-1, 0.5,2").unwrap(), vec![-1.0, 0.5, 2.0]);
        let err = parse_values("--at", "1,,2").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for --at: ");
    }

    #[test]
    fn test_parse_points() {
        assert_eq!(
            parse_points("--at", "0:1,-2.5:3").unwrap(),
            vec![(0.0, 1.0), (-2.5, 3.0)]
        );
        assert!(parse_points("--at", "0:1,2").is_err());
    }
}
