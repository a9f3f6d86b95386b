//! Readers for the comma-separated files used by the training demos.
//!
//! Every non-empty line starts with a row index that is ignored. Feature
//! files carry the feature values after it (`7, 0.25, -1.5`), label files a
//! single target (`7, -1`).

use crate::datasets::{Sample, VecDataset};
use microrust_core::MicroRustError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Splits one line into its numeric fields, index column dropped.
fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>, MicroRustError> {
    let mut fields = line.split(',').map(str::trim);
    // The index column only has to be present.
    match fields.next() {
        Some(index) if !index.is_empty() => {}
        _ => {
            return Err(MicroRustError::Parse {
                line: line_no,
                message: "missing index column".to_string(),
            })
        }
    }
    fields
        .map(|field| {
            field.parse::<f64>().map_err(|e| MicroRustError::Parse {
                line: line_no,
                message: format!("invalid number '{}': {}", field, e),
            })
        })
        .collect()
}

fn for_each_row<R: BufRead>(
    reader: R,
    mut on_row: impl FnMut(usize, Vec<f64>) -> Result<(), MicroRustError>,
) -> Result<(), MicroRustError> {
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|e| MicroRustError::Parse {
            line: line_no,
            message: e.to_string(),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        on_row(line_no, parse_row(&line, line_no)?)?;
    }
    Ok(())
}

/// Parses feature rows. All rows must have the same, non-zero width.
pub fn parse_features<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>, MicroRustError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for_each_row(reader, |line_no, values| {
        if values.is_empty() {
            return Err(MicroRustError::Parse {
                line: line_no,
                message: "row has no feature values".to_string(),
            });
        }
        if let Some(first) = rows.first() {
            if first.len() != values.len() {
                return Err(MicroRustError::Parse {
                    line: line_no,
                    message: format!("expected {} values, found {}", first.len(), values.len()),
                });
            }
        }
        rows.push(values);
        Ok(())
    })?;
    log::debug!("parse_features: {} rows", rows.len());
    Ok(rows)
}

/// Parses label rows: exactly one value after the index.
pub fn parse_labels<R: BufRead>(reader: R) -> Result<Vec<f64>, MicroRustError> {
    let mut labels = Vec::new();
    for_each_row(reader, |line_no, values| match values.as_slice() {
        [label] => {
            labels.push(*label);
            Ok(())
        }
        _ => Err(MicroRustError::Parse {
            line: line_no,
            message: format!("expected 1 label, found {} values", values.len()),
        }),
    })?;
    log::debug!("parse_labels: {} rows", labels.len());
    Ok(labels)
}

fn open(path: &Path) -> Result<BufReader<File>, MicroRustError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| MicroRustError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Reads a feature file; see [`parse_features`].
pub fn read_features(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>, MicroRustError> {
    let path = path.as_ref();
    log::info!("Reading features from {}", path.display());
    parse_features(open(path)?)
}

/// Reads a label file; see [`parse_labels`].
pub fn read_labels(path: impl AsRef<Path>) -> Result<Vec<f64>, MicroRustError> {
    let path = path.as_ref();
    log::info!("Reading labels from {}", path.display());
    parse_labels(open(path)?)
}

/// Pairs feature rows with labels, row by row.
///
/// # Errors
/// `LengthMismatch` if the two inputs have a different number of rows.
pub fn load_samples(
    features: Vec<Vec<f64>>,
    labels: Vec<f64>,
) -> Result<VecDataset<Sample>, MicroRustError> {
    if features.len() != labels.len() {
        return Err(MicroRustError::LengthMismatch {
            operation: "load_samples".to_string(),
            left: features.len(),
            right: labels.len(),
        });
    }
    let samples = features
        .into_iter()
        .zip(labels)
        .map(|(features, label)| Sample::new(features, label))
        .collect();
    Ok(VecDataset::new(samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Dataset;
    use std::io::Cursor;

    #[test]
    fn test_parse_features_drops_index() {
        let text = "0, 1.5, -2\n1,0.25,3e-1\n\n2, 4, 5\n";
        let rows = parse_features(Cursor::new(text)).unwrap();
        assert_eq!(rows, vec![vec![1.5, -2.0], vec![0.25, 0.3], vec![4.0, 5.0]]);
    }

    #[test]
    fn test_parse_features_rejects_ragged_rows() {
        let err = parse_features(Cursor::new("0, 1, 2\n1, 3\n")).unwrap_err();
        assert!(matches!(err, MicroRustError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_parse_features_rejects_bad_number() {
        let err = parse_features(Cursor::new("0, 1, x\n")).unwrap_err();
        match err {
            MicroRustError::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("'x'"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_features_rejects_index_only_row() {
        assert!(parse_features(Cursor::new("0\n")).is_err());
    }

    #[test]
    fn test_parse_labels() {
        let labels = parse_labels(Cursor::new("0, 1\n1, -1\n2,1\n")).unwrap();
        assert_eq!(labels, vec![1.0, -1.0, 1.0]);
        assert!(parse_labels(Cursor::new("0, 1, 2\n")).is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_features("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, MicroRustError::Io { .. }));
    }

    #[test]
    fn test_load_samples() {
        let dataset = load_samples(vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![1.0, -1.0]).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get(1), Ok(Sample::new(vec![3.0, 4.0], -1.0)));

        let err = load_samples(vec![vec![1.0]], vec![]).unwrap_err();
        assert!(matches!(
            err,
            MicroRustError::LengthMismatch { left: 1, right: 0, .. }
        ));
    }
}
