//! Dataset input: CSV column loading and fractional prefix splits.

mod loader;

pub use loader::load_column;

use crate::error::{BenchError, Result};

/// Dataset file used when none is given
pub const DEFAULT_PATH: &str = "train.csv";
/// Column benchmarked when none is given
pub const DEFAULT_COLUMN: &str = "trip_duration";
/// Fixed split fractions, in sweep order
pub const SPLIT_FRACTIONS: [f64; 4] = [0.25, 0.50, 0.75, 1.0];

/// Length of the prefix kept for `fraction`, truncating toward zero.
pub fn split_len(count: usize, fraction: f64) -> Result<usize> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(BenchError::InvalidFraction(fraction));
    }
    Ok((count as f64 * fraction) as usize)
}

/// Order-preserving prefix of `data` holding `floor(len * fraction)` values.
pub fn split(data: &[i64], fraction: f64) -> Result<&[i64]> {
    let len = split_len(data.len(), fraction)?;
    Ok(&data[..len])
}

/// Label shown for a split, e.g. `25%`
pub fn split_label(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lengths() {
        let data: Vec<i64> = (0..100).collect();
        let expected = [25, 50, 75, 100];
        for (fraction, len) in SPLIT_FRACTIONS.iter().zip(expected) {
            assert_eq!(split(&data, *fraction).unwrap().len(), len);
        }
    }

    #[test]
    fn test_split_truncates() {
        // 7 * 0.25 = 1.75, 7 * 0.75 = 5.25
        let data: Vec<i64> = (0..7).collect();
        assert_eq!(split(&data, 0.25).unwrap(), &[0]);
        assert_eq!(split(&data, 0.75).unwrap(), &[0, 1, 2, 3, 4]);
        assert_eq!(split(&data, 1.0).unwrap().len(), 7);
    }

    #[test]
    fn test_split_preserves_order() {
        let data = [9, 3, 7, 1];
        assert_eq!(split(&data, 0.5).unwrap(), &[9, 3]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split(&[], 0.5).unwrap().is_empty());
    }

    #[test]
    fn test_split_rejects_bad_fraction() {
        assert!(matches!(split(&[1, 2], 1.5), Err(BenchError::InvalidFraction(_))));
        assert!(matches!(split(&[1, 2], -0.1), Err(BenchError::InvalidFraction(_))));
        assert!(split(&[1, 2], f64::NAN).is_err());
    }

    #[test]
    fn test_split_labels() {
        let labels: Vec<String> = SPLIT_FRACTIONS.iter().map(|f| split_label(*f)).collect();
        assert_eq!(labels, ["25%", "50%", "75%", "100%"]);
    }
}
