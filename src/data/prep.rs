use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ensure_len, Error, Result};

/// Largest category `one_hot` will expand.
pub const MAX_CATEGORIES: usize = 1024;

/// Rescales every column to zero mean and unit (population) standard
/// deviation. Constant columns are only centred.
///
/// Rows must all have the same width; an empty slice is left untouched.
pub fn standardize_columns(rows: &mut [Vec<f64>]) -> Result<()> {
    let Some(n_cols) = rows.first().map(Vec::len) else {
        return Ok(());
    };
    for row in rows.iter() {
        ensure_len("columns per row", n_cols, row.len())?;
    }
    let n = rows.len() as f64;

    for j in 0..n_cols {
        let mean = rows.iter().map(|r| r[j]).sum::<f64>() / n;
        let std = (rows.iter().map(|r| (r[j] - mean).powi(2)).sum::<f64>() / n).sqrt();
        for row in rows.iter_mut() {
            row[j] -= mean;
            if std > 0.0 {
                row[j] /= std;
            }
        }
    }
    Ok(())
}

/// Expands a column of 1-based categories (`1.0`, `2.0`, ...) into indicator
/// columns, one per category up to the largest value seen.
///
/// Categories must be whole numbers in `1..=MAX_CATEGORIES`.
pub fn one_hot(values: &[f64]) -> Result<Vec<Vec<f64>>> {
    let mut n_classes = 0usize;
    for &v in values {
        if v < 1.0 || v.fract() != 0.0 {
            return Err(Error::InvalidData(format!(
                "category must be a positive whole number, got {v}"
            )));
        }
        if v > MAX_CATEGORIES as f64 {
            return Err(Error::InvalidData(format!(
                "category {v} exceeds the limit of {MAX_CATEGORIES}"
            )));
        }
        n_classes = n_classes.max(v as usize);
    }

    Ok(values
        .iter()
        .map(|&v| {
            let mut row = vec![0.0; n_classes];
            row[v as usize - 1] = 1.0;
            row
        })
        .collect())
}

/// Splits rows in order: the first `fraction` for training, the rest for
/// testing.
pub fn split_at_fraction<T>(items: &[T], fraction: f64) -> Result<(&[T], &[T])> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(Error::InvalidHyperparameter {
            name: "fraction",
            reason: format!("must lie in [0, 1], got {fraction}"),
        });
    }
    let cut = (items.len() as f64 * fraction) as usize;
    Ok(items.split_at(cut))
}

/// Synthetic two-feature set with `target = 1` exactly when `x1 + x2 > 0`.
/// Features are uniform on `[-1, 1)`.
pub fn linearly_separable(n_samples: usize, seed: u64) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let features: Vec<Vec<f64>> = (0..n_samples)
        .map(|_| vec![rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)])
        .collect();
    let targets = features
        .iter()
        .map(|x| if x[0] + x[1] > 0.0 { 1.0 } else { 0.0 })
        .collect();
    (features, targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn standardized_columns_have_zero_mean_unit_std() {
        let mut rows = vec![vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0], vec![6.0, 5.0]];
        standardize_columns(&mut rows).unwrap();

        let mean: f64 = rows.iter().map(|r| r[0]).sum::<f64>() / 4.0;
        let var: f64 = rows.iter().map(|r| r[0].powi(2)).sum::<f64>() / 4.0;
        assert_relative_eq!(mean, 0.0, epsilon = 1e-12);
        assert_relative_eq!(var, 1.0, epsilon = 1e-12);
        // constant column is centred, not divided by zero
        assert!(rows.iter().all(|r| r[1] == 0.0));
    }

    #[test]
    fn standardize_rejects_ragged_rows() {
        let mut rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            standardize_columns(&mut rows),
            Err(Error::ShapeMismatch { expected: 2, got: 1, .. })
        ));
        // nothing was rescaled before the check failed
        assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0]]);

        let mut empty: Vec<Vec<f64>> = vec![];
        assert!(standardize_columns(&mut empty).is_ok());
    }

    #[test]
    fn one_hot_rejects_oversized_and_non_finite_categories() {
        assert!(matches!(one_hot(&[1.0e300]), Err(Error::InvalidData(_))));
        assert!(matches!(one_hot(&[f64::INFINITY]), Err(Error::InvalidData(_))));
        assert!(matches!(one_hot(&[f64::NAN]), Err(Error::InvalidData(_))));
        assert!(matches!(
            one_hot(&[(MAX_CATEGORIES + 1) as f64]),
            Err(Error::InvalidData(_))
        ));
        assert_eq!(one_hot(&[MAX_CATEGORIES as f64]).unwrap()[0].len(), MAX_CATEGORIES);
    }

    #[test]
    fn one_hot_uses_one_based_categories() {
        let encoded = one_hot(&[2.0, 1.0, 4.0]).unwrap();
        assert_eq!(
            encoded,
            vec![
                vec![0.0, 1.0, 0.0, 0.0],
                vec![1.0, 0.0, 0.0, 0.0],
                vec![0.0, 0.0, 0.0, 1.0],
            ]
        );
        assert!(one_hot(&[0.0]).is_err());
        assert!(one_hot(&[1.5]).is_err());
    }

    #[test]
    fn split_keeps_order() {
        let rows: Vec<usize> = (0..10).collect();
        let (train, test) = split_at_fraction(&rows, 0.9).unwrap();
        assert_eq!(train, &rows[..9]);
        assert_eq!(test, &[9]);
        assert!(split_at_fraction(&rows, 1.5).is_err());
    }

    #[test]
    fn synthetic_set_is_labelled_by_the_separating_line() {
        let (features, targets) = linearly_separable(100, 3);
        assert_eq!(features.len(), 100);
        for (x, y) in features.iter().zip(&targets) {
            assert_eq!(*y == 1.0, x[0] + x[1] > 0.0);
        }
        assert_eq!(linearly_separable(100, 3), (features, targets));
    }
}
