use crate::error::{ensure_len, Error, Result};

/// A validated, borrowed view over aligned features and binary targets.
///
/// Construction checks every shape precondition once, so the training and
/// evaluation loops can index without re-checking.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a> {
    features: &'a [Vec<f64>],
    targets: &'a [f64],
    n_features: usize,
}

impl<'a> Dataset<'a> {
    pub fn new(features: &'a [Vec<f64>], targets: &'a [f64]) -> Result<Dataset<'a>> {
        ensure_len("targets per feature row", features.len(), targets.len())?;
        let n_features = match features.first() {
            None => return Err(Error::EmptyDataset("no samples")),
            Some(row) if row.is_empty() => return Err(Error::EmptyDataset("no features")),
            Some(row) => row.len(),
        };
        for row in features {
            ensure_len("features per row", n_features, row.len())?;
        }
        Ok(Dataset {
            features,
            targets,
            n_features,
        })
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Always `false`; an empty dataset is rejected by [`Dataset::new`].
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn features(&self) -> &'a [Vec<f64>] {
        self.features
    }

    pub fn targets(&self) -> &'a [f64] {
        self.targets
    }

    /// `(x, target)` pairs in their original order.
    pub fn samples(&self) -> impl Iterator<Item = (&'a [f64], f64)> + 'a {
        let (features, targets) = (self.features, self.targets);
        features
            .iter()
            .map(Vec::as_slice)
            .zip(targets.iter().copied())
    }
}
