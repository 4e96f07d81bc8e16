use rand::Rng;
use std::f64::consts::PI;

use crate::error::{ensure_len, Error, Result};

/// Dense row-major matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from rows, rejecting empty input and ragged rows.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = match data.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(Error::EmptyDataset("matrix has no rows or no columns")),
        };
        for row in &data {
            ensure_len("matrix row length", cols, row.len())?;
        }
        Ok(Matrix {
            rows: data.len(),
            cols,
            data,
        })
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Shift into (0, 1] so the logarithm never sees zero.
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Every entry drawn independently from N(0, `std_dev`).
    pub fn random_normal<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        std_dev: f64,
        rng: &mut R,
    ) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(rng) * std_dev;
            }
        }
        res
    }

    /// A length-`len` vector drawn from N(0, `std_dev`).
    pub fn random_normal_vec<R: Rng + ?Sized>(len: usize, std_dev: f64, rng: &mut R) -> Vec<f64> {
        (0..len)
            .map(|_| Matrix::sample_standard_normal(rng) * std_dev)
            .collect()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row vector times matrix: `x · self`, with `x.len() == self.rows`.
    pub fn row_mul(&self, x: &[f64]) -> Result<Vec<f64>> {
        ensure_len("row vector times matrix", self.rows, x.len())?;
        let mut out = vec![0.0; self.cols];
        for (xi, row) in x.iter().zip(&self.data) {
            for (o, w) in out.iter_mut().zip(row) {
                *o += xi * w;
            }
        }
        Ok(out)
    }

    /// `self += outer(col, row)`.
    pub fn add_outer(&mut self, col: &[f64], row: &[f64]) -> Result<()> {
        ensure_len("outer product rows", self.rows, col.len())?;
        ensure_len("outer product cols", self.cols, row.len())?;
        for (dst, c) in self.data.iter_mut().zip(col) {
            for (d, r) in dst.iter_mut().zip(row) {
                *d += c * r;
            }
        }
        Ok(())
    }

    /// `self += scale * other`.
    pub fn add_scaled(&mut self, other: &Matrix, scale: f64) -> Result<()> {
        ensure_len("matrix rows", self.rows, other.rows)?;
        ensure_len("matrix cols", self.cols, other.cols)?;
        for (dst, src) in self.data.iter_mut().zip(&other.data) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d += scale * s;
            }
        }
        Ok(())
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().flatten().all(|x| x.is_finite())
    }
}

/// Inner product of two equal-length vectors.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    ensure_len("dot product", a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// `dst += scale * src`, elementwise.
pub fn axpy(dst: &mut [f64], src: &[f64], scale: f64) -> Result<()> {
    ensure_len("vector update", dst.len(), src.len())?;
    for (d, s) in dst.iter_mut().zip(src) {
        *d += scale * s;
    }
    Ok(())
}
