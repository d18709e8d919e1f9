use rand::Rng;
use serde::{Deserialize, Serialize};

/// A dense row-major matrix of `f64`.
///
/// Every row is its own allocation, so writing through one row can never
/// alter another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

    /// Fills a `rows x cols` matrix with independent samples from the
    /// uniform distribution on (-1, 1].
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for row in &mut res.data {
            for w in row.iter_mut() {
                // gen::<f64>() is in [0, 1), so this lands in (-1, 1].
                *w = 1.0 - rng.gen::<f64>() * 2.0;
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, Vec::len),
            data,
        }
    }

    /// True when the matrix is `rows x cols` and no row is ragged.
    pub fn has_shape(&self, rows: usize, cols: usize) -> bool {
        self.rows == rows
            && self.cols == cols
            && self.data.len() == rows
            && self.data.iter().all(|row| row.len() == cols)
    }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r]
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.data[r][c]
    }

    pub fn set(&mut self, r: usize, c: usize, value: f64) {
        self.data[r][c] = value;
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
