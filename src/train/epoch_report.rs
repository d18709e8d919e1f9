use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::matrix::Matrix;

/// Progress record emitted by `train_loop` after a reporting epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochReport {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Root-mean-square of the output layer's gradient after the last
    /// example of the epoch.
    pub loss: f64,
    /// Deep copy of every weight matrix at the end of the epoch.
    pub weights: Vec<Matrix>,
}

impl EpochReport {
    pub fn is_finite(&self) -> bool {
        self.loss.is_finite()
    }
}

/// `epoch 20/100 loss: 0.0123 weights: [[[1.0000, 2.0000, 3.0000]]]`
impl fmt::Display for EpochReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "epoch {}/{} loss: {} weights: [", self.epoch, self.total_epochs, self.loss)?;
        for (i, matrix) in self.weights.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (r, row) in matrix.data.iter().enumerate() {
                if r > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "[")?;
                for (c, w) in row.iter().enumerate() {
                    if c > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{w:.4}")?;
                }
                write!(f, "]")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_nests_layers_rows_and_weights() {
        let report = EpochReport {
            epoch: 2,
            total_epochs: 4,
            loss: 0.5,
            weights: vec![
                Matrix::from_data(vec![vec![1.0, -2.0], vec![0.25, 0.0]]),
                Matrix::from_data(vec![vec![3.0, 4.0]]),
            ],
        };
        assert_eq!(
            report.to_string(),
            "epoch 2/4 loss: 0.5 weights: [[[1.0000, -2.0000], [0.2500, 0.0000]], [[3.0000, 4.0000]]]"
        );
        assert!(report.is_finite());
    }
}
