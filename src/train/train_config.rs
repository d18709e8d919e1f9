use serde::{Deserialize, Serialize};

use crate::error::{NnError, Result};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`       — total number of full passes over the training data
/// - `report_count` — how many progress reports to emit over the run; `0`
///                    means a single report after the last epoch, anything
///                    at or above `epochs` means one report per epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    #[serde(default)]
    pub report_count: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize, report_count: usize) -> Self {
        TrainConfig { epochs, report_count }
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(NnError::config("epochs must be at least 1"));
        }
        Ok(())
    }

    /// Number of epochs between two reports.
    pub fn report_interval(&self) -> usize {
        report_interval(self.epochs, self.report_count)
    }
}

/// Epochs between reports: `epochs` when `report_count` is zero, `1` when it
/// is at least `epochs`, otherwise `epochs / report_count` rounded down.
pub fn report_interval(epochs: usize, report_count: usize) -> usize {
    if report_count == 0 {
        epochs.max(1)
    } else if report_count >= epochs {
        1
    } else {
        epochs / report_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reported_epochs(epochs: usize, report_count: usize) -> Vec<usize> {
        let gap = report_interval(epochs, report_count);
        (1..=epochs).filter(|e| e % gap == 0).collect()
    }

    #[test]
    fn five_reports_over_a_hundred_epochs() {
        assert_eq!(reported_epochs(100, 5), vec![20, 40, 60, 80, 100]);
    }

    #[test]
    fn zero_reports_means_only_the_last_epoch() {
        assert_eq!(reported_epochs(100, 0), vec![100]);
        assert_eq!(reported_epochs(1, 0), vec![1]);
    }

    #[test]
    fn more_reports_than_epochs_means_every_epoch() {
        assert_eq!(reported_epochs(4, 4), vec![1, 2, 3, 4]);
        assert_eq!(reported_epochs(4, 40), vec![1, 2, 3, 4]);
    }

    #[test]
    fn uneven_split_rounds_the_interval_down() {
        // 10 / 3 = 3, so the last report lands on epoch 9, not 10.
        assert_eq!(reported_epochs(10, 3), vec![3, 6, 9]);
    }

    #[test]
    fn zero_epochs_is_rejected() {
        assert!(matches!(TrainConfig::new(0, 1).validate(), Err(NnError::Configuration(_))));
        assert!(TrainConfig::new(1, 0).validate().is_ok());
    }
}
