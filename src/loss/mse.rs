use crate::math::lockstep::lockstep;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        lockstep((predicted, expected))
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }

    /// Per-output gradient of `loss` with respect to `predicted`:
    /// 2/n * (predicted - expected), written into `out`.
    pub fn derivative_into(predicted: &[f64], expected: &[f64], out: &mut [f64]) {
        let scale = 2.0 / predicted.len() as f64;
        for (g, a, b) in lockstep((out.iter_mut(), predicted, expected)) {
            *g = scale * (a - b);
        }
    }
}

/// sqrt(mean(v²)); zero for an empty slice.
pub fn root_mean_square(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    (values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64).sqrt()
}
