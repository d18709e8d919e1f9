use crate::error::{NnError, Result};
use crate::loss::mse::MseLoss;
use crate::math::lockstep::{lockstep, span};
use crate::network::network::{adjacent_mut, Network};

impl Network {
    /// Backpropagates the MSE error against `target` and takes one
    /// gradient-descent step on every weight.
    ///
    /// Must follow a `forward` on the matching input. Layers are visited from
    /// the output toward the input; for each pair the error of the left layer
    /// is computed from the weights before they are updated.
    pub fn backward(&mut self, target: &[f64]) -> Result<()> {
        NnError::check_len("target", self.output_size(), target.len())?;

        let last = self.layer_sizes.len() - 1;
        MseLoss::derivative_into(&self.activations[last], target, &mut self.gradients[last]);

        let activation = self.activation;
        let learning_rate = self.learning_rate;
        for i in (0..last).rev() {
            let left = &self.activations[i];
            let right = &self.activations[i + 1];
            let (grad_left, grad_right) = adjacent_mut(&mut self.gradients, i);
            let weight = &mut self.weights[i];

            // f'(a) * dL/da for every unit of the right layer.
            let deltas: Vec<f64> = lockstep((right, &*grad_right))
                .map(|(&y, &g)| activation.derivative(y) * g)
                .collect();

            for (c, g) in lockstep((span(left.len()), grad_left.iter_mut())) {
                *g = lockstep((&deltas, &weight.data))
                    .map(|(delta, row)| delta * row[c])
                    .sum();
            }

            for (row, &delta) in lockstep((weight.data.iter_mut(), &deltas)) {
                for (w, &x) in lockstep((row.iter_mut(), left)) {
                    *w -= learning_rate * x * delta;
                }
            }
        }
        Ok(())
    }
}
