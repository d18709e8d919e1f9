use crate::error::{NnError, Result};
use crate::math::lockstep::lockstep;
use crate::network::network::{adjacent_mut, Network};

impl Network {
    /// Propagates `input` from the input layer to the output layer.
    ///
    /// Every layer's activations are recomputed from scratch. Read the
    /// prediction through [`Network::output`]. Non-finite values are not
    /// checked and flow through like any other number.
    pub fn forward(&mut self, input: &[f64]) -> Result<()> {
        NnError::check_len("input", self.input_size(), input.len())?;

        for layer in &mut self.activations {
            layer.fill(0.0);
        }
        self.activations[0].copy_from_slice(input);

        let activation = self.activation;
        for (i, weight) in self.weights.iter().enumerate() {
            let (left, right) = adjacent_mut(&mut self.activations, i);
            for (unit, row) in lockstep((right.iter_mut(), &weight.data)) {
                for (w, x) in lockstep((row, &*left)) {
                    *unit += w * x;
                }
                *unit = activation.function(*unit);
            }
        }
        Ok(())
    }

    /// Runs `forward` and returns a copy of the output layer.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.forward(input)?;
        Ok(self.output().to_vec())
    }
}
