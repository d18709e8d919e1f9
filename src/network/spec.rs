use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::network::network::Network;

/// A serializable description of a network: its shape and the
/// hyperparameters it is built with.
///
/// Fields:
/// - `layer_sizes`   — units per layer, input first, output last
/// - `learning_rate` — gradient-descent step size, fixed for the network's lifetime
/// - `activation`    — nonlinearity shared by every layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    pub layer_sizes: Vec<usize>,
    pub learning_rate: f64,
    pub activation: ActivationFunction,
}

impl ModelSpec {
    pub fn new(layer_sizes: Vec<usize>, learning_rate: f64, activation: ActivationFunction) -> Self {
        ModelSpec {
            layer_sizes,
            learning_rate,
            activation,
        }
    }

    /// Validates the spec and builds a randomly initialized network.
    pub fn build(&self) -> Result<Network> {
        Network::new(&self.layer_sizes, self.learning_rate, self.activation)
    }

    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        Network::with_rng(&self.layer_sizes, self.learning_rate, self.activation, rng)
    }

    /// Replaces the hidden layers, keeping the input and output sizes.
    /// A spec with fewer than two layers is left alone for `build` to reject.
    pub fn set_hidden(&mut self, hidden: &[usize]) {
        if let [input, .., output] = self.layer_sizes[..] {
            self.layer_sizes = std::iter::once(input)
                .chain(hidden.iter().copied())
                .chain(std::iter::once(output))
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NnError;

    #[test]
    fn set_hidden_keeps_the_ends() {
        let mut spec = ModelSpec::new(vec![3, 8, 1], 0.1, ActivationFunction::Tanh);
        spec.set_hidden(&[5, 4]);
        assert_eq!(spec.layer_sizes, vec![3, 5, 4, 1]);
        spec.set_hidden(&[]);
        assert_eq!(spec.layer_sizes, vec![3, 1]);
    }

    #[test]
    fn build_validates() {
        let spec = ModelSpec::new(vec![2], 0.1, ActivationFunction::Identity);
        assert!(matches!(spec.build(), Err(NnError::Configuration(_))));

        let spec = ModelSpec::new(vec![2, 2], 0.1, ActivationFunction::Identity);
        assert_eq!(spec.build().unwrap().layer_sizes(), &[2, 2]);
    }

    #[test]
    fn reads_json() {
        let spec: ModelSpec = serde_json::from_str(
            r#"{ "layer_sizes": [3, 1], "learning_rate": 0.01, "activation": "Identity" }"#,
        )
        .unwrap();
        assert_eq!(spec.layer_sizes, vec![3, 1]);
        assert_eq!(spec.learning_rate, 0.01);
        assert!(matches!(spec.activation, ActivationFunction::Identity));
    }
}
