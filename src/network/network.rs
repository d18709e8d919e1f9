use rand::Rng;
use tracing::debug;

use crate::activation::activation::ActivationFunction;
use crate::error::{NnError, Result};
use crate::math::lockstep::lockstep;
use crate::math::matrix::Matrix;

/// A fully-connected feed-forward network and all of its mutable state.
///
/// `weights[i]` connects layer `i` to layer `i + 1`: it has
/// `layer_sizes[i + 1]` rows and `layer_sizes[i]` columns, and
/// `weights[i].data[r][c]` is the coefficient from unit `c` of layer `i` to
/// unit `r` of layer `i + 1`.
///
/// Activations are overwritten by every `forward`, gradients by every
/// `backward`. Weights live for the whole training run and are updated in
/// place. Nothing here is ever resized after construction.
#[derive(Debug, Clone)]
pub struct Network {
    pub(super) layer_sizes: Vec<usize>,
    pub(super) activations: Vec<Vec<f64>>,
    pub(super) gradients: Vec<Vec<f64>>,
    pub(super) weights: Vec<Matrix>,
    pub(super) learning_rate: f64,
    pub(super) activation: ActivationFunction,
}

impl Network {
    /// Builds a network whose weights are drawn from the thread-local RNG.
    pub fn new(
        layer_sizes: &[usize],
        learning_rate: f64,
        activation: ActivationFunction,
    ) -> Result<Network> {
        Network::with_rng(layer_sizes, learning_rate, activation, &mut rand::thread_rng())
    }

    /// Builds a network whose weights are drawn uniformly from (-1, 1] using
    /// `rng`. Pass a seeded RNG for reproducible runs.
    pub fn with_rng<R: Rng + ?Sized>(
        layer_sizes: &[usize],
        learning_rate: f64,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Result<Network> {
        validate(layer_sizes, learning_rate)?;
        let weights = lockstep((layer_sizes, &layer_sizes[1..]))
            .map(|(&left, &right)| Matrix::random(right, left, &mut *rng))
            .collect();
        Ok(Network::assemble(layer_sizes, learning_rate, activation, weights))
    }

    /// Builds a network from explicit weights, which must have exactly the
    /// shapes implied by `layer_sizes`.
    pub fn with_weights(
        layer_sizes: &[usize],
        learning_rate: f64,
        activation: ActivationFunction,
        weights: Vec<Matrix>,
    ) -> Result<Network> {
        validate(layer_sizes, learning_rate)?;
        if weights.len() != layer_sizes.len() - 1 {
            return Err(NnError::config(format!(
                "{} layers need {} weight matrices, got {}",
                layer_sizes.len(),
                layer_sizes.len() - 1,
                weights.len()
            )));
        }
        for (i, (weight, &left, &right)) in
            lockstep((&weights, layer_sizes, &layer_sizes[1..])).enumerate()
        {
            if !weight.has_shape(right, left) {
                return Err(NnError::config(format!(
                    "weight matrix {i} must be {right}x{left}, got {}x{}",
                    weight.rows, weight.cols
                )));
            }
        }
        Ok(Network::assemble(layer_sizes, learning_rate, activation, weights))
    }

    fn assemble(
        layer_sizes: &[usize],
        learning_rate: f64,
        activation: ActivationFunction,
        weights: Vec<Matrix>,
    ) -> Network {
        debug!(layers = ?layer_sizes, learning_rate, %activation, "network created");
        let zeros = || layer_sizes.iter().map(|&size| vec![0.0; size]).collect::<Vec<_>>();
        Network {
            layer_sizes: layer_sizes.to_vec(),
            activations: zeros(),
            gradients: zeros(),
            weights,
            learning_rate,
            activation,
        }
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    pub fn input_size(&self) -> usize {
        self.layer_sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.layer_sizes[self.layer_sizes.len() - 1]
    }

    /// Per-layer activations from the most recent `forward`.
    pub fn activations(&self) -> &[Vec<f64>] {
        &self.activations
    }

    /// Per-layer errors (∂Loss/∂activation) from the most recent `backward`.
    pub fn gradients(&self) -> &[Vec<f64>] {
        &self.gradients
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    /// The output layer, i.e. the prediction of the last `forward`.
    pub fn output(&self) -> &[f64] {
        &self.activations[self.activations.len() - 1]
    }

    pub fn output_gradient(&self) -> &[f64] {
        &self.gradients[self.gradients.len() - 1]
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }
}

fn validate(layer_sizes: &[usize], learning_rate: f64) -> Result<()> {
    if layer_sizes.len() < 2 {
        return Err(NnError::config(format!(
            "a network needs at least two layers, got {}",
            layer_sizes.len()
        )));
    }
    if let Some(i) = layer_sizes.iter().position(|&size| size == 0) {
        return Err(NnError::config(format!("layer {i} has no units")));
    }
    if !(learning_rate > 0.0 && learning_rate.is_finite()) {
        return Err(NnError::config(format!(
            "learning rate must be positive and finite, got {learning_rate}"
        )));
    }
    Ok(())
}

/// Borrows two neighbouring layers at once: `(&mut items[left], &mut items[left + 1])`.
pub(super) fn adjacent_mut<T>(items: &mut [T], left: usize) -> (&mut T, &mut T) {
    let (head, tail) = items.split_at_mut(left + 1);
    (&mut head[left], &mut tail[0])
}
