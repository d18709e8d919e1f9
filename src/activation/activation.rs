use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NnError;

/// Element-wise nonlinearity shared by every layer of a network, paired with
/// its derivative.
///
/// The derivative is expressed in terms of the activation's *output*: the
/// backward pass only keeps activated values around, so `derivative(y)`
/// receives `y = function(x)` rather than `x`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ActivationFunction {
    Identity,
    Sigmoid,
    Tanh,
    ReLU,
    LeakyReLU { alpha: f64 },
    Elu { alpha: f64 },
    /// Caller-supplied pair. `derivative` must follow the same output-space
    /// convention as the built-in variants. Not serializable.
    ///
    /// Both are plain `fn` pointers, so closures that capture state cannot
    /// be used here; non-capturing closures coerce fine.
    #[serde(skip)]
    Custom {
        function: fn(f64) -> f64,
        derivative: fn(f64) -> f64,
    },
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Identity => x,
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::LeakyReLU { alpha } => if x > 0.0 { x } else { alpha * x },
            ActivationFunction::Elu { alpha } => {
                if x > 0.0 { x } else { alpha * (x.exp() - 1.0) }
            }
            ActivationFunction::Custom { function, .. } => function(x),
        }
    }

    /// Derivative evaluated at an already-activated value `y`.
    pub fn derivative(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Identity => 1.0,
            ActivationFunction::Sigmoid => y * (1.0 - y),
            ActivationFunction::Tanh => 1.0 - y * y,
            ActivationFunction::ReLU => if y > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::LeakyReLU { alpha } => if y > 0.0 { 1.0 } else { *alpha },
            // y = a(e^x - 1) on the negative side, so a*e^x = y + a.
            ActivationFunction::Elu { alpha } => if y > 0.0 { 1.0 } else { y + alpha },
            ActivationFunction::Custom { derivative, .. } => derivative(y),
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationFunction::Identity => write!(f, "identity"),
            ActivationFunction::Sigmoid => write!(f, "sigmoid"),
            ActivationFunction::Tanh => write!(f, "tanh"),
            ActivationFunction::ReLU => write!(f, "relu"),
            ActivationFunction::LeakyReLU { alpha } => write!(f, "leaky-relu({alpha})"),
            ActivationFunction::Elu { alpha } => write!(f, "elu({alpha})"),
            ActivationFunction::Custom { .. } => write!(f, "custom"),
        }
    }
}

/// Parses the names accepted on the command line. `leaky-relu` and `elu`
/// use alpha = 0.01 and 1.0 respectively.
impl FromStr for ActivationFunction {
    type Err = NnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "identity" | "linear" => Ok(ActivationFunction::Identity),
            "sigmoid" => Ok(ActivationFunction::Sigmoid),
            "tanh" => Ok(ActivationFunction::Tanh),
            "relu" => Ok(ActivationFunction::ReLU),
            "leaky-relu" | "leaky_relu" => Ok(ActivationFunction::LeakyReLU { alpha: 0.01 }),
            "elu" => Ok(ActivationFunction::Elu { alpha: 1.0 }),
            other => Err(NnError::config(format!("unknown activation `{other}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-9;

    fn numeric_slope(act: ActivationFunction, x: f64) -> f64 {
        let h = 1e-6;
        (act.function(x + h) - act.function(x - h)) / (2.0 * h)
    }

    #[test]
    fn test_activation_functions() {
        assert_abs_diff_eq!(ActivationFunction::Sigmoid.function(0.0), 0.5, epsilon = EPS);
        assert_eq!(ActivationFunction::ReLU.function(-1.0), 0.0);
        assert_eq!(ActivationFunction::ReLU.function(2.0), 2.0);
        assert_abs_diff_eq!(ActivationFunction::Tanh.function(0.0), 0.0, epsilon = EPS);
        assert_eq!(ActivationFunction::Identity.function(5.0), 5.0);
        assert_eq!(ActivationFunction::LeakyReLU { alpha: 0.1 }.function(-2.0), -0.2);
    }

    #[test]
    fn derivative_takes_the_activated_value() {
        let cases = [
            ActivationFunction::Identity,
            ActivationFunction::Sigmoid,
            ActivationFunction::Tanh,
            ActivationFunction::ReLU,
            ActivationFunction::LeakyReLU { alpha: 0.1 },
            ActivationFunction::Elu { alpha: 1.0 },
        ];
        for act in cases {
            for x in [-1.7, -0.3, 0.4, 2.2] {
                let y = act.function(x);
                assert_abs_diff_eq!(act.derivative(y), numeric_slope(act, x), epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn custom_pair_is_called_through() {
        fn double(x: f64) -> f64 { 2.0 * x }
        fn two(_: f64) -> f64 { 2.0 }
        let act = ActivationFunction::Custom { function: double, derivative: two };
        assert_eq!(act.function(3.0), 6.0);
        assert_eq!(act.derivative(6.0), 2.0);
        assert!(serde_json::to_string(&act).is_err());
    }

    #[test]
    fn custom_accepts_non_capturing_closures() {
        let act = ActivationFunction::Custom {
            function: |x| x.max(0.0).min(1.0),
            derivative: |y| if y > 0.0 && y < 1.0 { 1.0 } else { 0.0 },
        };
        assert_eq!(act.function(-2.0), 0.0);
        assert_eq!(act.function(0.5), 0.5);
        assert_eq!(act.function(3.0), 1.0);
        assert_eq!(act.derivative(0.5), 1.0);
        assert_eq!(act.derivative(1.0), 0.0);
    }

    #[test]
    fn parses_cli_names() {
        assert!(matches!("ReLU".parse::<ActivationFunction>(), Ok(ActivationFunction::ReLU)));
        assert!(matches!("linear".parse::<ActivationFunction>(), Ok(ActivationFunction::Identity)));
        assert!(matches!(
            "elu".parse::<ActivationFunction>(),
            Ok(ActivationFunction::Elu { alpha }) if alpha == 1.0
        ));
        assert!(matches!(
            "softplus".parse::<ActivationFunction>(),
            Err(NnError::Configuration(_))
        ));
    }

    #[test]
    fn serializes_named_variants() {
        let json = serde_json::to_string(&ActivationFunction::Sigmoid).unwrap();
        assert_eq!(json, "\"Sigmoid\"");
        let back: ActivationFunction = serde_json::from_str("{\"LeakyReLU\":{\"alpha\":0.2}}").unwrap();
        assert!(matches!(back, ActivationFunction::LeakyReLU { alpha } if alpha == 0.2));
    }
}
