pub mod activation;
pub mod config;
pub mod error;
pub mod loss;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use config::RunConfig;
pub use error::NnError;
pub use math::matrix::Matrix;
pub use network::network::Network;
pub use network::spec::ModelSpec;
pub use train::{
    train_loop, Dataset, DivergenceGuard, EpochReport, Example, LogReporter, Reporter, TrainConfig,
};
