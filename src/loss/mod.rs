pub mod mse;

pub use mse::{root_mean_square, MseLoss};
