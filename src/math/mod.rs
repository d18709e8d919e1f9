pub mod lockstep;
pub mod matrix;

pub use lockstep::{lockstep, span, Lockstep, Span};
pub use matrix::Matrix;
