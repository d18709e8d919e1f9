pub mod backward;
pub mod forward;
pub mod network;
pub mod spec;

pub use network::Network;
pub use spec::ModelSpec;
