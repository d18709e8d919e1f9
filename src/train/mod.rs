pub mod dataset;
pub mod epoch_report;
pub mod loop_fn;
pub mod reporter;
pub mod train_config;

pub use dataset::{Dataset, Example};
pub use epoch_report::EpochReport;
pub use loop_fn::train_loop;
pub use reporter::{DivergenceGuard, LogReporter, Reporter};
pub use train_config::{report_interval, TrainConfig};
