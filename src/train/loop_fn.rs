use tracing::debug;

use crate::error::{NnError, Result};
use crate::loss::mse::root_mean_square;
use crate::network::network::Network;
use crate::train::dataset::Example;
use crate::train::epoch_report::EpochReport;
use crate::train::reporter::Reporter;
use crate::train::train_config::TrainConfig;

/// Trains `network` with online gradient descent: for every epoch, every
/// example is run forward then backward, in order, and the weights move
/// after each one.
///
/// After each epoch whose 1-based index is a multiple of
/// `config.report_interval()`, an `EpochReport` is handed to `reporter`.
/// Its loss is the root-mean-square of the output layer's gradient left by
/// the epoch's last example.
///
/// # Errors
/// - `Configuration` if `config.epochs` is zero or `examples` is empty
/// - `ShapeMismatch` if any example does not fit the network
///
/// An empty example set would otherwise run every epoch without touching
/// the network and report whatever gradient the last `backward` left, so
/// it is refused here even though it is a training argument rather than a
/// construction one.
///
/// Both are checked before the network is touched. A diverging run is not
/// an error here; wrap the reporter in `DivergenceGuard` to catch it.
pub fn train_loop<R: Reporter + ?Sized>(
    network: &mut Network,
    examples: &[Example],
    config: &TrainConfig,
    reporter: &mut R,
) -> Result<()> {
    config.validate()?;
    if examples.is_empty() {
        return Err(NnError::config("no training examples"));
    }
    for example in examples {
        NnError::check_len("example input", network.input_size(), example.input.len())?;
        NnError::check_len("example target", network.output_size(), example.target.len())?;
    }

    let interval = config.report_interval();
    debug!(epochs = config.epochs, examples = examples.len(), interval, "training started");

    for epoch in 1..=config.epochs {
        for example in examples {
            network.forward(&example.input)?;
            network.backward(&example.target)?;
        }

        if epoch % interval == 0 {
            let report = EpochReport {
                epoch,
                total_epochs: config.epochs,
                loss: root_mean_square(network.output_gradient()),
                weights: network.weights().to_vec(),
            };
            debug!(epoch, loss = report.loss, "epoch reported");
            reporter.report(&report);
        }
    }

    Ok(())
}
