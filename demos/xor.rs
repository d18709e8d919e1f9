use backprop_nn::{train_loop, ActivationFunction, Dataset, EpochReport, Network, TrainConfig};

fn main() -> Result<(), backprop_nn::NnError> {
    let mut network = Network::new(&[3, 4, 1], 0.5, ActivationFunction::Sigmoid)?;
    let data = Dataset::xor();

    let mut reports: Vec<EpochReport> = Vec::new();
    train_loop(&mut network, data.examples(), &TrainConfig::new(10000, 10), &mut reports)?;

    for report in &reports {
        println!("Epoch {}: loss = {:.6}", report.epoch, report.loss);
    }

    for example in data.examples() {
        println!(
            "Input: {:?} -> Output: {:.4}",
            example.input,
            network.predict(&example.input)?[0]
        );
    }
    Ok(())
}
