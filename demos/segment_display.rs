use pyrite_nn::{train_loop, MultiLayerPerceptron, TrainConfig};

/// Seven-segment patterns for the digits 0-9, segment order a through g.
/// A `1.0` lights the segment.
const DIGITS: [[f64; 7]; 10] = [
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0], // 0
    [0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0], // 1
    [1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0], // 2
    [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0], // 3
    [0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0], // 4
    [1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0], // 5
    [1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0], // 6
    [1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0], // 7
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0], // 8
    [1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0], // 9
];

/// Index of the maximum element in a slice.
fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut network = MultiLayerPerceptron::new(&[7, 12, 10], 1.0, 0.5)?;

    let inputs: Vec<Vec<f64>> = DIGITS.iter().map(|pattern| pattern.to_vec()).collect();
    let targets: Vec<Vec<f64>> = (0..10)
        .map(|digit| {
            let mut one_hot = vec![0.0; 10];
            one_hot[digit] = 1.0;
            one_hot
        })
        .collect();

    let config = TrainConfig::new(20_000)
        .with_target_mse(1e-3)
        .with_log_every(1000);
    let stats = train_loop(&mut network, &inputs, &targets, &config)?;
    println!(
        "Finished after {} epochs (loss = {:.6}).",
        stats.epoch, stats.mse
    );

    let mut correct = 0;
    for (digit, input) in inputs.iter().enumerate() {
        let guess = argmax(network.forward(input)?);
        if guess == digit {
            correct += 1;
        }
        println!("Digit {digit}: classified as {guess}");
    }
    println!("Accuracy: {correct}/10");
    Ok(())
}
