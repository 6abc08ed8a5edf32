use pyrite_nn::{train_loop, NetworkSpec, TrainConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spec = NetworkSpec::new("xor", &[2, 4, 1], 1.0, 0.5);
    let mut network = spec.build()?;

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let targets = vec![
        vec![1.0],
        vec![0.0],
        vec![1.0],
        vec![0.0],
    ];

    let config = TrainConfig::new(30_000)
        .with_target_mse(5e-4)
        .with_log_every(1000);
    let stats = train_loop(&mut network, &inputs, &targets, &config)?;
    println!(
        "Finished after {} epochs (loss = {:.6}, {} ms).",
        stats.epoch, stats.mse, stats.elapsed_ms
    );

    for input in &inputs {
        let output = network.forward(input)?[0];
        println!("Input: {:?} -> Output: {:.4}", input, output);
    }

    println!("Trained weights:");
    print!("{network}");
    Ok(())
}
