use pyrite_nn::{train_loop, MultiLayerPerceptron, NetworkSpec, TrainConfig};

fn xor_dataset() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
    (inputs, targets)
}

#[test]
fn xor_network_learns_the_truth_table() {
    let mut network = MultiLayerPerceptron::from_seed(&[2, 4, 1], 1.0, 0.5, 42).unwrap();
    let (inputs, targets) = xor_dataset();

    let config = TrainConfig::new(30_000).with_target_mse(5e-4);
    let stats = train_loop(&mut network, &inputs, &targets, &config).unwrap();
    assert!(stats.mse < 5e-4, "training never converged: {:?}", stats);

    for (input, target) in inputs.iter().zip(targets.iter()) {
        let output = network.forward(input).unwrap()[0];
        if target[0] > 0.5 {
            assert!(output > 0.9, "expected high output for {:?}, got {output}", input);
        } else {
            assert!(output < 0.1, "expected low output for {:?}, got {output}", input);
        }
    }
}

#[test]
fn trained_weights_transplant_into_a_fresh_network() {
    let spec = NetworkSpec::new("xor", &[2, 4, 1], 1.0, 0.5);
    let (inputs, targets) = xor_dataset();

    let mut trained = spec.build_seeded(7).unwrap();
    let config = TrainConfig::new(30_000).with_target_mse(5e-4);
    train_loop(&mut trained, &inputs, &targets, &config).unwrap();

    let mut fresh = spec.build_seeded(999).unwrap();
    fresh.set_weights(&trained.weights()).unwrap();

    for input in &inputs {
        let a = trained.forward(input).unwrap().to_vec();
        let b = fresh.forward(input).unwrap().to_vec();
        assert_eq!(a, b, "transplanted network diverged on {:?}", input);
    }
}
