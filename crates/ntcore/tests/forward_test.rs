//! End-to-end forward-pass behavior through the public API.

use ntcore::activation::{ActivationRegistry, IDENTITY, STEP};
use ntcore::network::Network;
use ntcore::topology::NetSpec;

#[test]
fn two_layer_identity_network_sums_inputs() {
    // Layer 0: pass-through pair; layer 1: sum with bias -1.
    let mut spec = NetSpec::feedforward(2, &[2, 1], IDENTITY);
    spec.layers[0].neurons[0].weights = vec![1.0, 0.0];
    spec.layers[0].neurons[1].weights = vec![0.0, 1.0];
    spec.layers[1].neurons[0].weights = vec![1.0, 1.0];
    spec.layers[1].neurons[0].bias = -1.0;

    let mut net = Network::new(spec, ActivationRegistry::new()).unwrap();
    assert_eq!(net.evaluate(&[3.0, 4.0]).unwrap(), &[6.0]);
}

#[test]
fn xor_from_gate_neurons() {
    // The classic two-gate construction: XOR = AND(NAND(a, b), OR(a, b)),
    // with step activation and hand-set gate weights.
    let mut spec = NetSpec::feedforward(2, &[2, 1], STEP);
    // NAND
    spec.layers[0].neurons[0].weights = vec![-1.0, -1.0];
    spec.layers[0].neurons[0].bias = 1.5;
    // OR
    spec.layers[0].neurons[1].weights = vec![1.0, 1.0];
    spec.layers[0].neurons[1].bias = -0.5;
    // AND
    spec.layers[1].neurons[0].weights = vec![1.0, 1.0];
    spec.layers[1].neurons[0].bias = -1.5;

    let mut net = Network::new(spec, ActivationRegistry::new()).unwrap();
    for (a, b, expected) in [
        (0.0, 0.0, 0.0),
        (0.0, 1.0, 1.0),
        (1.0, 0.0, 1.0),
        (1.0, 1.0, 0.0),
    ] {
        assert_eq!(net.evaluate(&[a, b]).unwrap(), &[expected], "xor({}, {})", a, b);
    }
}

#[test]
fn dense_wiring_reads_all_previous_layers() {
    // 1 input -> layer 0 (identity, w=1) -> layer 1 taps layer 0 only
    // -> layer 2 taps layers 0 and 1 concatenated.
    let mut spec = NetSpec::dense(1, &[1, 1, 1], IDENTITY);
    spec.layers[0].neurons[0].weights = vec![1.0];
    spec.layers[1].neurons[0].weights = vec![2.0];
    spec.layers[2].neurons[0].weights = vec![1.0, 1.0];

    let mut net = Network::new(spec, ActivationRegistry::new()).unwrap();
    // layer 0 = 5, layer 1 = 10, layer 2 = 5 + 10.
    assert_eq!(net.evaluate(&[5.0]).unwrap(), &[15.0]);
}

#[test]
fn repeated_passes_with_different_inputs_are_independent() {
    let mut spec = NetSpec::feedforward(2, &[2, 1], IDENTITY);
    spec.layers[0].neurons[0].weights = vec![1.0, 0.0];
    spec.layers[0].neurons[1].weights = vec![0.0, 1.0];
    spec.layers[1].neurons[0].weights = vec![1.0, 1.0];

    let mut net = Network::new(spec, ActivationRegistry::new()).unwrap();
    let first: Vec<f32> = net.evaluate(&[1.0, 2.0]).unwrap().to_vec();
    let second: Vec<f32> = net.evaluate(&[100.0, 200.0]).unwrap().to_vec();
    let third: Vec<f32> = net.evaluate(&[1.0, 2.0]).unwrap().to_vec();

    assert_eq!(first, vec![3.0]);
    assert_eq!(second, vec![300.0]);
    assert_eq!(third, first);
}
