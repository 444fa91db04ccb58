//! XOR built from gate neurons with fixed weights and step activation.
//!
//! Mirrors the classic perceptron-gate construction: layer 0 computes
//! NAND(a, b) and OR(a, b) from the network inputs, layer 1 ANDs them.
//!
//! Run with: cargo run -p ntcore --example logic_gates

use ntcore::activation::{ActivationRegistry, STEP};
use ntcore::network::Network;
use ntcore::topology::NetSpec;

fn main() {
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

    let mut net = Network::new(spec, ActivationRegistry::new()).expect("valid topology");

    println!("| A | B | XOR |");
    for case in 0u8..4 {
        let a = f32::from(case & 1);
        let b = f32::from((case >> 1) & 1);
        let out = net.evaluate(&[a, b]).expect("forward pass");
        println!("| {} | {} |  {}  |", a as u8, b as u8, out[0] as u8);
    }
}
