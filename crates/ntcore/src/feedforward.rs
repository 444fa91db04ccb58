//! Prefab wiring configurations for common feed-forward topologies.
//!
//! These constructors produce a fully-populated [`NetSpec`] with zeroed
//! parameters; callers set weights explicitly or randomize them through
//! [`crate::network::Network::randomize`].

use alloc::vec;
use alloc::vec::Vec;

use crate::activation::ActivationId;
use crate::neuron::Neuron;
use crate::topology::{LayerSpec, NetSpec};
use crate::wiring::{Segment, Tap, WiringEntry};

impl NetSpec {
    /// Classic multilayer perceptron wiring: the first layer taps the whole
    /// network input, every later layer taps the full output of the layer
    /// directly before it.
    pub fn feedforward(inputs: usize, layer_sizes: &[usize], activation: ActivationId) -> NetSpec {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut next_slot = 0;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let wiring = if i == 0 {
                WiringEntry::from_network_input(inputs)
            } else {
                WiringEntry::from_layer(i - 1, layer_sizes[i - 1])
            };
            layers.push(make_layer(wiring, size, activation, &mut next_slot));
        }
        NetSpec { inputs, layers }
    }

    /// Densely-wired variant: every layer past the first taps the
    /// concatenation of all previous layers' outputs, expressed as one
    /// multi-segment tap.
    pub fn dense(inputs: usize, layer_sizes: &[usize], activation: ActivationId) -> NetSpec {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut next_slot = 0;
        for (i, &size) in layer_sizes.iter().enumerate() {
            let wiring = if i == 0 {
                WiringEntry::from_network_input(inputs)
            } else {
                let segments = (0..i)
                    .map(|src| Segment::LayerOutput { layer: src, start: 0, len: layer_sizes[src] })
                    .collect();
                WiringEntry::new(vec![Tap::new(segments)])
            };
            layers.push(make_layer(wiring, size, activation, &mut next_slot));
        }
        NetSpec { inputs, layers }
    }
}

fn make_layer(
    wiring: WiringEntry,
    size: usize,
    activation: ActivationId,
    next_slot: &mut usize,
) -> LayerSpec {
    let input_count = wiring.taps[0].len();
    let neurons = (0..size)
        .map(|_| {
            let slot = *next_slot;
            *next_slot += 1;
            Neuron {
                weights: vec![0.0; input_count],
                bias: 0.0,
                activation,
                buffer_index: slot,
                tap: 0,
            }
        })
        .collect();
    LayerSpec { wiring, neurons }
}
