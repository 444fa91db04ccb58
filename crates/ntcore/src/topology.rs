//! Static topology description consumed by [`crate::network::Network`].
//!
//! A `NetSpec` is the construction-time contract: layer sizes, per-neuron
//! parameters, and the wiring table. It is plain data (serde-derived) so an
//! external model loader can produce it; the network validates it once,
//! eagerly, and evaluation never re-checks static topology.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::neuron::Neuron;
use crate::wiring::WiringEntry;

/// One layer: its wiring entry and the neurons evaluated together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Where this layer's inputs come from.
    pub wiring: WiringEntry,
    pub neurons: Vec<Neuron>,
}

/// Complete description of a fixed-topology network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetSpec {
    /// Number of external input variables.
    pub inputs: usize,
    /// Evaluation order is the order of this sequence.
    pub layers: Vec<LayerSpec>,
}

impl NetSpec {
    /// Total neuron count across all layers; also the shared buffer size.
    pub fn total_neurons(&self) -> usize {
        self.layers.iter().map(|l| l.neurons.len()).sum()
    }

    /// Neuron count of the final layer, i.e. the output width.
    pub fn output_len(&self) -> usize {
        self.layers.last().map(|l| l.neurons.len()).unwrap_or(0)
    }
}
