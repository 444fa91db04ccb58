//! The atomic computational unit: weighted sum + bias + activation.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::activation::{ActivationId, ActivationRegistry};
use crate::error::{NtError, Result};

/// One neuron: parameters, activation selector, and its assigned output slot.
///
/// A neuron is a pure function over its inputs plus its own parameters. It
/// never touches the shared buffer; the network writes the result into
/// `buffer_index` after evaluation, which keeps the unit testable in
/// isolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    /// Weight per input, length defines the input count.
    pub weights: Vec<f32>,
    /// Bias term, accumulated before the weighted inputs.
    pub bias: f32,
    /// Activation selector, resolved through the registry at evaluation.
    pub activation: ActivationId,
    /// Slot in the network's shared buffer that receives this neuron's
    /// output. Unique per neuron within a network.
    pub buffer_index: usize,
    /// Which tap of the layer's wiring entry feeds this neuron.
    pub tap: usize,
}

impl Neuron {
    /// Number of input connections. Invariant: equals `weights.len()`.
    pub fn input_count(&self) -> usize {
        self.weights.len()
    }

    /// Weighted sum of the resolved inputs plus bias, passed through the
    /// activation function.
    ///
    /// Fails with `ShapeMismatch` if the input length differs from the
    /// weight count; no truncation or padding. Fails with
    /// `UnknownActivation` if the selector does not resolve.
    pub fn evaluate(&self, inputs: &[f32], registry: &ActivationRegistry) -> Result<f32> {
        if inputs.len() != self.weights.len() {
            return Err(NtError::ShapeMismatch {
                expected: self.weights.len(),
                got: inputs.len(),
            });
        }
        let activation = registry.resolve(self.activation)?;
        let mut sum = self.bias;
        for (input, weight) in inputs.iter().zip(self.weights.iter()) {
            sum += input * weight;
        }
        Ok(activation.apply(sum))
    }
}
