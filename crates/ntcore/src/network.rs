//! Network container and forward-pass orchestration.
//!
//! A network is built once from a [`NetSpec`] and is mutable only in its
//! buffer contents during evaluation (weights and biases may be rewritten by
//! an external trainer between passes). Construction validates the whole
//! topology eagerly so that `evaluate` never re-validates static structure:
//! buffer-index uniqueness and bounds, per-layer slot contiguity, tap/weight
//! shape agreement, activation selectors, and strict feed-forward wiring
//! (every `LayerOutput` names an earlier layer, so the layer dependency graph
//! is acyclic by construction).
//!
//! One pass is strictly sequential layer-by-layer; layer i+1 may read layer
//! i's buffer slots, so nothing evaluates concurrently within a pass, and
//! `&mut self` on `evaluate` keeps two passes over the same instance from
//! interleaving. Distinct instances share no mutable state.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;
use log::{debug, trace};
use rand::Rng;

use crate::activation::ActivationRegistry;
use crate::buffer::SlotBuffer;
use crate::error::{NtError, Result};
use crate::neuron::Neuron;
use crate::topology::NetSpec;
use crate::wiring::{ExternalArrays, ResolveCtx, Segment, Tap, WiringEntry};

struct Layer {
    wiring: WiringEntry,
    neurons: Vec<Neuron>,
}

/// A validated, evaluatable network.
pub struct Network {
    layers: Vec<Layer>,
    /// Buffer slots owned by each layer, in evaluation order.
    layer_ranges: Vec<Range<usize>>,
    input_len: usize,
    registry: ActivationRegistry,
    buffer: SlotBuffer,
    /// Per-tap input scratch, reused across passes.
    scratch: Vec<Vec<f32>>,
}

impl core::fmt::Debug for Network {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Network")
            .field("layer_ranges", &self.layer_ranges)
            .field("input_len", &self.input_len)
            .finish_non_exhaustive()
    }
}

impl Network {
    /// Validate a topology description and build the network.
    ///
    /// An invalid topology is rejected here and never becomes evaluatable.
    pub fn new(spec: NetSpec, registry: ActivationRegistry) -> Result<Network> {
        if spec.layers.is_empty() {
            return Err(invalid("network needs at least one layer"));
        }
        for (i, layer) in spec.layers.iter().enumerate() {
            if layer.neurons.is_empty() {
                return Err(invalid(format!("layer {} has no neurons", i)));
            }
        }

        let total = spec.total_neurons();
        let layer_ranges = slot_ranges(&spec, total)?;
        validate_wiring(&spec, &layer_ranges)?;
        validate_neurons(&spec, &registry)?;

        let max_taps = spec
            .layers
            .iter()
            .map(|l| l.wiring.taps.len())
            .max()
            .unwrap_or(0);
        let mut scratch = vec![Vec::new(); max_taps];
        for layer in &spec.layers {
            for (t, tap) in layer.wiring.taps.iter().enumerate() {
                let len = tap.len();
                if scratch[t].capacity() < len {
                    scratch[t].reserve(len);
                }
            }
        }

        debug!(
            "network built: {} layers, {} inputs, {} buffer slots",
            spec.layers.len(),
            spec.inputs,
            total
        );

        Ok(Network {
            input_len: spec.inputs,
            layers: spec
                .layers
                .into_iter()
                .map(|l| Layer { wiring: l.wiring, neurons: l.neurons })
                .collect(),
            layer_ranges,
            registry,
            buffer: SlotBuffer::new(total),
            scratch,
        })
    }

    /// Run one forward pass with no external arrays.
    pub fn evaluate(&mut self, inputs: &[f32]) -> Result<&[f32]> {
        self.evaluate_with(inputs, &ExternalArrays::new())
    }

    /// Run one forward pass: for each layer in order, resolve its wiring
    /// against the current buffer state, evaluate its neurons, and write
    /// every result into its assigned slot exactly once.
    ///
    /// Returns the output view (the final layer's buffer range) on success.
    /// Any error aborts the pass; the buffer is then stale and outputs are
    /// unreachable until the next successful pass rewrites every slot.
    pub fn evaluate_with(
        &mut self,
        inputs: &[f32],
        externals: &ExternalArrays<'_>,
    ) -> Result<&[f32]> {
        if inputs.len() != self.input_len {
            return Err(NtError::ShapeMismatch { expected: self.input_len, got: inputs.len() });
        }
        self.buffer.reset();
        for i in 0..self.layers.len() {
            trace!("evaluating layer {}", i);
            let layer = &self.layers[i];
            let ctx = ResolveCtx {
                inputs,
                buffer: &self.buffer,
                layer_ranges: &self.layer_ranges,
                evaluated: i,
                externals,
            };
            for (t, tap) in layer.wiring.taps.iter().enumerate() {
                tap.resolve_into(&ctx, &mut self.scratch[t])?;
            }
            for neuron in &layer.neurons {
                let out = neuron.evaluate(&self.scratch[neuron.tap], &self.registry)?;
                self.buffer.write(neuron.buffer_index, out)?;
            }
        }
        let out_range = self.layer_ranges[self.layer_ranges.len() - 1].clone();
        self.buffer.slice(out_range)
    }

    /// Randomize every weight uniformly within its activation's recommended
    /// range and zero every bias.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        for layer in &mut self.layers {
            for neuron in &mut layer.neurons {
                let (lo, hi) = self.registry.resolve(neuron.activation)?.init_range();
                for w in &mut neuron.weights {
                    *w = rng.gen::<f32>() * (hi - lo) + lo;
                }
                neuron.bias = 0.0;
            }
        }
        Ok(())
    }

    pub fn input_len(&self) -> usize {
        self.input_len
    }

    pub fn output_len(&self) -> usize {
        self.layer_ranges[self.layer_ranges.len() - 1].len()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer_size(&self, layer: usize) -> Option<usize> {
        self.layers.get(layer).map(|l| l.neurons.len())
    }

    pub fn registry(&self) -> &ActivationRegistry {
        &self.registry
    }

    /// Borrow one neuron, addressed by layer and position.
    pub fn neuron(&self, layer: usize, index: usize) -> Option<&Neuron> {
        self.layers.get(layer).and_then(|l| l.neurons.get(index))
    }

    /// Mutably borrow one neuron so an external trainer can rewrite its
    /// parameters between passes. Topology fields must not change; weights
    /// keep their length because the wiring shape was validated against it.
    pub fn neuron_mut(&mut self, layer: usize, index: usize) -> Option<&mut Neuron> {
        self.layers.get_mut(layer).and_then(|l| l.neurons.get_mut(index))
    }
}

fn invalid(reason: impl Into<String>) -> NtError {
    NtError::ConstructionInvalid { reason: reason.into() }
}

/// Check buffer-index uniqueness and bounds, and derive each layer's
/// contiguous slot range.
fn slot_ranges(spec: &NetSpec, total: usize) -> Result<Vec<Range<usize>>> {
    let mut seen = vec![false; total];
    let mut ranges = Vec::with_capacity(spec.layers.len());
    for (i, layer) in spec.layers.iter().enumerate() {
        let mut lo = usize::MAX;
        let mut hi = 0;
        for neuron in &layer.neurons {
            let slot = neuron.buffer_index;
            if slot >= total {
                return Err(invalid(format!(
                    "layer {}: buffer index {} outside buffer of {} slots",
                    i, slot, total
                )));
            }
            if seen[slot] {
                return Err(invalid(format!(
                    "layer {}: buffer index {} assigned to more than one neuron",
                    i, slot
                )));
            }
            seen[slot] = true;
            lo = lo.min(slot);
            hi = hi.max(slot);
        }
        if hi - lo + 1 != layer.neurons.len() {
            return Err(invalid(format!(
                "layer {}: buffer slots are not contiguous",
                i
            )));
        }
        ranges.push(lo..hi + 1);
    }
    Ok(ranges)
}

/// Check that every wiring segment references resolvable, in-bounds data and
/// that `LayerOutput` sources are strictly earlier layers.
fn validate_wiring(spec: &NetSpec, layer_ranges: &[Range<usize>]) -> Result<()> {
    for (i, layer) in spec.layers.iter().enumerate() {
        if layer.wiring.taps.is_empty() {
            return Err(invalid(format!("layer {}: wiring entry has no taps", i)));
        }
        for (t, tap) in layer.wiring.taps.iter().enumerate() {
            for segment in &tap.segments {
                validate_segment(spec, layer_ranges, i, t, segment)?;
            }
        }
    }
    Ok(())
}

fn validate_segment(
    spec: &NetSpec,
    layer_ranges: &[Range<usize>],
    layer: usize,
    tap: usize,
    segment: &Segment,
) -> Result<()> {
    match segment {
        Segment::NetworkInput { start, len } => {
            if start + len > spec.inputs {
                return Err(invalid(format!(
                    "layer {} tap {}: input segment {}..{} exceeds {} network inputs",
                    layer,
                    tap,
                    start,
                    start + len,
                    spec.inputs
                )));
            }
        }
        Segment::LayerOutput { layer: src, start, len } => {
            if *src >= layer {
                return Err(invalid(format!(
                    "layer {} tap {}: wiring references layer {}, which is not evaluated earlier",
                    layer, tap, src
                )));
            }
            let extent = layer_ranges[*src].len();
            if start + len > extent {
                return Err(invalid(format!(
                    "layer {} tap {}: segment {}..{} exceeds layer {} output of {} elements",
                    layer,
                    tap,
                    start,
                    start + len,
                    src,
                    extent
                )));
            }
        }
        // External array extents are only known per pass; the resolver
        // checks them against the registered array.
        Segment::External { .. } => {}
    }
    Ok(())
}

/// Check tap selection, tap/weight shape agreement, and activation
/// selectors for every neuron.
fn validate_neurons(spec: &NetSpec, registry: &ActivationRegistry) -> Result<()> {
    for (i, layer) in spec.layers.iter().enumerate() {
        for (j, neuron) in layer.neurons.iter().enumerate() {
            let tap: &Tap = layer.wiring.taps.get(neuron.tap).ok_or_else(|| {
                invalid(format!(
                    "layer {} neuron {}: tap {} does not exist (entry has {} taps)",
                    i,
                    j,
                    neuron.tap,
                    layer.wiring.taps.len()
                ))
            })?;
            if neuron.input_count() != tap.len() {
                return Err(invalid(format!(
                    "layer {} neuron {}: {} weights against a tap of {} elements",
                    i,
                    j,
                    neuron.input_count(),
                    tap.len()
                )));
            }
            registry.resolve(neuron.activation)?;
        }
    }
    Ok(())
}
