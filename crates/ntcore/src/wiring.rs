//! Data-driven wiring: where each layer's inputs come from.
//!
//! Connectivity is described data-side instead of hard-coded. A layer owns a
//! wiring entry holding one or more taps; each tap concatenates contiguous
//! segments sourced from the network input, an earlier layer's slice of the
//! shared buffer, or a named caller-supplied array. Every neuron in the layer
//! selects one tap as its input vector.
//!
//! Resolution is a pure function of the wiring table and the current pass
//! state: the only ordering dependency is "producing layer evaluated before
//! consuming layer", which is enforced here and validated again at
//! construction time.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;
use serde::{Deserialize, Serialize};

use crate::buffer::SlotBuffer;
use crate::error::{NtError, Result};

/// One contiguous region of a source, referenced by a tap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Slice of the network's external input array.
    NetworkInput { start: usize, len: usize },
    /// Slice of an already-evaluated layer's output range in the shared
    /// buffer. `start` is an offset within that layer's range.
    LayerOutput { layer: usize, start: usize, len: usize },
    /// Slice of a named external array supplied by the caller per pass.
    External { name: String, len: usize },
}

impl Segment {
    pub fn len(&self) -> usize {
        match self {
            Segment::NetworkInput { len, .. } => *len,
            Segment::LayerOutput { len, .. } => *len,
            Segment::External { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered list of segments whose resolved scalars concatenate into one
/// input vector. The original design called these buffer "arrays" between
/// layers; mixed-source arrays map to multi-segment taps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tap {
    pub segments: Vec<Segment>,
}

impl Tap {
    pub fn new(segments: Vec<Segment>) -> Self {
        Tap { segments }
    }

    /// Total element count across all segments.
    pub fn len(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-layer wiring: the taps available to that layer's neurons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiringEntry {
    pub taps: Vec<Tap>,
}

impl WiringEntry {
    pub fn new(taps: Vec<Tap>) -> Self {
        WiringEntry { taps }
    }

    /// Single tap sourcing the whole network input.
    pub fn from_network_input(len: usize) -> Self {
        WiringEntry::new(alloc::vec![Tap::new(alloc::vec![Segment::NetworkInput {
            start: 0,
            len,
        }])])
    }

    /// Single tap sourcing one earlier layer's full output.
    pub fn from_layer(layer: usize, len: usize) -> Self {
        WiringEntry::new(alloc::vec![Tap::new(alloc::vec![Segment::LayerOutput {
            layer,
            start: 0,
            len,
        }])])
    }
}

/// Named external arrays registered for one evaluation pass.
#[derive(Debug, Default, Clone)]
pub struct ExternalArrays<'a> {
    arrays: BTreeMap<&'a str, &'a [f32]>,
}

impl<'a> ExternalArrays<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'a str, values: &'a [f32]) {
        self.arrays.insert(name, values);
    }

    pub fn get(&self, name: &str) -> Option<&'a [f32]> {
        self.arrays.get(name).copied()
    }
}

/// Read-only view of the pass state a tap resolves against.
///
/// `evaluated` is the watermark: layers `0..evaluated` have produced their
/// outputs in the current pass.
pub struct ResolveCtx<'a> {
    pub inputs: &'a [f32],
    pub buffer: &'a SlotBuffer,
    pub layer_ranges: &'a [Range<usize>],
    pub evaluated: usize,
    pub externals: &'a ExternalArrays<'a>,
}

impl Tap {
    /// Resolve every segment against the pass state, appending the scalars
    /// into `out` (cleared first). `out` is caller-owned scratch reused
    /// across passes, so resolution performs no steady-state allocation.
    pub fn resolve_into(&self, ctx: &ResolveCtx<'_>, out: &mut Vec<f32>) -> Result<()> {
        out.clear();
        for segment in &self.segments {
            out.extend_from_slice(resolve_segment(segment, ctx)?);
        }
        Ok(())
    }
}

fn resolve_segment<'a>(segment: &Segment, ctx: &ResolveCtx<'a>) -> Result<&'a [f32]> {
    match segment {
        Segment::NetworkInput { start, len } => {
            ctx.inputs.get(*start..start + len).ok_or_else(|| NtError::OutOfBounds {
                detail: format!(
                    "input segment {}..{} exceeds {} network inputs",
                    start,
                    start + len,
                    ctx.inputs.len()
                ),
            })
        }
        Segment::LayerOutput { layer, start, len } => {
            if *layer >= ctx.evaluated {
                return Err(NtError::UnresolvedSource {
                    detail: format!(
                        "layer {} has not been evaluated in the current pass",
                        layer
                    ),
                });
            }
            let range = ctx.layer_ranges.get(*layer).ok_or_else(|| NtError::OutOfBounds {
                detail: format!("layer {} outside network of {} layers", layer, ctx.layer_ranges.len()),
            })?;
            if start + len > range.len() {
                return Err(NtError::OutOfBounds {
                    detail: format!(
                        "segment {}..{} exceeds layer {} output of {} elements",
                        start,
                        start + len,
                        layer,
                        range.len()
                    ),
                });
            }
            ctx.buffer.slice(range.start + start..range.start + start + len)
        }
        Segment::External { name, len } => {
            let array = ctx.externals.get(name).ok_or_else(|| NtError::UnresolvedSource {
                detail: format!("external array '{}' is not registered", name),
            })?;
            array.get(..*len).ok_or_else(|| NtError::OutOfBounds {
                detail: format!(
                    "segment of {} elements exceeds external array '{}' of {}",
                    len,
                    name,
                    array.len()
                ),
            })
        }
    }
}
