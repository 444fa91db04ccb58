//! Shared output buffer: one slot per neuron, index-addressed.
//!
//! The original design wired neurons together through raw pointers into a
//! shared float lattice. Here the buffer is an owned slot store with checked
//! access; neuron and wiring references are validated indices, and evaluation
//! reads go through slices instead of offset arithmetic.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::error::{NtError, Result};

/// Flat scalar store holding every neuron's most recent output.
///
/// Written exactly once per neuron per pass, read by any number of
/// downstream consumers. Overwritten from scratch at the start of each pass
/// so no state leaks between passes.
#[derive(Debug, Clone)]
pub struct SlotBuffer {
    slots: Vec<f32>,
}

impl SlotBuffer {
    pub fn new(len: usize) -> Self {
        SlotBuffer { slots: vec![0.0; len] }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Zero every slot. Called at the start of a pass.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = 0.0);
    }

    /// Write one neuron output into its assigned slot.
    pub fn write(&mut self, index: usize, value: f32) -> Result<()> {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(NtError::OutOfBounds {
                detail: format!("slot {} outside buffer of {} slots", index, self.slots.len()),
            }),
        }
    }

    /// Borrow a contiguous range of slots.
    pub fn slice(&self, range: Range<usize>) -> Result<&[f32]> {
        let len = self.slots.len();
        self.slots.get(range.clone()).ok_or_else(|| NtError::OutOfBounds {
            detail: format!("slots {}..{} outside buffer of {} slots", range.start, range.end, len),
        })
    }
}
