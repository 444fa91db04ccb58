//! Activation dispatch: selector -> scalar transform.
//!
//! A fixed set of activation operations is resident in the registry and each
//! one can be selected and evaluated independently. All operations are pure
//! and deterministic; no state is preserved between evaluations. Alongside
//! the transform, each entry carries the recommended uniform range for weight
//! initialization.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::error::{NtError, Result};

/// Selector identifying one registered activation function.
///
/// Stored per neuron; resolved through an [`ActivationRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivationId(pub u8);

/// Built-in selectors, pre-registered in every [`ActivationRegistry`].
pub const IDENTITY: ActivationId = ActivationId(0);
/// Step function: 1.0 for x >= 0, else 0.0.
pub const STEP: ActivationId = ActivationId(1);
pub const SIGMOID: ActivationId = ActivationId(2);
pub const TANH: ActivationId = ActivationId(3);
pub const RELU: ActivationId = ActivationId(4);

enum Transform {
    Builtin(fn(f32) -> f32),
    Custom(Box<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl core::fmt::Debug for Transform {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Transform::Builtin(func) => f.debug_tuple("Builtin").field(func).finish(),
            Transform::Custom(_) => f.debug_tuple("Custom").finish(),
        }
    }
}

/// One registered activation: name, transform, and recommended init range.
#[derive(Debug)]
pub struct ActivationEntry {
    name: String,
    transform: Transform,
    init_range: (f32, f32),
}

impl ActivationEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recommended uniform range for randomized weight initialization.
    pub fn init_range(&self) -> (f32, f32) {
        self.init_range
    }

    /// Apply the scalar transform.
    pub fn apply(&self, x: f32) -> f32 {
        match &self.transform {
            Transform::Builtin(f) => f(x),
            Transform::Custom(f) => f(x),
        }
    }
}

fn identity(x: f32) -> f32 {
    x
}

fn step(x: f32) -> f32 {
    if x >= 0.0 {
        1.0
    } else {
        0.0
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + libm::expf(-x))
}

fn tanh(x: f32) -> f32 {
    libm::tanhf(x)
}

fn relu(x: f32) -> f32 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}

/// Maps activation selectors to their execution routines.
///
/// Built-ins occupy the low selectors; additional transforms can be
/// registered at runtime without touching the core, which keeps the selector
/// space open for callers with custom activation needs.
pub struct ActivationRegistry {
    entries: Vec<ActivationEntry>,
}

impl Default for ActivationRegistry {
    fn default() -> Self {
        let mut reg = ActivationRegistry { entries: Vec::new() };
        reg.push_builtin("identity", identity, (-1.0, 1.0));
        reg.push_builtin("step", step, (-1.0, 1.0));
        reg.push_builtin("sigmoid", sigmoid, (-1.0, 1.0));
        reg.push_builtin("tanh", tanh, (-1.0, 1.0));
        reg.push_builtin("relu", relu, (0.0, 1.0));
        reg
    }
}

impl ActivationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_builtin(&mut self, name: &str, f: fn(f32) -> f32, range: (f32, f32)) {
        self.entries.push(ActivationEntry {
            name: String::from(name),
            transform: Transform::Builtin(f),
            init_range: range,
        });
    }

    /// Register a custom activation and return its selector.
    ///
    /// Fails with `ConstructionInvalid` once the selector space (u8) is
    /// exhausted.
    pub fn register<F>(&mut self, name: &str, init_range: (f32, f32), f: F) -> Result<ActivationId>
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        if self.entries.len() > u8::MAX as usize {
            return Err(NtError::ConstructionInvalid {
                reason: String::from("activation selector space exhausted"),
            });
        }
        let id = ActivationId(self.entries.len() as u8);
        self.entries.push(ActivationEntry {
            name: String::from(name),
            transform: Transform::Custom(Box::new(f)),
            init_range,
        });
        Ok(id)
    }

    /// Resolve a selector, failing with `UnknownActivation` if unregistered.
    pub fn resolve(&self, id: ActivationId) -> Result<&ActivationEntry> {
        self.entries
            .get(id.0 as usize)
            .ok_or(NtError::UnknownActivation { id: id.0 })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
