//! # ntcore — fixed-topology neural evaluation for constrained targets
//!
//! A forward-evaluation engine where network connectivity is described
//! data-side through a wiring table instead of hard-coded, and every neuron
//! writes its scalar output into a shared, index-addressed buffer that
//! downstream layers read from.
//!
//! ## Execution model
//!
//! - A [`topology::NetSpec`] describes layers, neuron parameters, and wiring;
//!   [`network::Network::new`] validates it once, eagerly. An invalid
//!   topology never becomes evaluatable.
//! - One pass ([`network::Network::evaluate`]) walks the layers in order:
//!   resolve the layer's wiring against the current buffer state, evaluate
//!   each neuron, write each result into its assigned slot exactly once.
//! - Wiring may source a layer's inputs from the network input, any earlier
//!   layer's output slice, or named caller-supplied arrays; strict
//!   feed-forward ordering is enforced, recurrence is unsupported.
//!
//! ## Design constraints
//!
//! - No std by default: `core` + `alloc`, transcendentals via `libm`.
//! - Deterministic: evaluation is pure computation, no I/O, no hidden state;
//!   identical inputs produce identical outputs.
//! - One pass in flight per instance, enforced by `&mut self`; independent
//!   instances share no mutable state and may run on separate threads.
//!
//! ## Example
//!
//! ```
//! use ntcore::activation::{ActivationRegistry, IDENTITY};
//! use ntcore::network::Network;
//! use ntcore::topology::NetSpec;
//!
//! // 2 inputs -> 2 pass-through neurons -> 1 summing neuron.
//! let mut spec = NetSpec::feedforward(2, &[2, 1], IDENTITY);
//! spec.layers[0].neurons[0].weights = vec![1.0, 0.0];
//! spec.layers[0].neurons[1].weights = vec![0.0, 1.0];
//! spec.layers[1].neurons[0].weights = vec![1.0, 1.0];
//! spec.layers[1].neurons[0].bias = -1.0;
//!
//! let mut net = Network::new(spec, ActivationRegistry::new()).unwrap();
//! assert_eq!(net.evaluate(&[3.0, 4.0]).unwrap(), &[6.0]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod activation;
pub mod buffer;
pub mod error;
pub mod feedforward;
pub mod network;
pub mod neuron;
pub mod topology;
pub mod wiring;

pub use activation::{ActivationId, ActivationRegistry};
pub use error::{NtError, Result};
pub use network::Network;
pub use neuron::Neuron;
pub use topology::{LayerSpec, NetSpec};
pub use wiring::{ExternalArrays, Segment, Tap, WiringEntry};
