//! Regression suite for the construction and evaluation invariants:
//! eager topology validation, strict feed-forward ordering, and typed
//! failures instead of silent truncation.

use ntcore::activation::{ActivationId, ActivationRegistry, IDENTITY};
use ntcore::buffer::SlotBuffer;
use ntcore::network::Network;
use ntcore::topology::{LayerSpec, NetSpec};
use ntcore::wiring::{ExternalArrays, ResolveCtx, Segment, Tap, WiringEntry};
use ntcore::{NtError, Neuron};

fn neuron(weights: Vec<f32>, bias: f32, slot: usize) -> Neuron {
    Neuron { weights, bias, activation: IDENTITY, buffer_index: slot, tap: 0 }
}

fn small_spec() -> NetSpec {
    NetSpec {
        inputs: 2,
        layers: vec![
            LayerSpec {
                wiring: WiringEntry::from_network_input(2),
                neurons: vec![
                    neuron(vec![1.0, 0.0], 0.0, 0),
                    neuron(vec![0.0, 1.0], 0.0, 1),
                ],
            },
            LayerSpec {
                wiring: WiringEntry::from_layer(0, 2),
                neurons: vec![neuron(vec![1.0, 1.0], -1.0, 2)],
            },
        ],
    }
}

#[test]
fn buffer_index_collision_fails_construction() {
    let mut spec = small_spec();
    spec.layers[1].neurons[0].buffer_index = 1;
    let err = Network::new(spec, ActivationRegistry::new()).unwrap_err();
    assert!(
        matches!(err, NtError::ConstructionInvalid { .. }),
        "expected ConstructionInvalid, got {err}"
    );
}

#[test]
fn wiring_into_later_layer_fails_construction() {
    let mut spec = small_spec();
    // Layer 0 trying to read layer 1's output.
    spec.layers[0].wiring = WiringEntry::from_layer(1, 1);
    for n in &mut spec.layers[0].neurons {
        n.weights = vec![1.0];
    }
    assert!(matches!(
        Network::new(spec, ActivationRegistry::new()).unwrap_err(),
        NtError::ConstructionInvalid { .. }
    ));
}

#[test]
fn self_wiring_fails_construction() {
    let mut spec = small_spec();
    spec.layers[1].wiring = WiringEntry::from_layer(1, 1);
    spec.layers[1].neurons[0].weights = vec![1.0];
    assert!(matches!(
        Network::new(spec, ActivationRegistry::new()).unwrap_err(),
        NtError::ConstructionInvalid { .. }
    ));
}

#[test]
fn oversized_wiring_segment_fails_construction() {
    let mut spec = small_spec();
    // Layer 0 only has 2 outputs.
    spec.layers[1].wiring = WiringEntry::from_layer(0, 3);
    spec.layers[1].neurons[0].weights = vec![1.0, 1.0, 1.0];
    assert!(matches!(
        Network::new(spec, ActivationRegistry::new()).unwrap_err(),
        NtError::ConstructionInvalid { .. }
    ));
}

#[test]
fn unknown_activation_fails_construction() {
    let mut spec = small_spec();
    spec.layers[0].neurons[0].activation = ActivationId(250);
    assert_eq!(
        Network::new(spec, ActivationRegistry::new()).unwrap_err(),
        NtError::UnknownActivation { id: 250 }
    );
}

#[test]
fn unresolved_layer_output_at_resolution_time() {
    // Drive the resolver directly: a tap naming a layer at or past the
    // watermark must fail with UnresolvedSource, never read stale slots.
    let buffer = SlotBuffer::new(4);
    let ranges = [0..2, 2..4];
    let externals = ExternalArrays::new();
    let ctx = ResolveCtx {
        inputs: &[],
        buffer: &buffer,
        layer_ranges: &ranges,
        evaluated: 1,
        externals: &externals,
    };

    let mut out = Vec::new();
    for layer in [1, 2] {
        let tap = Tap::new(vec![Segment::LayerOutput { layer, start: 0, len: 1 }]);
        assert!(matches!(
            tap.resolve_into(&ctx, &mut out).unwrap_err(),
            NtError::UnresolvedSource { .. }
        ));
    }
}

#[test]
fn mismatched_input_length_fails_shape_mismatch() {
    let reg = ActivationRegistry::new();
    let n = neuron(vec![1.0, 1.0], 0.0, 0);
    assert_eq!(
        n.evaluate(&[1.0, 2.0, 3.0], &reg).unwrap_err(),
        NtError::ShapeMismatch { expected: 2, got: 3 }
    );
}

#[test]
fn neuron_output_is_deterministic() {
    let reg = ActivationRegistry::new();
    let n = Neuron {
        weights: vec![0.3, -0.7, 1.1],
        bias: 0.25,
        activation: ntcore::activation::TANH,
        buffer_index: 0,
        tap: 0,
    };
    let inputs = [0.5, -0.25, 2.0];
    assert_eq!(n.evaluate(&inputs, &reg).unwrap(), n.evaluate(&inputs, &reg).unwrap());
}

#[test]
fn failed_pass_does_not_poison_the_next_one() {
    let spec = small_spec();
    let mut net = Network::new(spec, ActivationRegistry::new()).unwrap();

    // Wrong input arity aborts the pass...
    assert!(net.evaluate(&[1.0]).is_err());
    // ...and the next well-formed pass still produces correct outputs.
    assert_eq!(net.evaluate(&[3.0, 4.0]).unwrap(), &[6.0]);
}
