use alloc::string::String;

/// Errors surfaced by network construction and forward evaluation.
///
/// Construction problems are fatal: an invalid topology is rejected before a
/// `Network` ever exists. Evaluation problems abort the current pass; nothing
/// is retried internally and the shared buffer must be treated as stale until
/// the next successful pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NtError {
    /// Input length does not match the neuron's weight count.
    ShapeMismatch { expected: usize, got: usize },
    /// Wiring references data that is not available: a layer that has not
    /// been evaluated in the current pass, or an external array that was
    /// never registered.
    UnresolvedSource { detail: String },
    /// A wiring segment exceeds the extent of its source.
    OutOfBounds { detail: String },
    /// Activation selector does not resolve to a registered function.
    UnknownActivation { id: u8 },
    /// Topology failed eager validation at build time.
    ConstructionInvalid { reason: String },
}

impl core::fmt::Display for NtError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NtError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {} inputs, got {}", expected, got)
            }
            NtError::UnresolvedSource { detail } => {
                write!(f, "unresolved source: {}", detail)
            }
            NtError::OutOfBounds { detail } => write!(f, "out of bounds: {}", detail),
            NtError::UnknownActivation { id } => {
                write!(f, "unknown activation selector {}", id)
            }
            NtError::ConstructionInvalid { reason } => {
                write!(f, "invalid network construction: {}", reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NtError {}

pub type Result<T> = core::result::Result<T, NtError>;
