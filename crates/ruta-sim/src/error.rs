//! Simulation error type.

use thiserror::Error;

use ruta_loader::LoaderError;

/// Failures reported by [`Simulator::start`][crate::Simulator::start].
///
/// Every other control-surface operation is a silent no-op when its
/// precondition state does not hold; only `start` has failure modes worth
/// surfacing to the caller.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("cruise speed must be positive, got {0} km/h")]
    InvalidSpeed(f64),

    /// A previous `start` is still resolving its route data.
    #[error("another start is already in progress")]
    StartInProgress,

    /// A `stop` (or newer `start`) arrived while this call was awaiting
    /// route data; the late result was discarded and engine state is
    /// untouched.
    #[error("start superseded by a newer session; route data discarded")]
    Superseded,

    #[error(transparent)]
    Load(#[from] LoaderError),
}

/// Shorthand result type for `ruta-sim`.
pub type SimResult<T> = Result<T, SimError>;
