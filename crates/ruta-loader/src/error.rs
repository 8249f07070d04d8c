//! Loader error type.

use thiserror::Error;

use ruta_core::CoreError;

/// Errors produced while resolving a route into simulatable geometry.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The storage backend has no route with the requested name.
    #[error("route '{0}' not found")]
    RouteNotFound(String),

    /// The routing provider answered with a non-2xx status.
    #[error("routing provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    /// The provider answered 2xx but the payload was not the expected
    /// GeoJSON shape.
    #[error("malformed provider response: {0}")]
    Payload(String),

    /// The route resolved to a polyline whose vertices all coincide, so no
    /// positive total distance could be established.
    #[error("route '{0}' resolved to zero-length geometry")]
    ZeroLengthGeometry(String),

    /// Transport-level failure talking to either collaborator.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Shorthand result type for `ruta-loader`.
pub type LoaderResult<T> = Result<T, LoaderError>;
