use thiserror::Error;

/// Errors raised by geometric constructions.
///
/// The math kernel is total almost everywhere: arithmetic, comparisons, and
/// intersection queries never fail ("no intersection" is an ordinary `None`).
/// Only constructions that would produce unusable geometry report an error.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
