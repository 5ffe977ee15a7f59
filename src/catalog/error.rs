use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The raw payload was not an array of station records. Individual
    /// malformed records are skipped silently; this fires only when the
    /// payload as a whole has the wrong shape.
    #[error("raw payload is not an array of station records (got {got})")]
    InvalidInputFormat {
        /// JSON type of the offending payload ("object", "string", ...).
        got: &'static str,
    },
}
