use thiserror::Error;

/// Errors originating from the pattern catalog.
#[derive(Error, Debug)]
pub enum PatternError {
    /// Requested name matches no catalog entry or alias.
    #[error("Motif de tramage inconnu : {name}")]
    UnknownPattern {
        /// Name as received, unmodified.
        name: String,
    },
}
