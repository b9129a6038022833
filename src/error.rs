//! Error types for plugin dispatch.
//!
//! Everything here is recoverable: at the dispatch facade each variant is
//! rendered to a descriptive message and handed back to the caller as text.

use thiserror::Error;

/// Failures raised at or below the dispatch facade.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The memory dump path resolved neither absolutely nor under the
    /// configured dumps directory.
    #[error("Error: memory dump file not found at {0}")]
    ArtifactNotFound(String),

    /// The requested plugin name is not in the registry.
    #[error("Error: plugin '{0}' not found")]
    UnknownPlugin(String),

    /// A required plugin parameter was absent from the keyword arguments.
    #[error("Error: missing required argument '{0}'")]
    MissingArgument(&'static str),

    /// Two registrations used the same name. Compiled-in family tables must
    /// not collide; a silent overwrite would shadow an earlier plugin.
    #[error("Error: plugin '{0}' is already registered")]
    DuplicateName(String),
}
