use thiserror::Error;

/// Why module content could not be produced.
///
/// Never surfaced past the content loader; every variant maps to a placeholder
/// document via [`crate::document::placeholder_for`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("module {0} is not part of the course")]
    UnknownModule(u32),
    #[error("failed to fetch module {module}: {reason}")]
    FetchFailure { module: u32, reason: String },
}
