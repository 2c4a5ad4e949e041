use thiserror::Error;

/// Failure modes of envelope translation.
///
/// Every variant is terminal for the conversion that raised it: translation
/// is deterministic, so a failed input can never succeed on retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("No legacy event type maps to CloudEvent type '{0}'")]
    UnresolvedType(String),

    #[error("No service mapping matches '{0}'")]
    UnresolvedService(String),

    #[error("Malformed event payload: {0}")]
    MalformedInput(String),
}

impl TranslationError {
    /// True when the failure was an absent envelope field (as opposed to a
    /// present-but-unmappable value or an unparseable body).
    pub fn is_missing_field(&self) -> bool {
        matches!(self, TranslationError::MissingField(_))
    }
}
