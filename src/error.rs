use crate::gameplay::action::Action;

/// Failures this layer surfaces to its callers. Nothing is retried here;
/// the training loop or evaluation harness decides whether to abandon the
/// episode or the run.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A card or chip value from the engine has no cell in the fixed
    /// encoding. Surfaced rather than zero-filled: a silently absent bit
    /// corrupts the learning signal without failing anything visibly.
    MalformedState { message: String },
    /// The table offered neither Check nor Fold, breaking the invariant
    /// the fallback policy rests on. Upstream programming error.
    NoLegalFallback { offered: Vec<Action> },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MalformedState { message } => {
                write!(f, "malformed state: {}", message)
            }
            Error::NoLegalFallback { offered } => {
                write!(f, "no legal fallback among {:?}", offered)
            }
        }
    }
}

impl std::error::Error for Error {}
