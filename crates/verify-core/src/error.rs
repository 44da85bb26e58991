use crate::Side;
use thiserror::Error;

/// Failures that abort a verification run.
///
/// Nothing here is recovered from: a run that cannot see every entry on both
/// sides must not report a result.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("{store} request failed: {message}")]
    Transport {
        store: &'static str,
        message: String,
    },

    #[error("Malformed segment manifest for '{key}': {reason}")]
    ManifestDecode { key: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("{side} listing is not strictly ascending: '{previous}' followed by '{key}'")]
    ListingOrder {
        side: Side,
        previous: String,
        key: String,
    },
}

impl VerifyError {
    pub fn transport(store: &'static str, message: impl Into<String>) -> Self {
        VerifyError::Transport {
            store,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VerifyError>;
