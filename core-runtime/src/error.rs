//! Runtime errors raised while assembling the bridge.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A `BridgeConfig` or logging option was rejected.
    #[error("Invalid bridge configuration: {0}")]
    Config(String),

    /// A host capability the bridge depends on was not provided.
    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },

    /// A global tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl Error {
    pub fn capability_missing(capability: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CapabilityMissing {
            capability: capability.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
