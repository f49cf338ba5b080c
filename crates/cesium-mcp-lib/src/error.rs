use thiserror::Error;

/// Convenient result alias for the Cesium MCP library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when generated output would exceed the caller's capacity.
    #[error("output too large: {needed} bytes needed, limit is {limit}")]
    OutputTooLarge { limit: usize, needed: usize },

    /// Raised when a command requires an argument the caller did not supply.
    #[error("Missing '{name}' parameter")]
    MissingArgument { name: &'static str },

    /// Raised when a scene command or location list fails to serialize.
    #[error("failed to serialize {what}: {message}")]
    Serialize { what: &'static str, message: String },
}

impl Error {
    pub(crate) fn serialize(what: &'static str, err: serde_json::Error) -> Self {
        Error::Serialize {
            what,
            message: err.to_string(),
        }
    }
}
