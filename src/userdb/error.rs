use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserDbError {
    /// Missing or invalid flag, unknown operation, or an unparsable `-item`.
    #[error("{0}")]
    Argument(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode users: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode users: {0}")]
    Encode(#[source] serde_json::Error),
}

impl UserDbError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, UserDbError>;
