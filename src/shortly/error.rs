use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortlyError {
    #[error("This email is already registered: {0}")]
    AlreadyRegistered(String),

    #[error("User not found. Please register first.")]
    NotFound(String),

    #[error("Invalid credentials! Please try again.")]
    InvalidCredentials,

    #[error("Please enter a valid URL: {0}")]
    InvalidUrl(String),

    #[error("URL already shortened: {0}")]
    DuplicateUrl(String),

    #[error("Link index {index} is out of range ({len} links)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Could not find a free short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },

    #[error("Please login first")]
    NotLoggedIn,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShortlyError>;
