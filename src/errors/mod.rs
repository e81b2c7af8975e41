use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Tick fired before a destination channel was configured
    #[error("No destination channel configured")]
    MissingDestination,

    // Network errors (any transport failure or non-success status)
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    #[error("Unparseable publication timestamp: {0}")]
    Timestamp(String),

    // Storage errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    // Delivery errors from the chat service library
    #[error("Channel error: {0}")]
    Channel(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<channels::ChannelError> for RelayError {
    fn from(err: channels::ChannelError) -> Self {
        RelayError::Channel(err.to_string())
    }
}

pub type RelayResult<T> = Result<T, RelayError>;
