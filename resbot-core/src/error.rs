use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Event has no handler: {0}")]
    Unhandled(String),

    #[error("Resource file unavailable: {path}")]
    FileUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ResbotError>;
