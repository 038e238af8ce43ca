use thiserror::Error;

/// Startup failures that happen before the router is serving.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger initialization failed: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
