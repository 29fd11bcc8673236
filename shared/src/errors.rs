use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("HTTP message error: {0}")]
    Http(#[from] http::Error),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
