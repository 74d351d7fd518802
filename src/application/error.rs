use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
