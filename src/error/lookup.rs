use thiserror::Error;

/// Card lookup service rejected a request.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Non-success HTTP status, carrying the message the service reported.
    #[error("{message}")]
    Service {
        /// HTTP status code returned by the service
        status: u16,
        /// Message from the service's error body, or the status reason
        message: String,
    },
}
