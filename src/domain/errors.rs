/// Failure of a store operation, before it is flattened into the stored
/// display string.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The backend answered with a non-2xx HTTP status.
    Http(u16),
    /// The backend answered 2xx but the envelope signalled failure, or the
    /// fetch payload was missing or malformed. Carries the message to show.
    Api(String),
    /// The request never produced a usable body: connection failure, timeout,
    /// or an undecodable response.
    Transport(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Http(status) => {
                write!(f, "HTTP error! status: {}", status)
            }
            StoreError::Api(msg) => {
                write!(f, "{}", msg)
            }
            StoreError::Transport(msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;
