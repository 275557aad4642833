//! Queue `Error`
use std::fmt;

/// Result type: `std::result::Result<T, Error>`
pub type Result<T> = std::result::Result<T, Error>;


/// Queue error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The queue was shut down.
    /// No value will be accepted or handed out again.
    ClosedQueue,

    /// The queue is open but holds no values
    Empty,

    /// No value arrived before the timeout elapsed
    Timeout,
}


// -----------------------------------------------------------------------------
// 		- Display -
// -----------------------------------------------------------------------------
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ClosedQueue => write!(f, "queue is shut down"),
            Error::Empty => write!(f, "queue is empty"),
            Error::Timeout => write!(f, "timed out waiting on queue"),
        }
    }
}

impl std::error::Error for Error {}
