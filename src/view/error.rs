use derive_more::Display;

/// What the user was doing when a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Submit,
    Load,
}

/// Failures of a network call as the views see them. None are retried.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The server refused the request shape (400).
    #[display(fmt = "request rejected: {}", _0)]
    Rejected(String),
    /// The server failed while handling the request (5xx or anything unexpected).
    #[display(fmt = "server error ({})", _0)]
    Server(u16),
    /// The request never got a response.
    #[display(fmt = "network error")]
    Network,
}

impl std::error::Error for ClientError {}

impl ClientError {
    /// Classifies a finished HTTP exchange; `None` for success statuses.
    pub fn from_status(status: u16, error: Option<String>) -> Option<Self> {
        match status {
            200..=299 => None,
            400..=499 => Some(ClientError::Rejected(error.unwrap_or_default())),
            _ => Some(ClientError::Server(status)),
        }
    }

    pub fn user_message(&self, operation: Operation) -> &'static str {
        match (self, operation) {
            (ClientError::Network, _) => "Network error, please try again later",
            (_, Operation::Submit) => "Failed to submit leave application, please try again",
            (_, Operation::Load) => "Unable to load leave applications",
        }
    }
}
