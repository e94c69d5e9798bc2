use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// 401 from the server. Carries the server's message when it sent one.
    #[error("Unauthorized")]
    Unauthorized(Option<String>),

    #[error("Request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Session storage error: {0}")]
    Session(String),
}

impl ClientError {
    /// Message to show the user: the server's text where present, otherwise
    /// `fallback`. Transport failures always read as a network error.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Unauthorized(Some(message))
            | ClientError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Network(_) | ClientError::Decode(_) => NETWORK_ERROR_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ClientError::Rejected {
            status: 400,
            message: Some("Invalid field".into()),
        };
        assert_eq!(err.user_message("Update failed"), "Invalid field");
    }

    #[test]
    fn missing_message_uses_fallback() {
        let err = ClientError::Unauthorized(None);
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn undecodable_response_reads_as_network_error() {
        let err = ClientError::Decode("expected value".into());
        assert_eq!(err.user_message("Login failed"), NETWORK_ERROR_MESSAGE);
    }
}
