use thiserror::Error;

/// Shown when the server rejects a signup without saying why.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Failed to join waitlist. Please try again.";
/// Shown for anything that never produced a usable server answer.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitlistError {
    #[error("Waitlist endpoint returned {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl WaitlistError {
    /// Text safe to put in front of a visitor.
    ///
    /// Server-supplied messages are passed through verbatim; transport and
    /// decoding faults collapse to a generic line so no technical detail leaks.
    pub fn user_message(&self) -> String {
        match self {
            WaitlistError::Rejected { message: Some(message), .. } => message.clone(),
            WaitlistError::Rejected { message: None, .. } => REJECTED_FALLBACK_MESSAGE.to_string(),
            WaitlistError::Transport(_) | WaitlistError::MalformedResponse(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("A carousel needs at least one slide")]
    NoSlides,
}
