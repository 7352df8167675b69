use crate::api::JoinRequest;
use crate::error::WaitlistError;

pub const SUCCESS_MESSAGE: &str = "Thanks for joining! We'll notify you when we launch.";

/// Where the most recent submission stands.
///
/// The outcome text travels with the terminal variants, so a message can
/// never outlive the state it describes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl Submission {
    pub fn status(&self) -> SubmissionStatus {
        match self {
            Submission::Idle => SubmissionStatus::Idle,
            Submission::Submitting => SubmissionStatus::Submitting,
            Submission::Succeeded(_) => SubmissionStatus::Succeeded,
            Submission::Failed(_) => SubmissionStatus::Failed,
        }
    }

    /// Empty unless the last attempt finished.
    pub fn message(&self) -> &str {
        match self {
            Submission::Succeeded(message) | Submission::Failed(message) => message,
            Submission::Idle | Submission::Submitting => "",
        }
    }
}

/// The waitlist form: the typed email plus the submission lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Waitlist {
    email: String,
    submission: Submission,
}

impl Waitlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn status(&self) -> SubmissionStatus {
        self.submission.status()
    }

    pub fn message(&self) -> &str {
        self.submission.message()
    }

    /// True while the input and submit button should be disabled.
    pub fn is_locked(&self) -> bool {
        matches!(
            self.submission,
            Submission::Submitting | Submission::Succeeded(_)
        )
    }

    /// Replaces the email text verbatim.
    pub fn update_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Moves to `Submitting` and hands back the request to send.
    ///
    /// Returns `None`, leaving everything untouched, while a request is
    /// already in flight or after the visitor has joined.
    pub fn begin_submit(&mut self) -> Option<JoinRequest> {
        if self.is_locked() {
            tracing::debug!("Ignoring waitlist submit while {:?}", self.status());
            return None;
        }
        self.submission = Submission::Submitting;
        Some(JoinRequest {
            email: self.email.clone(),
        })
    }

    /// Applies the outcome of the in-flight request.
    ///
    /// Returns `false` when there was nothing in flight; the outcome is then
    /// dropped.
    pub fn finish_submit(&mut self, outcome: Result<(), WaitlistError>) -> bool {
        if self.submission != Submission::Submitting {
            tracing::warn!("Dropping waitlist outcome with no request in flight");
            return false;
        }
        match outcome {
            Ok(()) => {
                tracing::info!("Joined waitlist");
                self.submission = Submission::Succeeded(SUCCESS_MESSAGE.to_string());
                self.email.clear();
            }
            Err(err) => {
                match &err {
                    WaitlistError::Rejected { status, .. } => {
                        tracing::info!("Waitlist signup rejected with status {}", status);
                    }
                    WaitlistError::Transport(_) | WaitlistError::MalformedResponse(_) => {
                        tracing::error!("Error submitting email: {}", err);
                    }
                }
                self.submission = Submission::Failed(err.user_message());
            }
        }
        true
    }
}
