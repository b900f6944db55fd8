use crate::http::GenerationResult;

/// Results delivered back to the UI loop by background tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ContentGenerated(GenerationResult),
    /// Carries the user-facing message only.
    GenerationFailed(String),
    /// The copy feedback timer with this sequence number elapsed.
    CopyFeedbackExpired(u64),
}
