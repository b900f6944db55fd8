use crate::{http::GenerationResult, mood::Mood};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Prompt,
    Lyrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    MoodSelected,
    Generating,
    Completed,
    Failed,
}

/// Everything the screen shows, owned by the UI loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected_mood: Option<Mood>,
    /// Mood of the request in flight or of the last outcome.
    pub generated_for: Option<Mood>,
    pub is_generating: bool,
    pub last_result: Option<GenerationResult>,
    pub last_error: Option<String>,
    pub copy_indicator: Option<CopyTarget>,
}

impl SelectionState {
    pub fn phase(&self) -> Phase {
        if self.is_generating {
            Phase::Generating
        } else if self.last_error.is_some() {
            Phase::Failed
        } else if self.last_result.is_some() {
            Phase::Completed
        } else if self.selected_mood.is_some() {
            Phase::MoodSelected
        } else {
            Phase::Idle
        }
    }

    pub fn select_mood(&mut self, mood: Mood) {
        self.selected_mood = Some(mood);
    }

    pub fn can_generate(&self) -> bool {
        self.selected_mood.is_some() && !self.is_generating
    }

    /// Enters the generating phase and returns the mood to generate for.
    ///
    /// Returns `None` and leaves the state untouched when no mood is selected
    /// or a generation is already in flight.
    pub fn begin_generation(&mut self) -> Option<Mood> {
        if !self.can_generate() {
            return None;
        }

        self.last_result = None;
        self.last_error = None;
        self.copy_indicator = None;
        self.is_generating = true;
        self.generated_for = self.selected_mood;
        self.selected_mood
    }

    pub fn finish_generation(&mut self, outcome: Result<GenerationResult, String>) {
        self.is_generating = false;
        match outcome {
            Ok(result) => {
                self.last_result = Some(result);
                self.last_error = None;
            }
            Err(message) => {
                self.last_result = None;
                self.last_error = Some(message);
            }
        }
    }

    pub fn text_for(&self, target: CopyTarget) -> Option<&str> {
        self.last_result.as_ref().map(|r| match target {
            CopyTarget::Prompt => r.prompt.as_str(),
            CopyTarget::Lyrics => r.lyrics.as_str(),
        })
    }

    pub fn mark_copied(&mut self, target: CopyTarget) -> bool {
        if self.last_result.is_none() {
            return false;
        }
        self.copy_indicator = Some(target);
        true
    }

    pub fn clear_copy_indicator(&mut self) {
        self.copy_indicator = None;
    }

    /// Back to a blank screen. Refused while a request is in flight.
    pub fn reset(&mut self) -> bool {
        if self.is_generating {
            return false;
        }
        *self = Self::default();
        true
    }
}
