use crate::{mood::Mood, ui::state::CopyTarget};

/// User intents produced from terminal input.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Quit,
    SelectMood(Mood),
    NextMood,
    PreviousMood,
    Generate,
    Copy(CopyTarget),
    Reset,
}
