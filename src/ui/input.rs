use crate::{
    mood::Mood,
    ui::{message::AppMessage, state::CopyTarget},
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Some(AppMessage::Quit),
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) | (KeyCode::Tab, _) => {
                Some(AppMessage::NextMood)
            }
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) | (KeyCode::BackTab, _) => {
                Some(AppMessage::PreviousMood)
            }
            (KeyCode::Char(c @ '1'..='5'), _) => c
                .to_digit(10)
                .and_then(|d| Mood::from_index(d as usize - 1))
                .map(AppMessage::SelectMood),
            (KeyCode::Enter, _) | (KeyCode::Char('g'), _) => Some(AppMessage::Generate),
            (KeyCode::Char('p'), _) => Some(AppMessage::Copy(CopyTarget::Prompt)),
            (KeyCode::Char('y'), _) => Some(AppMessage::Copy(CopyTarget::Lyrics)),
            (KeyCode::Char('r'), _) => Some(AppMessage::Reset),
            _ => None,
        }
    }
}
