use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

use crate::mood::Mood;

const ACTION_WIDTH: u16 = 36;

/// Screen regions, shared by rendering and mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub cards: [Rect; 5],
    pub action: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [header, cards_row, action_row, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let cards = Layout::horizontal([Constraint::Fill(1); 5])
            .spacing(1)
            .horizontal_margin(1)
            .areas(cards_row);

        let [action] = Layout::horizontal([Constraint::Length(ACTION_WIDTH)])
            .flex(Flex::Center)
            .areas(action_row);

        Self {
            header,
            cards,
            action,
            body,
            footer,
        }
    }

    pub fn mood_at(&self, column: u16, row: u16) -> Option<Mood> {
        let position = Position::new(column, row);
        self.cards
            .iter()
            .position(|card| card.contains(position))
            .and_then(Mood::from_index)
    }
}
