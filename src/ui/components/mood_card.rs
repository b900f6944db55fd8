use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{mood::MoodEntry, util::colors};

pub struct MoodCard {
    entry: MoodEntry,
    position: usize,
    selected: bool,
}

impl MoodCard {
    pub fn new(entry: MoodEntry, position: usize, selected: bool) -> Self {
        Self {
            entry,
            position,
            selected,
        }
    }
}

impl Widget for MoodCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, text_style) = if self.selected {
            (
                Style::default().fg(colors::PRIMARY),
                Style::default()
                    .fg(colors::TEXT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(colors::NEUTRAL),
                Style::default().fg(colors::NEUTRAL),
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(if self.selected {
                border::THICK
            } else {
                border::ROUNDED
            })
            .border_style(border_style)
            .title(Line::from(format!(" {} ", self.position + 1)).style(border_style));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let lines = [self.entry.icon, self.entry.label];
        let top = inner.y + inner.height.saturating_sub(lines.len() as u16) / 2;
        for (i, text) in lines.iter().enumerate() {
            let y = top + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let x = inner.x + inner.width.saturating_sub(text.width() as u16) / 2;
            buf.set_stringn(x, y, text, inner.width as usize, text_style);
        }
    }
}
