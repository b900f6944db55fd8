use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{ui::components::spinner::Spinner, util::colors};

pub struct GenerateButton {
    enabled: bool,
    busy: bool,
}

impl GenerateButton {
    pub fn new(enabled: bool, busy: bool) -> Self {
        Self { enabled, busy }
    }
}

impl Widget for GenerateButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = self.enabled && !self.busy;
        let style = if active {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.busy {
            Spinner::default()
                .with_style(Style::default().fg(colors::SECONDARY))
                .with_label("Generating...")
                .render(inner, buf);
        } else {
            Paragraph::new("⏎ Generate prompt & lyrics")
                .style(style)
                .centered()
                .render(inner, buf);
        }
    }
}
