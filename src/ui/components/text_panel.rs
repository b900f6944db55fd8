use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::util::colors;

/// A titled block of generated text with a copy hint in its corner.
pub struct TextPanel<'a> {
    title: &'a str,
    body: Text<'a>,
    copy_key: char,
    copied: bool,
    accent: Color,
}

impl<'a> TextPanel<'a> {
    pub fn new(title: &'a str, body: impl Into<Text<'a>>, copy_key: char, accent: Color) -> Self {
        Self {
            title,
            body: body.into(),
            copy_key,
            copied: false,
            accent,
        }
    }

    pub fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }
}

impl Widget for TextPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let copy_hint = if self.copied {
            Span::styled(
                " Copied! ",
                Style::default()
                    .fg(colors::BACKGROUND)
                    .bg(colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!(" [{}] Copy ", self.copy_key),
                Style::default().fg(colors::TEXT),
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(self.accent))
            .title(Line::styled(
                format!(" {} ", self.title),
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            ))
            .title(Line::from(copy_hint).right_aligned());

        Paragraph::new(self.body)
            .style(Style::default().fg(colors::TEXT))
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

/// Styles stanza headings such as `[Chorus]` or `Verse 1:`.
pub fn lyrics_text(lyrics: &str) -> Text<'_> {
    lyrics
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            let heading = (trimmed.starts_with('[') && trimmed.ends_with(']'))
                || (trimmed.ends_with(':') && trimmed.len() < 24);
            if heading {
                Line::styled(
                    line,
                    Style::default()
                        .fg(colors::SECONDARY)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::raw(line)
            }
        })
        .collect()
}
