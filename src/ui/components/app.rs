use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    http::GenerationResult,
    mood::{self, Mood},
    ui::{
        app::App,
        components::{
            generate_button::GenerateButton,
            mood_card::MoodCard,
            text_panel::{TextPanel, lyrics_text},
        },
        layout::AppLayout,
        state::CopyTarget,
    },
    util::colors,
};

const KEY_HINTS: &str = "←/→ 1-5 choose mood · ⏎ generate · p copy prompt · y copy lyrics · r reset · q quit";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));
        let layout = AppLayout::new(area);

        render_header(layout.header, buf);

        for (i, entry) in mood::catalog().into_iter().enumerate() {
            let selected = self.state.selected_mood == Some(entry.mood);
            MoodCard::new(entry, i, selected).render(layout.cards[i], buf);
        }

        GenerateButton::new(self.state.can_generate(), self.state.is_generating)
            .render(layout.action, buf);

        if let Some(error) = &self.state.last_error {
            render_error(error, layout.body, buf);
        } else if let Some(result) = &self.state.last_result {
            render_result(
                result,
                self.state.generated_for,
                self.state.copy_indicator,
                layout.body,
                buf,
            );
        } else if !self.state.is_generating {
            let hint = if self.state.selected_mood.is_some() {
                "Press ⏎ to write a prompt and lyrics for this mood."
            } else {
                "Choose a mood to get started."
            };
            Paragraph::new(vec![Line::default(), Line::from(hint)])
                .style(Style::default().fg(colors::NEUTRAL))
                .centered()
                .render(layout.body, buf);
        }

        Paragraph::new(KEY_HINTS)
            .style(Style::default().fg(colors::NEUTRAL))
            .centered()
            .render(layout.footer, buf);
    }
}

fn render_header(area: Rect, buf: &mut Buffer) {
    let title = Line::from(vec![
        Span::styled("Mood", Style::default().fg(colors::PRIMARY)),
        Span::styled("2", Style::default().fg(colors::TEXT)),
        Span::styled("Music", Style::default().fg(colors::SECONDARY)),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD))
    .centered();
    let subtitle = Line::styled(
        "Pick a mood and get a professional music prompt with matching lyrics.",
        Style::default().fg(colors::NEUTRAL),
    )
    .centered();

    Paragraph::new(vec![Line::default(), title, subtitle]).render(area, buf);
}

fn render_error(message: &str, area: Rect, buf: &mut Buffer) {
    let [panel] = Layout::vertical([Constraint::Length(3)])
        .horizontal_margin(2)
        .vertical_margin(1)
        .areas(area);

    Paragraph::new(message)
        .style(Style::default().fg(colors::ERROR))
        .centered()
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(colors::ERROR)),
        )
        .render(panel, buf);
}

fn render_result(
    result: &GenerationResult,
    mood: Option<Mood>,
    copied: Option<CopyTarget>,
    area: Rect,
    buf: &mut Buffer,
) {
    let [caption, prompt_area, lyrics_area, usage] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Percentage(30),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .horizontal_margin(1)
    .areas(area);

    if let Some(mood) = mood {
        Paragraph::new(format!("Generated for: {} {}", mood.icon(), mood.label()))
            .style(Style::default().fg(colors::NEUTRAL))
            .render(caption, buf);
    }

    TextPanel::new("🎹 Music prompt", result.prompt.as_str(), 'p', colors::PRIMARY)
        .copied(copied == Some(CopyTarget::Prompt))
        .render(prompt_area, buf);

    TextPanel::new("✍️ Lyrics", lyrics_text(&result.lyrics), 'y', colors::SECONDARY)
        .copied(copied == Some(CopyTarget::Lyrics))
        .render(lyrics_area, buf);

    Paragraph::new("Paste the prompt into Suno/Udio and the lyrics into its Lyrics field.")
        .style(Style::default().fg(colors::NEUTRAL))
        .centered()
        .render(usage, buf);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        clipboard::ClipboardSink,
        config::UiConfig,
        http::{ContentGenerator, GenerationError},
    };

    struct Unused;

    #[async_trait]
    impl ContentGenerator for Unused {
        async fn generate(&self, _mood: Mood) -> Result<GenerationResult, GenerationError> {
            Err(GenerationError::MissingApiKey)
        }
    }

    impl ClipboardSink for Unused {
        fn write_text(&mut self, _text: &str) {}
    }

    fn screen(app: &App) -> String {
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);

        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::with_services(Arc::new(Unused), Box::new(Unused), UiConfig::default())
    }

    #[test]
    fn renders_catalog_and_hint() {
        let app = app();
        let screen = screen(&app);
        for entry in mood::catalog() {
            assert!(screen.contains(entry.label));
        }
        assert!(screen.contains("Choose a mood"));
    }

    #[test]
    fn renders_results_and_errors() {
        let mut app = app();
        app.state.select_mood(Mood::Calm);
        app.state.begin_generation();
        app.state.finish_generation(Ok(GenerationResult {
            prompt: "ambient piano, 70 bpm".into(),
            lyrics: "[Chorus]\nslow tide".into(),
        }));
        app.state.mark_copied(CopyTarget::Lyrics);

        let screen = screen(&app);
        assert!(screen.contains("ambient piano, 70 bpm"));
        assert!(screen.contains("slow tide"));
        assert!(screen.contains("[p] Copy"));
        assert!(screen.contains("Copied!"));
        assert!(screen.contains("Calm"));

        app.state.finish_generation(Err("Content generation failed.".into()));
        let screen = self::screen(&app);
        assert!(screen.contains("Content generation failed."));
        assert!(!screen.contains("slow tide"));
    }
}
