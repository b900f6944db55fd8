use ratatui::crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::{info, warn};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

enum Incoming {
    Terminal(Option<TerminalEvent>),
    App(Event),
}

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let incoming = tokio::select! {
            evt = tui.next() => Incoming::Terminal(evt),
            Ok(evt) = app.event_rx.recv_async() => Incoming::App(evt),
        };

        let mut should_render = match incoming {
            Incoming::Terminal(Some(evt)) => Self::handle_event(app, evt, tui).await?,
            Incoming::Terminal(None) => {
                app.should_quit = true;
                false
            }
            Incoming::App(evt) => {
                Self::handle_action(app, evt);
                true
            }
        };

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => info!("mood2music started"),
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse).await,
            TerminalEvent::Resize(_, _) => {}
            TerminalEvent::Tick => {
                return Ok(app.has_focus && app.state.is_generating);
            }
            TerminalEvent::Error => warn!("terminal event stream failed"),
        }

        Ok(true)
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match &evt {
            Event::ContentGenerated(_) => info!("content received"),
            Event::GenerationFailed(message) => info!(message = message.as_str(), "generation failed"),
            Event::CopyFeedbackExpired(_) => {}
        }
        app.apply(evt);
    }

    async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt) {
            app.update(msg).await;
        }
    }

    async fn handle_mouse_event(app: &mut App, evt: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = evt.kind {
            if let Some(mood) = app.layout().mood_at(evt.column, evt.row) {
                app.update(AppMessage::SelectMood(mood)).await;
            }
        }
    }
}
