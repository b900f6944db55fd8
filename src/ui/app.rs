use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::{Frame, layout::Rect};
use tracing::{debug, info};

use crate::{
    clipboard::{ClipboardSink, SystemClipboard},
    config::{GeneratorConfig, UiConfig},
    event::events::Event,
    http::{ContentGenerator, GeminiClient},
    mood::Mood,
    ui::{
        layout::AppLayout,
        message::AppMessage,
        state::{CopyTarget, SelectionState},
    },
    util::task::{COPY_RESET_TASK, GENERATION_TASK, TaskManager},
};

use super::{
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub generator: Arc<dyn ContentGenerator>,
    pub clipboard: Box<dyn ClipboardSink>,
    pub state: SelectionState,
    pub config: UiConfig,
    pub task_manager: TaskManager,
    pub viewport: Rect,
    pub has_focus: bool,
    pub should_quit: bool,
    copy_seq: u64,
}

impl App {
    pub async fn new() -> color_eyre::Result<Self> {
        let generator = Arc::new(GeminiClient::new(GeneratorConfig::from_env())?);

        Ok(Self::with_services(
            generator,
            Box::new(SystemClipboard::new()),
            UiConfig::default(),
        ))
    }

    pub fn with_services(
        generator: Arc<dyn ContentGenerator>,
        clipboard: Box<dyn ClipboardSink>,
        config: UiConfig,
    ) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            event_rx,
            event_tx,
            generator,
            clipboard,
            state: SelectionState::default(),
            config,
            task_manager: TaskManager::new(),
            viewport: Rect::default(),
            has_focus: true,
            should_quit: false,
            copy_seq: 0,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?
            .tick_rate(self.config.tick_rate)
            .mouse(true);
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        let mut should_render = true;
        while !self.should_quit {
            if should_render && self.has_focus {
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }

            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        self.viewport = frame.area();
        frame.render_widget(&*self, frame.area());
    }

    pub fn layout(&self) -> AppLayout {
        AppLayout::new(self.viewport)
    }

    pub async fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::SelectMood(mood) => self.state.select_mood(mood),
            AppMessage::NextMood => {
                let mood = self.state.selected_mood.map_or(Mood::ALL[0], |m| m.next());
                self.state.select_mood(mood);
            }
            AppMessage::PreviousMood => {
                let mood = self
                    .state
                    .selected_mood
                    .map_or(Mood::ALL[Mood::ALL.len() - 1], |m| m.previous());
                self.state.select_mood(mood);
            }
            AppMessage::Generate => self.generate(),
            AppMessage::Copy(target) => self.copy(target),
            AppMessage::Reset => {
                if self.state.reset() {
                    self.task_manager.abort(COPY_RESET_TASK);
                }
            }
        }
    }

    fn generate(&mut self) {
        let Some(mood) = self.state.begin_generation() else {
            debug!(phase = ?self.state.phase(), "generate ignored");
            return;
        };
        self.task_manager.abort(COPY_RESET_TASK);

        let generator = self.generator.clone();
        let tx = self.event_tx.clone();

        self.task_manager.spawn(
            GENERATION_TASK,
            tokio::spawn(async move {
                let event = match generator.generate(mood).await {
                    Ok(result) => Event::ContentGenerated(result),
                    Err(e) => Event::GenerationFailed(e.user_message().to_string()),
                };
                let _ = tx.send_async(event).await;
            }),
        );
    }

    fn copy(&mut self, target: CopyTarget) {
        let Some(text) = self.state.text_for(target) else {
            return;
        };
        self.clipboard.write_text(text);
        self.state.mark_copied(target);
        info!(?target, "copied to clipboard");

        self.copy_seq += 1;
        let seq = self.copy_seq;
        let delay = self.config.copy_feedback;
        let tx = self.event_tx.clone();

        self.task_manager.spawn(
            COPY_RESET_TASK,
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send_async(Event::CopyFeedbackExpired(seq)).await;
            }),
        );
    }

    /// Applies the result of a background task.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::ContentGenerated(result) => self.state.finish_generation(Ok(result)),
            Event::GenerationFailed(message) => self.state.finish_generation(Err(message)),
            Event::CopyFeedbackExpired(seq) => {
                if seq == self.copy_seq {
                    self.state.clear_copy_indicator();
                }
            }
        }
    }
}
