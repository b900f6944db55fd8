use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use mood2music::{
    clipboard::ClipboardSink,
    config::{GeneratorConfig, UiConfig},
    http::{ContentGenerator, GENERATION_FAILED, GeminiClient, GenerationError, GenerationResult},
    mood::Mood,
    ui::{
        app::App,
        message::AppMessage,
        state::{CopyTarget, Phase},
        util::handler::EventHandler,
    },
};
use tokio::{sync::Notify, time::Instant};

const COPY_FEEDBACK: Duration = Duration::from_secs(2);

#[derive(Default)]
struct ScriptedGenerator {
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
    fail: bool,
}

impl ScriptedGenerator {
    fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn generate(&self, mood: Mood) -> Result<GenerationResult, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.fail {
            Err(GenerationError::MalformedResponse(
                "upstream said: quota exceeded for key sk-123".to_string(),
            ))
        } else {
            Ok(GenerationResult {
                prompt: format!("prompt for {mood}"),
                lyrics: format!("lyrics for {mood}"),
            })
        }
    }
}

#[derive(Clone, Default)]
struct RecordingClipboard(Arc<Mutex<Vec<String>>>);

impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) {
        self.0.lock().unwrap().push(text.to_string());
    }
}

fn app_with(generator: Arc<dyn ContentGenerator>) -> (App, RecordingClipboard) {
    let clipboard = RecordingClipboard::default();
    let config = UiConfig {
        copy_feedback: COPY_FEEDBACK,
        ..UiConfig::default()
    };
    (
        App::with_services(generator, Box::new(clipboard.clone()), config),
        clipboard,
    )
}

/// Waits for the next background event and applies it.
async fn settle(app: &mut App) {
    let evt = app.event_rx.recv_async().await.unwrap();
    EventHandler::handle_action(app, evt);
}

async fn let_tasks_run() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

fn with_result(app: &mut App) {
    app.state.select_mood(Mood::Calm);
    app.state.begin_generation();
    app.state.finish_generation(Ok(GenerationResult {
        prompt: "P".to_string(),
        lyrics: "L".to_string(),
    }));
}

#[tokio::test]
async fn every_mood_resolves_to_completed() {
    let generator = Arc::new(ScriptedGenerator::default());
    let (mut app, _) = app_with(generator.clone());

    for mood in Mood::ALL {
        app.update(AppMessage::SelectMood(mood)).await;
        app.update(AppMessage::Generate).await;
        assert_eq!(app.state.phase(), Phase::Generating);

        settle(&mut app).await;
        assert_eq!(app.state.phase(), Phase::Completed);
        assert!(!app.state.is_generating);

        let result = app.state.last_result.clone().unwrap();
        assert_eq!(result.prompt, format!("prompt for {mood}"));
        assert_eq!(app.state.generated_for, Some(mood));
        assert!(app.state.last_error.is_none());
    }
    assert_eq!(generator.calls(), Mood::ALL.len());
}

#[tokio::test]
async fn every_mood_resolves_to_failed_without_leaking_the_cause() {
    let (mut app, _) = app_with(Arc::new(ScriptedGenerator::failing()));

    for mood in Mood::ALL {
        app.update(AppMessage::SelectMood(mood)).await;
        app.update(AppMessage::Generate).await;
        settle(&mut app).await;

        assert_eq!(app.state.phase(), Phase::Failed);
        assert!(!app.state.is_generating);
        assert!(app.state.last_result.is_none());

        let error = app.state.last_error.clone().unwrap();
        assert_eq!(error, GENERATION_FAILED);
        assert!(!error.contains("sk-123"));
    }
}

#[tokio::test]
async fn generate_without_mood_does_nothing() {
    let generator = Arc::new(ScriptedGenerator::default());
    let (mut app, _) = app_with(generator.clone());
    let before = app.state.clone();

    app.update(AppMessage::Generate).await;
    let_tasks_run().await;

    assert_eq!(app.state, before);
    assert_eq!(generator.calls(), 0);
    assert!(app.event_rx.try_recv().is_err());
}

#[tokio::test]
async fn second_generate_while_in_flight_is_ignored() {
    let gate = Arc::new(Notify::new());
    let generator = Arc::new(ScriptedGenerator::gated(gate.clone()));
    let (mut app, _) = app_with(generator.clone());

    app.update(AppMessage::SelectMood(Mood::Sad)).await;
    app.update(AppMessage::Generate).await;
    let_tasks_run().await;

    let in_flight = app.state.clone();
    app.update(AppMessage::Generate).await;
    let_tasks_run().await;
    assert_eq!(app.state, in_flight);
    assert_eq!(generator.calls(), 1);

    gate.notify_one();
    settle(&mut app).await;
    assert_eq!(app.state.phase(), Phase::Completed);

    let_tasks_run().await;
    assert!(app.event_rx.try_recv().is_err());
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn mood_can_change_while_generating() {
    let gate = Arc::new(Notify::new());
    let (mut app, _) = app_with(Arc::new(ScriptedGenerator::gated(gate.clone())));

    app.update(AppMessage::SelectMood(Mood::Sad)).await;
    app.update(AppMessage::Generate).await;
    app.update(AppMessage::NextMood).await;

    assert_eq!(app.state.selected_mood, Some(Mood::Energetic));
    assert!(app.state.is_generating);

    gate.notify_one();
    settle(&mut app).await;
    assert_eq!(app.state.generated_for, Some(Mood::Sad));
    assert_eq!(app.state.last_result.as_ref().unwrap().prompt, "prompt for sad");
}

#[tokio::test]
async fn new_generation_clears_previous_outcome_before_resolving() {
    let gate = Arc::new(Notify::new());
    let (mut app, _) = app_with(Arc::new(ScriptedGenerator::gated(gate.clone())));

    app.update(AppMessage::SelectMood(Mood::Calm)).await;
    app.update(AppMessage::Generate).await;
    gate.notify_one();
    settle(&mut app).await;
    assert!(app.state.last_result.is_some());

    app.update(AppMessage::Generate).await;
    assert!(app.state.is_generating);
    assert!(app.state.last_result.is_none());
    assert!(app.state.last_error.is_none());

    gate.notify_one();
    settle(&mut app).await;
    assert_eq!(app.state.phase(), Phase::Completed);
}

#[tokio::test]
async fn unreachable_service_surfaces_generic_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::new(
        GeneratorConfig::new("test-key").with_endpoint(format!("http://{addr}/v1beta")),
    )
    .unwrap();
    let (mut app, _) = app_with(Arc::new(client));

    app.update(AppMessage::SelectMood(Mood::Mysterious)).await;
    app.update(AppMessage::Generate).await;
    settle(&mut app).await;

    assert!(app.state.last_result.is_none());
    let error = app.state.last_error.clone().unwrap();
    assert!(!error.is_empty());
    assert_eq!(error, GENERATION_FAILED);
    assert!(!error.contains(&addr.to_string()));
}

#[tokio::test(start_paused = true)]
async fn copy_indicator_resets_after_delay() {
    let (mut app, clipboard) = app_with(Arc::new(ScriptedGenerator::default()));
    with_result(&mut app);

    let start = Instant::now();
    app.update(AppMessage::Copy(CopyTarget::Prompt)).await;
    assert_eq!(app.state.copy_indicator, Some(CopyTarget::Prompt));
    assert_eq!(*clipboard.0.lock().unwrap(), vec!["P".to_string()]);

    settle(&mut app).await;
    let elapsed = start.elapsed();
    assert!(elapsed >= COPY_FEEDBACK, "reset after {elapsed:?}");
    assert!(elapsed < COPY_FEEDBACK + Duration::from_millis(50));
    assert_eq!(app.state.copy_indicator, None);

    tokio::time::sleep(COPY_FEEDBACK * 2).await;
    assert!(app.event_rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn overlapping_copies_reset_once_from_the_last_copy() {
    let (mut app, clipboard) = app_with(Arc::new(ScriptedGenerator::default()));
    with_result(&mut app);

    app.update(AppMessage::Copy(CopyTarget::Prompt)).await;
    let_tasks_run().await;
    tokio::time::sleep(Duration::from_secs(1)).await;

    let second = Instant::now();
    app.update(AppMessage::Copy(CopyTarget::Lyrics)).await;
    assert_eq!(app.state.copy_indicator, Some(CopyTarget::Lyrics));

    settle(&mut app).await;
    let elapsed = second.elapsed();
    assert!(elapsed >= COPY_FEEDBACK, "reset after {elapsed:?}");
    assert!(elapsed < COPY_FEEDBACK + Duration::from_millis(50));
    assert_eq!(app.state.copy_indicator, None);

    tokio::time::sleep(COPY_FEEDBACK * 2).await;
    assert!(app.event_rx.try_recv().is_err());
    assert_eq!(
        *clipboard.0.lock().unwrap(),
        vec!["P".to_string(), "L".to_string()]
    );
}

#[tokio::test]
async fn copy_without_result_is_ignored() {
    let (mut app, clipboard) = app_with(Arc::new(ScriptedGenerator::default()));
    app.update(AppMessage::SelectMood(Mood::Calm)).await;

    app.update(AppMessage::Copy(CopyTarget::Lyrics)).await;
    let_tasks_run().await;

    assert_eq!(app.state.copy_indicator, None);
    assert!(clipboard.0.lock().unwrap().is_empty());
    assert!(app.event_rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn reset_discards_everything() {
    let (mut app, _) = app_with(Arc::new(ScriptedGenerator::default()));
    with_result(&mut app);
    app.update(AppMessage::Copy(CopyTarget::Prompt)).await;

    app.update(AppMessage::Reset).await;
    assert_eq!(app.state.phase(), Phase::Idle);
    assert_eq!(app.state.copy_indicator, None);

    tokio::time::sleep(COPY_FEEDBACK * 2).await;
    assert!(app.event_rx.try_recv().is_err());
}

#[tokio::test]
async fn keyboard_navigation_starts_at_the_catalog_edges() {
    let (mut app, _) = app_with(Arc::new(ScriptedGenerator::default()));

    app.update(AppMessage::NextMood).await;
    assert_eq!(app.state.selected_mood, Some(Mood::Enthusiastic));

    app.state = Default::default();
    app.update(AppMessage::PreviousMood).await;
    assert_eq!(app.state.selected_mood, Some(Mood::Mysterious));

    app.update(AppMessage::Quit).await;
    assert!(app.should_quit);
}
