use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use tokio::sync::{watch, Mutex, RwLock, RwLockReadGuard};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::{
    chat::{ChatController, ChatResponder, ChatSnapshot, ScriptedResponder, SubmitOutcome},
    events::{EventSink, Notification, SessionEvent},
    generation::{
        DesignGenerator, GenerationController, GenerationState, MockDesignGenerator,
        TriggerOutcome,
    },
    report::{self, ExportFormat, ReportOverview},
    requirements::{FieldUpdate, HouseRequirements, RequirementUpdate, RequirementsModel},
    settings::SimulationSettings,
};

const ENABLE_LOGS: bool = true;

use crate::log_info;

/// One window's worth of state: the design form, its generation request and
/// the assistant conversation. Dropping the session cancels every scheduled
/// completion it owns.
pub struct DesignSession {
    id: String,
    started_at: DateTime<Utc>,
    requirements: Mutex<RequirementsModel>,
    generation: GenerationController,
    chat: ChatController,
    sink: Arc<dyn EventSink>,
    cancel_token: CancellationToken,
}

impl DesignSession {
    /// A session backed by the canned generator and responder.
    pub fn new(settings: &SimulationSettings, sink: Arc<dyn EventSink>) -> Self {
        Self::with_backends(
            settings,
            sink,
            Arc::new(MockDesignGenerator),
            Arc::new(ScriptedResponder::default()),
        )
    }

    pub fn with_backends(
        settings: &SimulationSettings,
        sink: Arc<dyn EventSink>,
        generator: Arc<dyn DesignGenerator>,
        responder: Arc<dyn ChatResponder>,
    ) -> Self {
        let cancel_token = CancellationToken::new();
        let id = Uuid::new_v4().to_string();
        log_info!("design session {} started", id);

        Self {
            generation: GenerationController::new(
                generator,
                sink.clone(),
                settings.generation_delay(),
                cancel_token.clone(),
            ),
            chat: ChatController::new(
                settings.greeting.clone(),
                responder,
                sink.clone(),
                settings.reply_delay(),
                cancel_token.clone(),
            ),
            id,
            started_at: Utc::now(),
            requirements: Mutex::new(RequirementsModel::new()),
            sink,
            cancel_token,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub async fn requirements(&self) -> HouseRequirements {
        self.requirements.lock().await.get()
    }

    pub async fn update_requirement(&self, update: RequirementUpdate) -> FieldUpdate {
        // Emit under the lock so snapshots leave in the order they were made.
        let mut model = self.requirements.lock().await;
        let result = model.set(update);
        self.sink
            .emit(SessionEvent::RequirementsChanged(result.requirements.clone()));
        result
    }

    pub async fn reset_requirements(&self) -> HouseRequirements {
        let mut model = self.requirements.lock().await;
        let snapshot = model.reset();
        self.sink
            .emit(SessionEvent::RequirementsChanged(snapshot.clone()));
        snapshot
    }

    /// Snapshots the current requirements and hands them to the generator.
    pub async fn generate(&self) -> TriggerOutcome {
        let snapshot = self.requirements().await;
        self.generation.trigger(snapshot).await
    }

    pub async fn generation_state(&self) -> GenerationState {
        self.generation.get_state().await
    }

    pub fn subscribe_generation(&self) -> watch::Receiver<GenerationState> {
        self.generation.subscribe()
    }

    pub async fn chat(&self) -> ChatSnapshot {
        self.chat.snapshot().await
    }

    pub async fn set_chat_input(&self, input: String) -> ChatSnapshot {
        self.chat.set_input(input).await
    }

    pub async fn send_chat_message(&self, text: String) -> SubmitOutcome {
        self.chat.submit(text).await
    }

    pub async fn send_chat_input(&self) -> SubmitOutcome {
        self.chat.submit_input().await
    }

    pub async fn send_suggested_question(&self, index: usize) -> Result<SubmitOutcome> {
        self.chat.submit_suggestion(index).await
    }

    pub async fn report_overview(&self) -> ReportOverview {
        let style = self.requirements.lock().await.get().style;
        ReportOverview::new(style, Utc::now())
    }

    /// Refused until a design has been generated.
    pub async fn download_design_report(&self) -> Result<()> {
        if self.generation_state().await.result.is_none() {
            return Err(anyhow!("no design has been generated yet"));
        }
        self.notify(report::design_report_downloaded());
        Ok(())
    }

    pub fn download_report(&self, format: ExportFormat) {
        self.notify(report::report_downloaded(format));
    }

    pub fn share_report(&self) {
        self.notify(report::report_shared());
    }

    pub fn print_report(&self) {
        self.notify(report::print_dialog_opened());
    }

    pub fn apply_optimizations(&self) {
        self.notify(report::optimizations_applied());
    }

    pub fn export_cost_report(&self) {
        self.notify(report::cost_report_exported());
    }

    fn notify(&self, notification: Notification) {
        self.sink.emit(SessionEvent::Notification(notification));
    }

    pub fn is_closed(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Cancels outstanding completions and settles their state. Idempotent.
    pub async fn shutdown(&self) {
        self.cancel_token.cancel();
        self.generation.shutdown().await;
        self.chat.shutdown().await;
        log_info!("design session {} closed", self.id);
    }
}

impl Drop for DesignSession {
    fn drop(&mut self) {
        // Scheduled tasks watch this token and exit without touching state.
        self.cancel_token.cancel();
    }
}

/// Owns the live session for an app window and replaces it on reset. Every
/// session it creates shares one sink.
pub struct SessionHost {
    session: RwLock<DesignSession>,
    settings: SimulationSettings,
    sink: Arc<dyn EventSink>,
}

impl SessionHost {
    pub fn new(settings: SimulationSettings, sink: Arc<dyn EventSink>) -> Self {
        Self {
            session: RwLock::new(DesignSession::new(&settings, sink.clone())),
            settings,
            sink,
        }
    }

    pub async fn session(&self) -> RwLockReadGuard<'_, DesignSession> {
        self.session.read().await
    }

    /// Shuts the current session down, then swaps in a fresh one. Returns
    /// the new session id.
    pub async fn reset(&self) -> String {
        let mut guard = self.session.write().await;
        // Nothing from the old session may reach the sink after the swap.
        guard.shutdown().await;
        let fresh = DesignSession::new(&self.settings, self.sink.clone());
        let id = fresh.id().to_string();
        *guard = fresh;
        id
    }
}
