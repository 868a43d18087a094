use std::{sync::Arc, time::Duration};

use chrono::Utc;
use serde::Serialize;
use tokio::{
    sync::{watch, Mutex},
    task::JoinHandle,
    time,
};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::{
    events::{EventSink, Notification, SessionEvent},
    requirements::HouseRequirements,
};

use super::{DesignGenerator, GenerationState};

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_error, log_info, log_warn};

/// What a call to [`GenerationController::trigger`] did.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum TriggerOutcome {
    #[serde(rename_all = "camelCase")]
    Started { request_id: String },
    /// A request was already pending; nothing changed.
    Ignored,
    /// The session has shut down.
    Closed,
}

#[derive(Clone)]
pub struct GenerationController {
    state: Arc<Mutex<GenerationState>>,
    updates: Arc<watch::Sender<GenerationState>>,
    generator: Arc<dyn DesignGenerator>,
    sink: Arc<dyn EventSink>,
    task: Arc<Mutex<Option<JoinHandle<()>>>>,
    delay: Duration,
    cancel_token: CancellationToken,
}

impl GenerationController {
    pub fn new(
        generator: Arc<dyn DesignGenerator>,
        sink: Arc<dyn EventSink>,
        delay: Duration,
        cancel_token: CancellationToken,
    ) -> Self {
        let (updates, _) = watch::channel(GenerationState::new());

        Self {
            state: Arc::new(Mutex::new(GenerationState::new())),
            updates: Arc::new(updates),
            generator,
            sink,
            task: Arc::new(Mutex::new(None)),
            delay,
            cancel_token,
        }
    }

    pub async fn get_state(&self) -> GenerationState {
        self.state.lock().await.clone()
    }

    /// Every transition is published here, including ones made by the
    /// scheduled completion.
    pub fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.updates.subscribe()
    }

    /// Starts a generation from `requirements` unless one is already pending.
    /// Returns immediately; the result lands after the configured delay.
    pub async fn trigger(&self, requirements: HouseRequirements) -> TriggerOutcome {
        // The completion is spawned before the state lock is released, so a
        // concurrent `shutdown` either sees no request or abandons this one
        // after `Started` is decided.
        let mut state = self.state.lock().await;
        if self.cancel_token.is_cancelled() {
            log_warn!("generation requested after session shutdown");
            return TriggerOutcome::Closed;
        }
        if state.is_pending() {
            log_debug!(
                "generation already pending ({:?}); ignoring trigger",
                state.request_id
            );
            return TriggerOutcome::Ignored;
        }

        let request_id = Uuid::new_v4().to_string();
        state.begin(request_id.clone(), requirements.clone(), Utc::now());
        publish(&self.updates, self.sink.as_ref(), &state);

        log_info!(
            "generation {} scheduled in {}ms",
            request_id,
            self.delay.as_millis()
        );
        self.spawn_completion(request_id.clone(), requirements).await;

        TriggerOutcome::Started { request_id }
    }

    async fn spawn_completion(&self, request_id: String, requirements: HouseRequirements) {
        let mut task_guard = self.task.lock().await;
        if let Some(previous) = task_guard.take() {
            // Only a finished task can be sitting here; a pending one would
            // have made `trigger` bail out.
            previous.abort();
        }

        let state = self.state.clone();
        let updates = self.updates.clone();
        let generator = self.generator.clone();
        let sink = self.sink.clone();
        let delay = self.delay;
        let cancel_token = self.cancel_token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = time::sleep(delay) => {}
                _ = cancel_token.cancelled() => {
                    log_debug!("generation {} cancelled before completion", request_id);
                    return;
                }
            }

            let mut guard = state.lock().await;
            if cancel_token.is_cancelled() || !guard.is_awaiting(&request_id) {
                log_debug!("dropping stale completion for {}", request_id);
                return;
            }

            match generator.generate(&request_id, &requirements) {
                Ok(result) => {
                    guard.complete(result);
                    publish(&updates, sink.as_ref(), &guard);
                    sink.emit(SessionEvent::Notification(Notification::new(
                        "Design Generated Successfully!",
                        "Your AI-powered house design is ready.",
                    )));
                    log_info!("generation {} ready", request_id);
                }
                Err(err) => {
                    log_error!("generation {} failed: {err:#}", request_id);
                    guard.fail(format!("{err:#}"));
                    publish(&updates, sink.as_ref(), &guard);
                    sink.emit(SessionEvent::Notification(Notification::new(
                        "Design Generation Failed",
                        format!("{err:#}"),
                    )));
                }
            }
        });

        *task_guard = Some(handle);
    }

    /// Stops the scheduled completion, if any. The caller is expected to have
    /// cancelled the shared token already; this also covers a completion that
    /// has not yet observed it.
    pub async fn shutdown(&self) {
        self.cancel_token.cancel();
        if let Some(handle) = self.task.lock().await.take() {
            handle.abort();
        }

        let mut state = self.state.lock().await;
        if state.is_pending() {
            log_info!("abandoning pending generation {:?}", state.request_id);
            state.abandon();
            self.updates.send_replace(state.clone());
        }
    }
}

fn publish(
    updates: &watch::Sender<GenerationState>,
    sink: &dyn EventSink,
    state: &GenerationState,
) {
    updates.send_replace(state.clone());
    sink.emit(SessionEvent::GenerationChanged(state.clone()));
}
