use std::{sync::Arc, time::Duration};

use anyhow::{anyhow, Result};
use chrono::Utc;
use serde::Serialize;
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
    time::{self, Instant},
};
use tokio_util::sync::CancellationToken;

use crate::events::{EventSink, SessionEvent};

use super::{ChatLog, ChatResponder, ChatSnapshot, SUGGESTED_QUESTIONS};

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info, log_warn};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SubmitOutcome {
    #[serde(rename_all = "camelCase")]
    Sent { message_id: u64 },
    /// Blank after trimming; nothing was appended.
    Rejected,
    /// The session has shut down.
    Closed,
}

/// One owed assistant reply, due at a fixed instant.
struct ReplyJob {
    due: Instant,
    prompt: String,
    /// Length of the log once the prompt was appended. The log only grows,
    /// so this prefix is the history the reply answers.
    history_len: usize,
}

struct ReplyWorker {
    jobs: mpsc::UnboundedSender<ReplyJob>,
    handle: JoinHandle<()>,
}

#[derive(Clone)]
pub struct ChatController {
    log: Arc<Mutex<ChatLog>>,
    responder: Arc<dyn ChatResponder>,
    sink: Arc<dyn EventSink>,
    worker: Arc<Mutex<Option<ReplyWorker>>>,
    delay: Duration,
    cancel_token: CancellationToken,
}

impl ChatController {
    pub fn new(
        greeting: impl Into<String>,
        responder: Arc<dyn ChatResponder>,
        sink: Arc<dyn EventSink>,
        delay: Duration,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            log: Arc::new(Mutex::new(ChatLog::new(greeting))),
            responder,
            sink,
            worker: Arc::new(Mutex::new(None)),
            delay,
            cancel_token,
        }
    }

    pub async fn snapshot(&self) -> ChatSnapshot {
        self.log.lock().await.snapshot()
    }

    pub async fn set_input(&self, input: String) -> ChatSnapshot {
        let mut log = self.log.lock().await;
        log.set_input(input);
        let snapshot = log.snapshot();
        self.sink.emit(SessionEvent::ChatUpdated(snapshot.clone()));
        snapshot
    }

    /// Appends a user message and schedules the assistant's reply. Blank
    /// text is rejected without touching the log.
    pub async fn submit(&self, text: impl Into<String>) -> SubmitOutcome {
        let content = text.into();
        if content.trim().is_empty() {
            log_debug!("ignoring blank chat submission");
            return SubmitOutcome::Rejected;
        }

        let mut log = self.log.lock().await;
        if self.cancel_token.is_cancelled() {
            log_warn!("chat submission after session shutdown");
            return SubmitOutcome::Closed;
        }

        let message_id = log.open_turn(content.clone(), Utc::now());
        let job = ReplyJob {
            due: Instant::now() + self.delay,
            prompt: content,
            history_len: log.messages().len(),
        };
        self.enqueue(job).await;
        self.sink.emit(SessionEvent::ChatUpdated(log.snapshot()));

        log_info!(
            "chat message {} sent; reply due in {}ms",
            message_id,
            self.delay.as_millis()
        );
        SubmitOutcome::Sent { message_id }
    }

    /// Submits whatever is in the draft buffer.
    pub async fn submit_input(&self) -> SubmitOutcome {
        let draft = self.log.lock().await.input().to_string();
        self.submit(draft).await
    }

    pub async fn submit_suggestion(&self, index: usize) -> Result<SubmitOutcome> {
        let question = SUGGESTED_QUESTIONS
            .get(index)
            .ok_or_else(|| anyhow!("no suggested question at index {index}"))?;
        Ok(self.submit(*question).await)
    }

    async fn enqueue(&self, job: ReplyJob) {
        let mut worker = self.worker.lock().await;

        let job = match worker.as_ref() {
            Some(active) => match active.jobs.send(job) {
                Ok(()) => return,
                Err(mpsc::error::SendError(job)) => job,
            },
            None => job,
        };

        let (jobs, rx) = mpsc::unbounded_channel();
        // The receiver is alive until the worker below exits.
        let _ = jobs.send(job);
        let handle = tokio::spawn(reply_loop(
            self.log.clone(),
            self.responder.clone(),
            self.sink.clone(),
            rx,
            self.cancel_token.clone(),
        ));
        *worker = Some(ReplyWorker { jobs, handle });
    }

    /// Drops every owed reply and stops the worker.
    pub async fn shutdown(&self) {
        self.cancel_token.cancel();
        if let Some(worker) = self.worker.lock().await.take() {
            worker.handle.abort();
        }

        let mut log = self.log.lock().await;
        if log.is_typing() {
            log_info!("discarding pending chat replies");
        }
        log.drop_pending();
    }
}

/// Delivers replies strictly in the order their turns were opened.
async fn reply_loop(
    log: Arc<Mutex<ChatLog>>,
    responder: Arc<dyn ChatResponder>,
    sink: Arc<dyn EventSink>,
    mut jobs: mpsc::UnboundedReceiver<ReplyJob>,
    cancel_token: CancellationToken,
) {
    loop {
        let job = tokio::select! {
            job = jobs.recv() => match job {
                Some(job) => job,
                None => break,
            },
            _ = cancel_token.cancelled() => break,
        };

        tokio::select! {
            _ = time::sleep_until(job.due) => {}
            _ = cancel_token.cancelled() => break,
        }

        let mut guard = log.lock().await;
        if cancel_token.is_cancelled() {
            break;
        }
        let history = &guard.messages()[..job.history_len];
        let reply = responder.reply(&job.prompt, history);
        let reply_id = guard.close_turn(reply, Utc::now());
        sink.emit(SessionEvent::ChatUpdated(guard.snapshot()));
        log_debug!("assistant reply {} appended", reply_id);
    }

    log_debug!("chat reply worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chat::{ChatMessage, ChatRole, ScriptedResponder, SCRIPTED_REPLY},
        events::testing::RecordingSink,
    };

    const DELAY: Duration = Duration::from_millis(1500);

    fn controller(sink: Arc<RecordingSink>) -> ChatController {
        ChatController::new(
            "Hello!",
            Arc::new(ScriptedResponder::default()),
            sink,
            DELAY,
            CancellationToken::new(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn blank_submissions_change_nothing() {
        let sink = Arc::new(RecordingSink::default());
        let chat = controller(sink.clone());

        assert_eq!(chat.submit("").await, SubmitOutcome::Rejected);
        assert_eq!(chat.submit("   ").await, SubmitOutcome::Rejected);
        assert_eq!(chat.submit("\n\t").await, SubmitOutcome::Rejected);

        time::sleep(DELAY * 2).await;
        let snapshot = chat.snapshot().await;
        assert!(snapshot.messages.is_empty());
        assert!(!snapshot.typing);
        assert!(sink.events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn sequential_turns_alternate_with_consecutive_ids() {
        let sink = Arc::new(RecordingSink::default());
        let chat = controller(sink);

        for i in 0..3 {
            let outcome = chat.submit(format!("question {i}")).await;
            assert_eq!(
                outcome,
                SubmitOutcome::Sent {
                    message_id: 2 * i + 1
                }
            );
            time::sleep(DELAY + Duration::from_millis(10)).await;
        }

        let snapshot = chat.snapshot().await;
        let ids: Vec<u64> = snapshot.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        for (index, message) in snapshot.messages.iter().enumerate() {
            let expected = if index % 2 == 0 {
                ChatRole::User
            } else {
                ChatRole::Assistant
            };
            assert_eq!(message.role, expected);
        }
        assert_eq!(snapshot.messages[1].content, SCRIPTED_REPLY);
        assert!(!snapshot.typing);
    }

    #[tokio::test(start_paused = true)]
    async fn typing_covers_exactly_the_reply_delay() {
        let sink = Arc::new(RecordingSink::default());
        let chat = controller(sink);

        chat.set_input("draft".into()).await;
        chat.submit("How big can the garage be?").await;
        let snapshot = chat.snapshot().await;
        assert!(snapshot.typing);
        assert_eq!(snapshot.input, "");
        assert_eq!(snapshot.messages.len(), 1);

        time::sleep(DELAY - Duration::from_millis(1)).await;
        assert!(chat.snapshot().await.typing);

        time::sleep(Duration::from_millis(2)).await;
        let snapshot = chat.snapshot().await;
        assert!(!snapshot.typing);
        assert_eq!(snapshot.messages.len(), 2);
        assert_eq!(snapshot.messages[1].role, ChatRole::Assistant);
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_turns_keep_ids_strictly_increasing() {
        let sink = Arc::new(RecordingSink::default());
        let chat = controller(sink);

        chat.submit("first").await;
        time::sleep(Duration::from_millis(500)).await;
        chat.submit("second").await;

        time::sleep(Duration::from_millis(1_001)).await;
        let snapshot = chat.snapshot().await;
        let ids: Vec<u64> = snapshot.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(snapshot.messages[2].role, ChatRole::Assistant);
        assert!(snapshot.typing, "second reply still owed");

        time::sleep(Duration::from_millis(500)).await;
        let snapshot = chat.snapshot().await;
        let roles: Vec<ChatRole> = snapshot.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::User,
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::Assistant
            ]
        );
        assert_eq!(snapshot.messages[3].id, 4);
        assert!(!snapshot.typing);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_input_and_suggestions() {
        let sink = Arc::new(RecordingSink::default());
        let chat = controller(sink);

        chat.set_input("   ".into()).await;
        assert_eq!(chat.submit_input().await, SubmitOutcome::Rejected);

        chat.set_input("Can I add a pool?".into()).await;
        assert_eq!(
            chat.submit_input().await,
            SubmitOutcome::Sent { message_id: 1 }
        );

        let outcome = chat.submit_suggestion(1).await.expect("index in range");
        assert_eq!(outcome, SubmitOutcome::Sent { message_id: 2 });
        assert!(chat.submit_suggestion(SUGGESTED_QUESTIONS.len()).await.is_err());

        let snapshot = chat.snapshot().await;
        assert_eq!(snapshot.messages[0].content, "Can I add a pool?");
        assert_eq!(snapshot.messages[1].content, SUGGESTED_QUESTIONS[1]);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_drops_owed_replies() {
        let sink = Arc::new(RecordingSink::default());
        let chat = controller(sink.clone());

        chat.submit("hello").await;
        sink.clear();
        chat.shutdown().await;

        time::sleep(DELAY * 2).await;
        let snapshot = chat.snapshot().await;
        assert_eq!(snapshot.messages.len(), 1);
        assert!(!snapshot.typing);
        assert!(sink.events().is_empty());
        assert_eq!(chat.submit("again").await, SubmitOutcome::Closed);
    }

    /// Echoes what it was shown so tests can check the history it received.
    struct HistoryEcho;

    impl ChatResponder for HistoryEcho {
        fn reply(&self, prompt: &str, history: &[ChatMessage]) -> String {
            let last = history.last().map(|m| m.content.as_str()).unwrap_or("");
            format!("{prompt}|{}|{last}", history.len())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn replies_see_the_log_as_of_their_prompt() {
        let sink = Arc::new(RecordingSink::default());
        let chat = ChatController::new(
            "Hello!",
            Arc::new(HistoryEcho),
            sink,
            DELAY,
            CancellationToken::new(),
        );

        chat.submit("first").await;
        time::sleep(Duration::from_millis(500)).await;
        chat.submit("second").await;
        time::sleep(DELAY * 2).await;

        let snapshot = chat.snapshot().await;
        let contents: Vec<&str> = snapshot.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["first", "second", "first|1|first", "second|2|second"]
        );
    }
}
