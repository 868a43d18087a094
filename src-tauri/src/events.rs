use serde::Serialize;

use crate::{chat::ChatSnapshot, generation::GenerationState, requirements::HouseRequirements};

// Set to true to trace every outgoing event
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

/// Toast shown by the webview. Delivery is best effort.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Everything the session pushes out: a fresh snapshot after each
/// transition, or a toast. Serializes as the bare payload so the event name
/// alone tells the webview what it is holding.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SessionEvent {
    RequirementsChanged(HouseRequirements),
    GenerationChanged(GenerationState),
    ChatUpdated(ChatSnapshot),
    Notification(Notification),
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::RequirementsChanged(_) => "requirements-changed",
            SessionEvent::GenerationChanged(_) => "generation-changed",
            SessionEvent::ChatUpdated(_) => "chat-updated",
            SessionEvent::Notification(_) => "notification",
        }
    }
}

/// Receiver for session output. Implementations must not block; the
/// session calls `emit` while holding its own state locks.
pub trait EventSink: Send + Sync + 'static {
    fn emit(&self, event: SessionEvent);
}

/// Sink that only writes to the log. Used when no webview is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: SessionEvent) {
        match &event {
            SessionEvent::Notification(notification) => {
                log_info!("{}: {}", notification.title, notification.description);
            }
            other => {
                log_debug!("{} emitted", other.name());
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Captures events in order so tests can assert on them.
    #[derive(Default)]
    pub struct RecordingSink {
        events: Mutex<Vec<SessionEvent>>,
    }

    impl RecordingSink {
        pub fn events(&self) -> Vec<SessionEvent> {
            self.events.lock().unwrap().clone()
        }

        pub fn names(&self) -> Vec<&'static str> {
            self.events().iter().map(SessionEvent::name).collect()
        }

        pub fn notifications(&self) -> Vec<Notification> {
            self.events()
                .into_iter()
                .filter_map(|event| match event {
                    SessionEvent::Notification(notification) => Some(notification),
                    _ => None,
                })
                .collect()
        }

        pub fn clear(&self) {
            self.events.lock().unwrap().clear();
        }
    }

    impl EventSink for RecordingSink {
        fn emit(&self, event: SessionEvent) {
            self.events.lock().unwrap().push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_match_webview_listeners() {
        let toast = SessionEvent::Notification(Notification::new("a", "b"));
        assert_eq!(toast.name(), "notification");
        let requirements = SessionEvent::RequirementsChanged(HouseRequirements::default());
        assert_eq!(requirements.name(), "requirements-changed");
    }

    #[test]
    fn log_sink_accepts_every_event() {
        let sink: &dyn EventSink = &LogSink;
        sink.emit(SessionEvent::Notification(Notification::new("Report Shared", "ok")));
        sink.emit(SessionEvent::GenerationChanged(GenerationState::default()));
    }

    #[test]
    fn events_serialize_as_bare_payload() {
        let toast = SessionEvent::Notification(Notification::new("Report Shared", "copied"));
        let value = serde_json::to_value(&toast).expect("serialize");
        assert_eq!(value["title"], "Report Shared");
        assert_eq!(value["description"], "copied");

        let requirements = SessionEvent::RequirementsChanged(HouseRequirements::default());
        let value = serde_json::to_value(&requirements).expect("serialize");
        assert_eq!(value["sqft"], 2000);
        assert_eq!(value["style"], "modern");
    }
}
