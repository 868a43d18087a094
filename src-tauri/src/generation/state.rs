use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::requirements::HouseRequirements;

use super::result::GeneratedResult;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GenerationStatus {
    Idle,
    Pending,
    Ready,
}

impl Default for GenerationStatus {
    fn default() -> Self {
        GenerationStatus::Idle
    }
}

/// The design page's generation request plus whatever it last produced.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationState {
    pub status: GenerationStatus,
    pub request_id: Option<String>,
    /// Requirements captured when the current request was triggered.
    pub requirements: Option<HouseRequirements>,
    pub requested_at: Option<DateTime<Utc>>,
    /// Latest finished design. Stays visible while a newer request is
    /// pending and is swapped out whole when that request lands.
    pub result: Option<GeneratedResult>,
    pub last_error: Option<String>,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.status == GenerationStatus::Pending
    }

    /// True when `request_id` is the request currently waiting to land.
    pub fn is_awaiting(&self, request_id: &str) -> bool {
        self.is_pending() && self.request_id.as_deref() == Some(request_id)
    }

    pub fn begin(
        &mut self,
        request_id: String,
        requirements: HouseRequirements,
        requested_at: DateTime<Utc>,
    ) {
        self.status = GenerationStatus::Pending;
        self.request_id = Some(request_id);
        self.requirements = Some(requirements);
        self.requested_at = Some(requested_at);
        self.last_error = None;
    }

    pub fn complete(&mut self, result: GeneratedResult) {
        self.status = GenerationStatus::Ready;
        self.result = Some(result);
        self.last_error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.status = GenerationStatus::Idle;
        self.last_error = Some(message);
    }

    /// Drops a pending request without producing anything. Any earlier
    /// result is kept.
    pub fn abandon(&mut self) {
        if !self.is_pending() {
            return;
        }
        self.status = if self.result.is_some() {
            GenerationStatus::Ready
        } else {
            GenerationStatus::Idle
        };
    }
}
