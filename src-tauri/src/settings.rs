use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

use crate::chat::DEFAULT_GREETING;

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

/// Knobs for the simulated backend. Read once at startup; a missing or
/// unreadable `settings.json` falls back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationSettings {
    pub generation_delay_ms: u64,
    pub reply_delay_ms: u64,
    pub greeting: String,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            generation_delay_ms: 3_000,
            reply_delay_ms: 1_500,
            greeting: DEFAULT_GREETING.into(),
        }
    }
}

impl SimulationSettings {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log_info!("no settings at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        match serde_json::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                log_warn!(
                    "ignoring malformed settings at {}: {err}",
                    path.display()
                );
                Ok(Self::default())
            }
        }
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = SimulationSettings::load(&dir.path().join("settings.json")).expect("load");
        assert_eq!(settings, SimulationSettings::default());
        assert_eq!(settings.generation_delay(), Duration::from_millis(3_000));
        assert_eq!(settings.reply_delay(), Duration::from_millis(1_500));
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "replyDelayMs": 250 }"#).expect("write");

        let settings = SimulationSettings::load(&path).expect("load");
        assert_eq!(settings.reply_delay_ms, 250);
        assert_eq!(settings.generation_delay_ms, 3_000);
        assert_eq!(settings.greeting, DEFAULT_GREETING);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").expect("write");

        let settings = SimulationSettings::load(&path).expect("load");
        assert_eq!(settings, SimulationSettings::default());
    }
}
