#[cfg(feature = "desktop")]
pub mod commands;
pub mod controller;
pub mod generator;
pub mod result;
pub mod state;

pub use controller::{GenerationController, TriggerOutcome};
pub use generator::{DesignGenerator, MockDesignGenerator};
pub use result::{DesignStats, GeneratedResult, SceneParameters};
pub use state::{GenerationState, GenerationStatus};
