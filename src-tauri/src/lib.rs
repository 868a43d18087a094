mod utils;

pub mod chat;
pub mod events;
pub mod generation;
pub mod projection;
pub mod report;
pub mod requirements;
pub mod session;
pub mod settings;

#[cfg(feature = "desktop")]
mod desktop;

#[cfg(feature = "desktop")]
pub use desktop::run;
pub use events::{EventSink, LogSink, Notification, SessionEvent};
pub use session::{DesignSession, SessionHost};
pub use settings::SimulationSettings;
pub use utils::init_logging;
