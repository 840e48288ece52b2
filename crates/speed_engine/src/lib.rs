//! SPEED engine: HTTP collaborators and effect execution.
mod client;
mod controller;
mod engine;
mod settings;
mod types;

pub use client::{ArticleSource, QueueUpdater, ReqwestClient};
pub use controller::TransitionController;
pub use engine::EngineHandle;
pub use settings::EngineSettings;
pub use types::{EngineError, EngineEvent, FailureKind, FetchError};
