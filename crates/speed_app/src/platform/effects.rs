use speed_core::{Effect, Msg};
use speed_engine::{EngineError, EngineEvent, EngineHandle, EngineSettings};
use speed_logging::{speed_info, speed_warn};

/// Executes effects on the engine and turns its events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        speed_info!("Using SPEED service at {}", settings.base_url);
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        self.engine.run(effects);
    }

    /// Collects every event that has arrived since the last call.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ArticlesLoaded(Ok(articles)) => {
            speed_info!("Received {} articles", articles.len());
            Msg::ArticlesLoaded(articles)
        }
        EngineEvent::ArticlesLoaded(Err(err)) => Msg::LoadFailed(err.to_string()),
        EngineEvent::TransitionSettled { update, result } => {
            if let Err(err) = &result {
                speed_warn!("Update of article {} failed: {}", update.article_id, err);
            }
            Msg::TransitionSettled { update, result }
        }
    }
}
