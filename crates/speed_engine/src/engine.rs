use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use speed_core::{Effect, QueueUpdate, TransitionError};
use speed_logging::{speed_debug, speed_info, speed_warn};
use tokio_util::sync::CancellationToken;

use crate::{
    ArticleSource, EngineError, EngineEvent, EngineSettings, FailureKind, FetchError,
    QueueUpdater, ReqwestClient,
};

#[derive(Clone)]
enum EngineCommand {
    LoadArticles,
    SendQueueUpdate(QueueUpdate),
}

/// Runs effects on a background tokio runtime and reports back as events.
///
/// Dropping the handle cancels every outstanding request.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        let client = Arc::new(ReqwestClient::new(settings).map_err(EngineError::Client)?);
        Self::with_backends(client.clone(), client)
    }

    pub fn with_backends(
        updater: Arc<dyn QueueUpdater>,
        source: Arc<dyn ArticleSource>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let updater = updater.clone();
                let source = source.clone();
                let event_tx = event_tx.clone();
                let cancel = worker_cancel.clone();
                runtime.spawn(async move {
                    let event = tokio::select! {
                        event = handle_command(updater.as_ref(), source.as_ref(), &command) => event,
                        _ = cancel.cancelled() => cancelled_event(&command),
                    };
                    let _ = event_tx.send(event);
                });
            }
            speed_debug!("Engine command channel closed; shutting down runtime");
            runtime.shutdown_background();
        });

        Ok(Self {
            cmd_tx,
            event_rx,
            cancel,
        })
    }

    /// Hands every effect to the background runtime.
    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            let command = match effect {
                Effect::LoadArticles => EngineCommand::LoadArticles,
                Effect::SendQueueUpdate(update) => {
                    speed_info!(
                        "SendQueueUpdate article_id={} queue={}",
                        update.article_id,
                        update.new_queue_value
                    );
                    EngineCommand::SendQueueUpdate(update)
                }
            };
            if self.cmd_tx.send(command).is_err() {
                speed_warn!("Engine worker is gone; effect dropped");
            }
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Cancels outstanding requests; they settle as transport failures.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn handle_command(
    updater: &dyn QueueUpdater,
    source: &dyn ArticleSource,
    command: &EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::LoadArticles => EngineEvent::ArticlesLoaded(source.list_articles().await),
        EngineCommand::SendQueueUpdate(update) => EngineEvent::TransitionSettled {
            update: update.clone(),
            result: updater.update_queue(update).await,
        },
    }
}

fn cancelled_event(command: &EngineCommand) -> EngineEvent {
    match command.clone() {
        EngineCommand::LoadArticles => EngineEvent::ArticlesLoaded(Err(FetchError::new(
            FailureKind::Cancelled,
            "cancelled",
        ))),
        EngineCommand::SendQueueUpdate(update) => EngineEvent::TransitionSettled {
            update,
            result: Err(TransitionError::transport("cancelled")),
        },
    }
}
