use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use speed_core::{Article, Decision, TransitionError, WorkingSet};
use speed_logging::{speed_debug, speed_error, speed_info};
use tokio_util::sync::CancellationToken;

use crate::{ArticleSource, FetchError, QueueUpdater};

/// Approve/reject entry points for a moderator's working set.
///
/// Each call sends exactly one update and removes the article locally once
/// the persistence service acknowledges it. Failures leave the working set
/// as it was. Nothing is retried.
///
/// Outstanding calls borrow the controller, so they are cancelled through
/// [`TransitionController::cancel`] or a parent token passed to
/// [`TransitionController::with_cancellation`], never by dropping it.
pub struct TransitionController {
    updater: Arc<dyn QueueUpdater>,
    working_set: Mutex<WorkingSet>,
    cancel: CancellationToken,
}

impl TransitionController {
    pub fn new(updater: Arc<dyn QueueUpdater>, working_set: WorkingSet) -> Self {
        Self {
            updater,
            working_set: Mutex::new(working_set),
            cancel: CancellationToken::new(),
        }
    }

    /// Ties outstanding requests to `parent`; cancelling it fails them.
    pub fn with_cancellation(mut self, parent: &CancellationToken) -> Self {
        self.cancel = parent.child_token();
        self
    }

    pub fn articles(&self) -> Vec<Article> {
        self.lock().articles().to_vec()
    }

    pub fn working_set(&self) -> WorkingSet {
        self.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading()
    }

    /// Replaces the working set with the moderator subset of a fresh listing.
    pub async fn load(&self, source: &dyn ArticleSource) -> Result<usize, FetchError> {
        let listing = source.list_articles().await?;
        let fresh = WorkingSet::from_listing(listing);
        let count = fresh.len();
        self.lock().replace(fresh.articles().to_vec());
        speed_info!("Loaded {} articles awaiting moderation", count);
        Ok(count)
    }

    pub async fn approve(&self, article_id: &str) -> Result<(), TransitionError> {
        self.transition(article_id, Decision::Approve).await
    }

    pub async fn reject(&self, article_id: &str) -> Result<(), TransitionError> {
        self.transition(article_id, Decision::Reject).await
    }

    pub async fn transition(
        &self,
        article_id: &str,
        decision: Decision,
    ) -> Result<(), TransitionError> {
        let update = self.lock().begin(article_id, decision)?;
        speed_debug!("Sending {} for article {}", decision, update.article_id);

        let result = tokio::select! {
            result = self.updater.update_queue(&update) => result,
            _ = self.cancel.cancelled() => Err(TransitionError::transport("cancelled")),
        };
        if let Err(err) = &result {
            speed_error!("Error updating article {}: {}", update.article_id, err);
        }

        self.lock().complete(&update, &result);
        result
    }

    /// Fails every outstanding and future call with a transport failure.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    fn lock(&self) -> MutexGuard<'_, WorkingSet> {
        self.working_set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
