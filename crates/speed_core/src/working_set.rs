use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use speed_logging::{speed_debug, speed_info, speed_warn};

use crate::{Article, ArticleId, Decision, Queue, TransitionError};

/// Body of the outbound update call: `{ "articleId": ..., "newQueueValue": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueUpdate {
    pub article_id: ArticleId,
    pub new_queue_value: Queue,
}

impl QueueUpdate {
    pub fn new(article_id: impl Into<ArticleId>, decision: Decision) -> Self {
        Self {
            article_id: article_id.into(),
            new_queue_value: decision.target_queue(),
        }
    }
}

/// The articles currently shown to a moderator, plus the advisory
/// in-flight bookkeeping for transitions that have not settled yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkingSet {
    articles: Vec<Article>,
    // Outstanding request count per id; a double click yields two.
    in_flight: BTreeMap<ArticleId, u32>,
}

impl WorkingSet {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            in_flight: BTreeMap::new(),
        }
    }

    /// Builds the moderator's working set from a full listing.
    pub fn from_listing(listing: Vec<Article>) -> Self {
        Self::new(
            listing
                .into_iter()
                .filter(Article::awaits_moderation)
                .collect(),
        )
    }

    /// Replaces the articles after a reload. Outstanding requests keep their flag.
    pub fn replace(&mut self, articles: Vec<Article>) {
        self.articles = articles;
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn contains(&self, article_id: &str) -> bool {
        self.articles.iter().any(|article| article.id == article_id)
    }

    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn is_in_flight(&self, article_id: &str) -> bool {
        self.in_flight.contains_key(article_id)
    }

    /// Validates the id and marks a transition as outstanding.
    ///
    /// The flag is advisory: a second call for the same id is not refused.
    pub fn begin(
        &mut self,
        article_id: &str,
        decision: Decision,
    ) -> Result<QueueUpdate, TransitionError> {
        let article_id = article_id.trim();
        if article_id.is_empty() {
            speed_warn!("Refusing to {} an article without an id", decision);
            return Err(TransitionError::InvalidInput);
        }
        if !self.contains(article_id) {
            speed_debug!(
                "Article {} is not in the working set; sending {} anyway",
                article_id,
                decision
            );
        }
        *self.in_flight.entry(article_id.to_string()).or_insert(0) += 1;
        Ok(QueueUpdate::new(article_id, decision))
    }

    /// Reconciles local state with the outcome of a transition.
    ///
    /// On success the article leaves the working set and is returned. On
    /// failure the articles are left untouched.
    pub fn complete(
        &mut self,
        update: &QueueUpdate,
        result: &Result<(), TransitionError>,
    ) -> Option<Article> {
        self.release(&update.article_id);
        match result {
            Ok(()) => {
                let position = self
                    .articles
                    .iter()
                    .position(|article| article.id == update.article_id)?;
                let removed = self.articles.remove(position);
                speed_info!(
                    "Article {} moved to queue {}",
                    removed.id,
                    update.new_queue_value
                );
                Some(removed)
            }
            Err(err) => {
                speed_warn!(
                    "Article {} stays in the working set: {}",
                    update.article_id,
                    err
                );
                None
            }
        }
    }

    fn release(&mut self, article_id: &str) {
        if let Some(count) = self.in_flight.get_mut(article_id) {
            *count -= 1;
            if *count == 0 {
                self.in_flight.remove(article_id);
            }
        }
    }
}
