use crate::QueueUpdate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the article listing.
    LoadArticles,
    /// Issue one outbound update call.
    SendQueueUpdate(QueueUpdate),
}
