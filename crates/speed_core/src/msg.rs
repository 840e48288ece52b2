use crate::{Article, ArticleId, QueueUpdate, TransitionError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Article listing arrived from the persistence service.
    ArticlesLoaded(Vec<Article>),
    /// Article listing could not be fetched.
    LoadFailed(String),
    /// User asked for a fresh listing.
    RefreshClicked,
    /// User edited the search box.
    SearchChanged(String),
    /// User clicked Clear next to the search box.
    SearchCleared,
    /// User clicked Approve on a row.
    ApproveClicked { article_id: ArticleId },
    /// User clicked Reject on a row.
    RejectClicked { article_id: ArticleId },
    /// The persistence service answered (or failed to answer) an update.
    TransitionSettled {
        update: QueueUpdate,
        result: Result<(), TransitionError>,
    },
    /// Render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
