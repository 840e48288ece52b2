//! SPEED core: article model, duplicate detection and the moderator state machine.
mod article;
mod duplicate;
mod effect;
mod error;
mod msg;
mod search;
mod state;
mod update;
mod view_model;
mod working_set;

pub use article::{format_date, Article, ArticleId, Decision, Queue};
pub use duplicate::{duplicate_dois, has_duplicate_doi, DoiRecord};
pub use effect::Effect;
pub use error::TransitionError;
pub use msg::Msg;
pub use search::{filter_articles, highlight, matches_search, Segment};
pub use state::ModeratorState;
pub use update::update;
pub use view_model::{ArticleRowView, ModeratorViewModel};
pub use working_set::{QueueUpdate, WorkingSet};
