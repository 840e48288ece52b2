use crate::{ArticleId, Segment};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModeratorViewModel {
    pub rows: Vec<ArticleRowView>,
    /// Size of the working set, before search filtering.
    pub article_count: usize,
    /// Two articles in the working set share a DOI.
    pub duplicate_doi_warning: bool,
    pub duplicate_dois: Vec<Option<String>>,
    pub search_term: String,
    pub no_results: bool,
    pub is_loading: bool,
    pub last_error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    pub id: ArticleId,
    pub title: Vec<Segment>,
    pub author: Vec<Segment>,
    pub date_published: Vec<Segment>,
    pub doi: Vec<Segment>,
    pub journal: Vec<Segment>,
    pub volume: Vec<Segment>,
    pub pages: Vec<Segment>,
    pub in_flight: bool,
}
