use crate::duplicate::{duplicate_dois, has_duplicate_doi};
use crate::search::{highlight, matches_search};
use crate::view_model::{ArticleRowView, ModeratorViewModel};
use crate::{Article, WorkingSet};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModeratorState {
    working_set: WorkingSet,
    search_term: String,
    last_error: Option<String>,
    dirty: bool,
}

impl ModeratorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            working_set: WorkingSet::from_listing(articles),
            dirty: true,
            ..Self::default()
        }
    }

    pub fn working_set(&self) -> &WorkingSet {
        &self.working_set
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn view(&self) -> ModeratorViewModel {
        let articles = self.working_set.articles();
        let rows: Vec<ArticleRowView> = articles
            .iter()
            .filter(|article| matches_search(article, &self.search_term))
            .map(|article| self.row_view(article))
            .collect();

        ModeratorViewModel {
            article_count: articles.len(),
            duplicate_doi_warning: has_duplicate_doi(articles),
            duplicate_dois: duplicate_dois(articles),
            search_term: self.search_term.clone(),
            no_results: rows.is_empty(),
            rows,
            is_loading: self.working_set.is_loading(),
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn row_view(&self, article: &Article) -> ArticleRowView {
        let term = self.search_term.as_str();
        ArticleRowView {
            id: article.id.clone(),
            title: highlight(&article.title, term),
            author: highlight(&article.author, term),
            date_published: highlight(&article.formatted_date(), term),
            doi: highlight(article.doi.as_deref().unwrap_or(""), term),
            journal: highlight(&article.journal, term),
            volume: highlight(&article.volume, term),
            pages: highlight(&article.pages, term),
            in_flight: self.working_set.is_in_flight(&article.id),
        }
    }

    pub(crate) fn working_set_mut(&mut self) -> &mut WorkingSet {
        &mut self.working_set
    }

    pub(crate) fn set_search_term(&mut self, term: String) -> bool {
        if self.search_term == term {
            return false;
        }
        self.search_term = term;
        self.mark_dirty();
        true
    }

    pub(crate) fn set_error(&mut self, error: Option<String>) {
        self.last_error = error;
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
