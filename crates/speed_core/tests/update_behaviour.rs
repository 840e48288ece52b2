use std::sync::Once;

use pretty_assertions::assert_eq;
use speed_core::{
    update, Article, Decision, Effect, ModeratorState, Msg, Queue, QueueUpdate, TransitionError,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(speed_logging::initialize_for_tests);
}

fn article(id: &str, doi: &str) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {id}"),
        author: "Author".to_string(),
        date_published: "2023-10-11".to_string(),
        doi: Some(doi.to_string()),
        journal: "Test Journal".to_string(),
        volume: "1".to_string(),
        pages: "10-15".to_string(),
        queue: Some(Queue::Moderator),
    }
}

fn loaded(articles: Vec<Article>) -> ModeratorState {
    let (mut state, effects) = update(ModeratorState::new(), Msg::ArticlesLoaded(articles));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    state
}

fn row_ids(state: &ModeratorState) -> Vec<String> {
    state.view().rows.into_iter().map(|row| row.id).collect()
}

#[test]
fn update_is_noop() {
    let state = ModeratorState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn approve_emits_one_update_and_removes_on_success() {
    init_logging();
    let state = loaded(vec![article("1", "1234"), article("2", "5678")]);

    let (mut state, effects) = update(
        state,
        Msg::ApproveClicked {
            article_id: "1".to_string(),
        },
    );
    let expected = QueueUpdate {
        article_id: "1".to_string(),
        new_queue_value: Queue::Analyst,
    };
    assert_eq!(effects, vec![Effect::SendQueueUpdate(expected.clone())]);
    assert!(state.view().is_loading);
    assert!(state.consume_dirty());

    let (state, effects) = update(
        state,
        Msg::TransitionSettled {
            update: expected,
            result: Ok(()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(row_ids(&state), vec!["2".to_string()]);
    assert!(!state.view().is_loading);
    assert_eq!(state.view().last_error, None);
}

#[test]
fn reject_emits_rejected_queue_value() {
    init_logging();
    let state = loaded(vec![article("1", "1234")]);

    let (state, effects) = update(
        state,
        Msg::RejectClicked {
            article_id: "1".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::SendQueueUpdate(QueueUpdate::new(
            "1",
            Decision::Reject
        ))]
    );

    let (state, _) = update(
        state,
        Msg::TransitionSettled {
            update: QueueUpdate::new("1", Decision::Reject),
            result: Ok(()),
        },
    );
    assert!(state.working_set().is_empty());
    assert!(state.view().no_results);
}

#[test]
fn remote_failure_keeps_article_and_reports_error() {
    init_logging();
    let state = loaded(vec![article("1", "1234")]);
    let (state, _) = update(
        state,
        Msg::ApproveClicked {
            article_id: "1".to_string(),
        },
    );

    let (state, effects) = update(
        state,
        Msg::TransitionSettled {
            update: QueueUpdate::new("1", Decision::Approve),
            result: Err(TransitionError::RemoteRejected {
                status: 400,
                message: "Invalid article ID format.".to_string(),
            }),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(row_ids(&state), vec!["1".to_string()]);
    let error = state.view().last_error.expect("error reported");
    assert!(error.contains("Invalid article ID format."));
    assert!(!state.view().is_loading);
}

#[test]
fn empty_id_is_reported_without_effects() {
    init_logging();
    let state = loaded(vec![article("1", "1234")]);

    let (mut state, effects) = update(
        state,
        Msg::ApproveClicked {
            article_id: String::new(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(
        state.view().last_error,
        Some(TransitionError::InvalidInput.to_string())
    );
    assert!(!state.view().is_loading);
}

#[test]
fn duplicate_warning_follows_the_working_set() {
    init_logging();
    let state = loaded(vec![
        article("1", "123"),
        article("2", "124"),
        article("3", "123"),
    ]);
    let view = state.view();
    assert!(view.duplicate_doi_warning);
    assert_eq!(view.duplicate_dois, vec![Some("123".to_string())]);

    let (state, _) = update(
        state,
        Msg::TransitionSettled {
            update: QueueUpdate::new("3", Decision::Reject),
            result: Ok(()),
        },
    );
    assert!(!state.view().duplicate_doi_warning);
}

#[test]
fn duplicate_warning_ignores_search_filter() {
    init_logging();
    let state = loaded(vec![article("1", "123"), article("2", "123")]);
    let (state, _) = update(state, Msg::SearchChanged("Article 1".to_string()));

    let view = state.view();
    assert_eq!(view.rows.len(), 1);
    assert!(view.duplicate_doi_warning);
}

#[test]
fn search_filters_rows_and_reports_no_results() {
    init_logging();
    let state = loaded(vec![article("1", "10.1/alpha"), article("2", "10.1/beta")]);

    let (mut state, _) = update(state, Msg::SearchChanged("BETA".to_string()));
    assert!(state.consume_dirty());
    assert_eq!(row_ids(&state), vec!["2".to_string()]);
    let doi = &state.view().rows[0].doi;
    assert!(doi.iter().any(|segment| segment.matched && segment.text == "beta"));

    let (state, _) = update(state, Msg::SearchChanged("gamma".to_string()));
    assert!(state.view().no_results);
    assert_eq!(state.view().article_count, 2);

    let (state, _) = update(state, Msg::SearchCleared);
    assert_eq!(state.view().rows.len(), 2);
    assert_eq!(state.search_term(), "");
}

#[test]
fn unchanged_search_does_not_mark_dirty() {
    init_logging();
    let state = loaded(vec![article("1", "1")]);
    let (mut state, _) = update(state, Msg::SearchCleared);
    assert!(!state.consume_dirty());
}

#[test]
fn refresh_requests_a_listing_and_reload_filters_queue() {
    init_logging();
    let state = loaded(vec![article("1", "1")]);
    let (state, effects) = update(state, Msg::RefreshClicked);
    assert_eq!(effects, vec![Effect::LoadArticles]);

    let mut analyst = article("2", "2");
    analyst.queue = Some(Queue::Analyst);
    let (state, _) = update(
        state,
        Msg::ArticlesLoaded(vec![article("3", "3"), analyst]),
    );
    assert_eq!(row_ids(&state), vec!["3".to_string()]);
}

#[test]
fn load_failure_keeps_previous_articles() {
    init_logging();
    let state = loaded(vec![article("1", "1")]);
    let (state, effects) = update(state, Msg::LoadFailed("timeout".to_string()));

    assert!(effects.is_empty());
    assert_eq!(row_ids(&state), vec!["1".to_string()]);
    assert_eq!(state.view().last_error, Some("timeout".to_string()));
}

#[test]
fn rows_show_formatted_dates() {
    init_logging();
    let mut stamped = article("1", "1");
    stamped.date_published = "2021-03-04T12:00:00Z".to_string();
    let state = loaded(vec![stamped]);

    let date: String = state.view().rows[0]
        .date_published
        .iter()
        .map(|segment| segment.text.as_str())
        .collect();
    assert_eq!(date, "2021-03-04");
}
