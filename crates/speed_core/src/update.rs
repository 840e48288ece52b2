use speed_logging::speed_warn;

use crate::{Decision, Effect, ModeratorState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ModeratorState, msg: Msg) -> (ModeratorState, Vec<Effect>) {
    let effects = match msg {
        Msg::ArticlesLoaded(listing) => {
            let articles = listing
                .into_iter()
                .filter(|article| article.awaits_moderation())
                .collect();
            state.working_set_mut().replace(articles);
            state.set_error(None);
            Vec::new()
        }
        Msg::LoadFailed(reason) => {
            speed_warn!("Article listing failed: {}", reason);
            state.set_error(Some(reason));
            Vec::new()
        }
        Msg::RefreshClicked => vec![Effect::LoadArticles],
        Msg::SearchChanged(term) => {
            state.set_search_term(term);
            Vec::new()
        }
        Msg::SearchCleared => {
            state.set_search_term(String::new());
            Vec::new()
        }
        Msg::ApproveClicked { article_id } => {
            begin_transition(&mut state, &article_id, Decision::Approve)
        }
        Msg::RejectClicked { article_id } => {
            begin_transition(&mut state, &article_id, Decision::Reject)
        }
        Msg::TransitionSettled { update, result } => {
            state.working_set_mut().complete(&update, &result);
            state.set_error(result.err().map(|err| err.to_string()));
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn begin_transition(
    state: &mut ModeratorState,
    article_id: &str,
    decision: Decision,
) -> Vec<Effect> {
    match state.working_set_mut().begin(article_id, decision) {
        Ok(update) => {
            state.mark_dirty();
            vec![Effect::SendQueueUpdate(update)]
        }
        Err(err) => {
            state.set_error(Some(err.to_string()));
            Vec::new()
        }
    }
}
