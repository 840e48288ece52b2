use std::io::{self, BufRead};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use speed_core::{update, Decision, ModeratorState, Msg, WorkingSet};
use speed_engine::{EngineSettings, ReqwestClient, TransitionController};
use speed_logging::{speed_debug, speed_warn};

use super::effects::EffectRunner;
use super::ui::commands::{self, ConsoleCommand, HELP};
use super::ui::render::render;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Interactive moderator console.
pub(crate) fn run_console(settings: EngineSettings) -> anyhow::Result<()> {
    let runner = EffectRunner::new(settings)?;
    let line_rx = spawn_stdin_reader();

    let mut state = dispatch(ModeratorState::new(), Msg::RefreshClicked, &runner);
    println!("{HELP}");

    loop {
        for msg in runner.drain() {
            state = dispatch(state, msg, &runner);
        }
        if state.consume_dirty() {
            print_view(&state);
        }

        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => match commands::parse(&line) {
                None => {}
                Some(Err(message)) => println!("{message}"),
                Some(Ok(ConsoleCommand::List)) => print_view(&state),
                Some(Ok(ConsoleCommand::Help)) => println!("{HELP}"),
                Some(Ok(ConsoleCommand::Quit)) => break,
                Some(Ok(ConsoleCommand::Dispatch(msg))) => {
                    state = dispatch(state, msg, &runner);
                }
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    speed_debug!("Console closed");
    Ok(())
}

/// Prints the working set once, optionally filtered.
pub(crate) fn run_list(settings: EngineSettings, search: Option<String>) -> anyhow::Result<()> {
    let runtime = build_runtime()?;
    let articles = runtime.block_on(async {
        let client = Arc::new(ReqwestClient::new(settings)?);
        let controller = TransitionController::new(client.clone(), WorkingSet::default());
        controller.load(client.as_ref()).await?;
        anyhow::Ok(controller.articles())
    })?;

    let mut state = ModeratorState::with_articles(articles);
    if let Some(term) = search {
        state = update(state, Msg::SearchChanged(term)).0;
    }
    print_view(&state);
    Ok(())
}

/// Runs a single approve/reject through the transition controller.
pub(crate) fn run_decision(
    settings: EngineSettings,
    article_id: &str,
    decision: Decision,
) -> anyhow::Result<()> {
    let runtime = build_runtime()?;
    runtime.block_on(async {
        let client = Arc::new(ReqwestClient::new(settings)?);
        let controller = TransitionController::new(client.clone(), WorkingSet::default());
        if let Err(err) = controller.load(client.as_ref()).await {
            speed_warn!("Could not load the working set: {}", err);
        }
        controller.transition(article_id, decision).await?;
        println!(
            "Article {} moved to the {} queue; {} left awaiting moderation",
            article_id.trim(),
            decision.target_queue(),
            controller.articles().len()
        );
        anyhow::Ok(())
    })
}

fn dispatch(state: ModeratorState, msg: Msg, runner: &EffectRunner) -> ModeratorState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn print_view(state: &ModeratorState) {
    for line in render(&state.view()) {
        println!("{line}");
    }
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    speed_warn!("Failed to read console input: {}", err);
                    break;
                }
            }
        }
    });
    line_rx
}

fn build_runtime() -> io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}
