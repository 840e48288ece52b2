mod app;
mod config;
mod effects;
mod logging;
mod ui;

use speed_core::Decision;
use speed_logging::speed_warn;

use crate::cli::{Cli, Command};
use config::AppConfig;

pub(crate) fn run(cli: Cli) -> anyhow::Result<()> {
    // Logging depends on the config, so a config error is reported afterwards.
    let (config, config_error) = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    let config = config.merge_cli(&cli);
    logging::initialize(&config, cli.verbose);
    if let Some(err) = config_error {
        speed_warn!("{}; using defaults", err);
    }

    let settings = config.engine_settings();
    match cli.command.unwrap_or(Command::Console) {
        Command::Console => app::run_console(settings),
        Command::List { search } => app::run_list(settings, search),
        Command::Approve { id } => app::run_decision(settings, &id, Decision::Approve),
        Command::Reject { id } => app::run_decision(settings, &id, Decision::Reject),
    }
}
