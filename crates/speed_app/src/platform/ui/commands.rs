use speed_core::Msg;

pub const HELP: &str = "commands: list | search <term> | clear | approve <id> | reject <id> | refresh | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    Help,
    Quit,
    Dispatch(Msg),
}

/// Parses one console line. Blank lines are `None`.
pub fn parse(line: &str) -> Option<Result<ConsoleCommand, String>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(ConsoleCommand::List),
        "help" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "exit" | "q" => Ok(ConsoleCommand::Quit),
        "refresh" => Ok(ConsoleCommand::Dispatch(Msg::RefreshClicked)),
        "clear" => Ok(ConsoleCommand::Dispatch(Msg::SearchCleared)),
        "search" => Ok(ConsoleCommand::Dispatch(Msg::SearchChanged(rest.to_string()))),
        // An empty id is passed through; the state machine reports it.
        "approve" => Ok(ConsoleCommand::Dispatch(Msg::ApproveClicked {
            article_id: rest.to_string(),
        })),
        "reject" => Ok(ConsoleCommand::Dispatch(Msg::RejectClicked {
            article_id: rest.to_string(),
        })),
        other => Err(format!("unknown command `{other}`; {HELP}")),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decisions_carry_the_article_id() {
        assert_eq!(
            parse("approve 653f1c"),
            Some(Ok(ConsoleCommand::Dispatch(Msg::ApproveClicked {
                article_id: "653f1c".to_string()
            })))
        );
        assert_eq!(
            parse("  REJECT   42  "),
            Some(Ok(ConsoleCommand::Dispatch(Msg::RejectClicked {
                article_id: "42".to_string()
            })))
        );
    }

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            parse("search test driven"),
            Some(Ok(ConsoleCommand::Dispatch(Msg::SearchChanged(
                "test driven".to_string()
            ))))
        );
    }

    #[test]
    fn missing_id_still_dispatches() {
        assert_eq!(
            parse("approve"),
            Some(Ok(ConsoleCommand::Dispatch(Msg::ApproveClicked {
                article_id: String::new()
            })))
        );
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse("   "), None);
        assert!(matches!(parse("frobnicate"), Some(Err(_))));
        assert_eq!(parse("q"), Some(Ok(ConsoleCommand::Quit)));
    }
}
