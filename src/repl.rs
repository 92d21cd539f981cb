//! Line-command parsing for the interactive front end.
//!
//! Each input line maps to zero or more session events:
//!
//! | input                    | events                          |
//! |--------------------------|---------------------------------|
//! | `medical officer`        | `SetQuery`, `Dispatch`          |
//! | `:exact` / `:semantic`   | `SetMode`                       |
//! | `:size 50` / `:size all` | `SetPageSize`                   |
//! | `:page 3`                | `SetPage(3)`                    |
//! | `:next` / `:prev`        | `SetPage(current ± 1)`          |
//! | `:search`                | `Dispatch` with the current query |
//! | `:help`, `:quit`         | handled by the caller           |

use crate::app::{Event, PageSize, SearchMode, SearchSession};

/// What the caller should do with one input line.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Apply these events in order.
    Events(Vec<Event>),
    Help,
    Quit,
    /// Blank line.
    Nothing,
    /// Unrecognized or malformed command, with a message for the user.
    Invalid(String),
}

pub const HELP: &str = "\
commands:
  <text>            search for <text>
  :search           repeat the search with the current query
  :exact            switch to exact search
  :semantic         switch to semantic search
  :size 10|50|100|500|all
                    semantic page size
  :page N           go to page N
  :next, :prev      move one page
  :help             show this help
  :quit             exit";

/// Parses one input line against the current session.
///
/// `:next` and `:prev` are resolved relative to the session's current page;
/// clamping to the valid range is left to the session.
#[must_use]
pub fn parse_line(line: &str, session: &SearchSession) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Nothing;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Command::Events(vec![Event::SetQuery(line.to_string()), Event::Dispatch]);
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("q" | "quit" | "exit", None) => Command::Quit,
        ("h" | "help", None) => Command::Help,
        ("search" | "s", None) => Command::Events(vec![Event::Dispatch]),
        ("exact", None) => Command::Events(vec![Event::SetMode(SearchMode::Exact)]),
        ("semantic", None) => Command::Events(vec![Event::SetMode(SearchMode::Semantic)]),
        ("size", Some(size)) => match size.parse::<PageSize>() {
            Ok(size) => Command::Events(vec![Event::SetPageSize(size)]),
            Err(e) => Command::Invalid(e),
        },
        ("page", Some(page)) => match page.parse::<usize>() {
            Ok(page) => Command::Events(vec![Event::SetPage(page)]),
            Err(_) => Command::Invalid(format!("not a page number: {page}")),
        },
        ("next" | "n", None) => Command::Events(vec![Event::SetPage(session.current_page() + 1)]),
        ("prev" | "p", None) => {
            Command::Events(vec![Event::SetPage(session.current_page().saturating_sub(1).max(1))])
        }
        _ => Command::Invalid(format!("unknown command ':{command}', try :help")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_searches() {
        let session = SearchSession::default();
        assert_eq!(
            parse_line("  army doctor ", &session),
            Command::Events(vec![Event::SetQuery("army doctor".to_string()), Event::Dispatch])
        );
    }

    #[test]
    fn mode_and_size_commands() {
        let session = SearchSession::default();
        assert_eq!(
            parse_line(":semantic", &session),
            Command::Events(vec![Event::SetMode(SearchMode::Semantic)])
        );
        assert_eq!(
            parse_line(":size all", &session),
            Command::Events(vec![Event::SetPageSize(PageSize::All)])
        );
        assert!(matches!(parse_line(":size 7", &session), Command::Invalid(_)));
    }

    #[test]
    fn paging_is_relative_to_current_page() {
        let session = SearchSession::default();
        assert_eq!(parse_line(":next", &session), Command::Events(vec![Event::SetPage(2)]));
        assert_eq!(parse_line(":prev", &session), Command::Events(vec![Event::SetPage(1)]));
        assert_eq!(parse_line(":page 4", &session), Command::Events(vec![Event::SetPage(4)]));
        assert!(matches!(parse_line(":page x", &session), Command::Invalid(_)));
    }

    #[test]
    fn control_commands() {
        let session = SearchSession::default();
        assert_eq!(parse_line(":quit", &session), Command::Quit);
        assert_eq!(parse_line(":help", &session), Command::Help);
        assert_eq!(parse_line("   ", &session), Command::Nothing);
        assert!(matches!(parse_line(":frobnicate", &session), Command::Invalid(_)));
    }
}
