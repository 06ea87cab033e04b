use std::time::Instant;

use discovery_core::{JobType, JobTypeParseError, Msg};

pub const HELP: &str = "\
Commands:
  keyword <text>    search by keyword (empty clears)
  location <text>   filter by location (empty clears)
  type <kind>       any | remote | full-time | part-time | contract | internship
  page <n>          jump to page n
  next | prev       page through results
  reset             clear all filters
  show              print the current view
  help              print this help
  quit              exit";

/// One line of user input, or an engine completion routed through the same inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msg(Msg),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command {0:?}; type `help` for a list")]
    UnknownCommand(String),
    #[error("page must be a positive number, got {0:?}")]
    InvalidPage(String),
    #[error(transparent)]
    InvalidJobType(#[from] JobTypeParseError),
}

/// Parses a command line typed at `now`. A blank line reprints the view.
pub fn parse_command(line: &str, now: Instant) -> Result<Command, InputError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "" | "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "keyword" | "q" => Command::Msg(Msg::KeywordChanged {
            text: rest.to_string(),
            at: now,
        }),
        "location" => Command::Msg(Msg::LocationChanged {
            text: rest.to_string(),
            at: now,
        }),
        "type" => Command::Msg(Msg::JobTypeChanged {
            job_type: rest.parse::<JobType>()?,
            at: now,
        }),
        "page" => match rest.parse::<u32>() {
            Ok(page) if page >= 1 => Command::Msg(Msg::PageSelected(page)),
            _ => return Err(InputError::InvalidPage(rest.to_string())),
        },
        "next" => Command::Msg(Msg::NextPage),
        "prev" => Command::Msg(Msg::PrevPage),
        "reset" => Command::Msg(Msg::ResetClicked { at: now }),
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}
