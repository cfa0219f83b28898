//! A module to parse user commands

use crate::error::CommandError;
use crate::task::{Task, TaskType};
use crate::utils::parse_input_timestamp;

const BY_MARKER: &str = "/by ";
const FROM_MARKER: &str = "/from ";
const TO_MARKER: &str = "/to ";

/// A command typed by the user
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `hello` or `hi`
    Greet,
    Help,
    List,
    /// `bye`
    Exit,
    Thanks,
    /// `todo`, `deadline` or `event`
    Add(Task),
    /// 1-based index
    Mark(usize),
    /// 1-based index
    Unmark(usize),
    /// 1-based index
    Delete(usize),
    /// Case-sensitive keyword
    Find(String),
}

/// Parse one line of user input into a [`Command`]
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();

    match line {
        "hello" | "hi" => return Ok(Command::Greet),
        "help" => return Ok(Command::Help),
        "list" => return Ok(Command::List),
        "bye" => return Ok(Command::Exit),
        "thanks" => return Ok(Command::Thanks),
        "todo" => return Err(CommandError::EmptyDescription(TaskType::ToDo)),
        "deadline" => return Err(CommandError::EmptyDescription(TaskType::Deadline)),
        "event" => return Err(CommandError::EmptyDescription(TaskType::Event)),
        _ => (),
    }

    if let Some(rest) = line.strip_prefix("todo ") {
        return parse_todo(rest).map(Command::Add);
    }
    if let Some(rest) = line.strip_prefix("deadline ") {
        return parse_deadline(rest).map(Command::Add);
    }
    if let Some(rest) = line.strip_prefix("event ") {
        return parse_event(rest).map(Command::Add);
    }
    if line.starts_with("mark ") {
        return parse_index(line).map(Command::Mark);
    }
    if line.starts_with("unmark ") {
        return parse_index(line).map(Command::Unmark);
    }
    if line.starts_with("delete ") {
        return parse_index(line).map(Command::Delete);
    }
    if let Some(keyword) = line.strip_prefix("find ") {
        return Ok(Command::Find(keyword.to_string()));
    }

    Err(CommandError::UnrecognizedCommand)
}

fn parse_todo(rest: &str) -> Result<Task, CommandError> {
    let name = description(rest, TaskType::ToDo)?;
    Ok(Task::todo(name))
}

fn parse_deadline(rest: &str) -> Result<Task, CommandError> {
    let empty = || CommandError::EmptyDescription(TaskType::Deadline);

    let (name, due) = split_on(rest, BY_MARKER).ok_or_else(empty)?;
    let name = description(name, TaskType::Deadline)?;
    let due = parse_input_timestamp(due.trim())?;
    Ok(Task::deadline(name, due))
}

fn parse_event(rest: &str) -> Result<Task, CommandError> {
    let empty = || CommandError::EmptyDescription(TaskType::Event);

    let (name, span) = split_on(rest, FROM_MARKER).ok_or_else(empty)?;
    let (start, end) = split_on(span, TO_MARKER).ok_or_else(empty)?;
    let name = description(name, TaskType::Event)?;
    let start = parse_input_timestamp(start.trim())?;
    let end = parse_input_timestamp(end.trim())?;
    Task::event(name, start, end)
}

/// Split `text` around the first occurrence of `marker`
fn split_on<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    text.find(marker)
        .map(|pos| (&text[..pos], &text[pos + marker.len()..]))
}

fn description(text: &str, task_type: TaskType) -> Result<String, CommandError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommandError::EmptyDescription(task_type));
    }
    Ok(text.to_string())
}

/// The task number is the last word of the line
fn parse_index(line: &str) -> Result<usize, CommandError> {
    line.split_whitespace()
        .last()
        .and_then(|word| word.parse().ok())
        .ok_or(CommandError::UnrecognizedCommand)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskKind;

    #[test]
    fn test_bare_commands() {
        assert_eq!(parse("hello").unwrap(), Command::Greet);
        assert_eq!(parse("hi").unwrap(), Command::Greet);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("list").unwrap(), Command::List);
        assert_eq!(parse("  bye \n").unwrap(), Command::Exit);
        assert_eq!(parse("thanks").unwrap(), Command::Thanks);
    }

    #[test]
    fn test_unrecognized() {
        for line in ["", "LIST", "Todo read", "todoread", "listing", "blah blah", "find"].iter() {
            assert!(matches!(parse(line), Err(CommandError::UnrecognizedCommand)), "{:?}", line);
        }
    }

    #[test]
    fn test_todo() {
        match parse("todo buy milk").unwrap() {
            Command::Add(task) => {
                assert_eq!(task.name(), "buy milk");
                assert_eq!(task.kind(), &TaskKind::ToDo);
                assert_eq!(task.is_done(), false);
            },
            other => panic!("Unexpected command {:?}", other),
        }

        assert!(matches!(parse("todo"), Err(CommandError::EmptyDescription(TaskType::ToDo))));
        assert!(matches!(parse("todo    "), Err(CommandError::EmptyDescription(TaskType::ToDo))));
    }

    #[test]
    fn test_deadline() {
        match parse("deadline submit report /by 10-02-2025 2359").unwrap() {
            Command::Add(task) => {
                assert_eq!(task.to_string(), "[D] [ ] submit report (by: 10 Feb 2025 23:59)");
            },
            other => panic!("Unexpected command {:?}", other),
        }

        assert!(matches!(parse("deadline submit report"), Err(CommandError::EmptyDescription(TaskType::Deadline))));
        assert!(matches!(parse("deadline /by 10-02-2025 2359"), Err(CommandError::EmptyDescription(TaskType::Deadline))));
        assert!(matches!(parse("deadline"), Err(CommandError::EmptyDescription(TaskType::Deadline))));
        assert!(matches!(parse("deadline report /by tomorrow"), Err(CommandError::MalformedTimestamp(_))));
    }

    #[test]
    fn test_event() {
        match parse("event team sync /from 05-02-2025 1000 /to 05-02-2025 1100").unwrap() {
            Command::Add(task) => {
                assert_eq!(task.to_string(), "[E] [ ] team sync (from: 05 Feb 2025 10:00 to: 05 Feb 2025 11:00)");
            },
            other => panic!("Unexpected command {:?}", other),
        }

        assert!(matches!(
            parse("event team sync /from 05-02-2025 1000 /to 05-02-2025 0900"),
            Err(CommandError::InvalidEventRange)
        ));
        assert!(matches!(parse("event team sync /from 05-02-2025 1000"), Err(CommandError::EmptyDescription(TaskType::Event))));
        assert!(matches!(parse("event team sync /to 05-02-2025 1000"), Err(CommandError::EmptyDescription(TaskType::Event))));
        assert!(matches!(parse("event /from 05-02-2025 1000 /to 05-02-2025 1100"), Err(CommandError::EmptyDescription(TaskType::Event))));
        assert!(matches!(parse("event sync /from 5-2-2025 1000 /to 05-02-2025 1100"), Err(CommandError::MalformedTimestamp(_))));
    }

    #[test]
    fn test_indices() {
        assert_eq!(parse("mark 2").unwrap(), Command::Mark(2));
        assert_eq!(parse("unmark 12").unwrap(), Command::Unmark(12));
        assert_eq!(parse("delete 1").unwrap(), Command::Delete(1));
        assert_eq!(parse("delete 2").unwrap(), Command::Delete(2));

        assert!(matches!(parse("mark two"), Err(CommandError::UnrecognizedCommand)));
        assert!(matches!(parse("delete -1"), Err(CommandError::UnrecognizedCommand)));
        assert!(matches!(parse("mark"), Err(CommandError::UnrecognizedCommand)));
    }

    #[test]
    fn test_find() {
        assert_eq!(parse("find sync").unwrap(), Command::Find(String::from("sync")));
        assert_eq!(parse("find team sync").unwrap(), Command::Find(String::from("team sync")));
    }
}
