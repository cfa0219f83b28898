//! The conversational front of the task list
//!
//! An [`Assistant`] owns the [`TaskList`] for a whole session. Every line the user types goes
//! through [`Assistant::respond`], which never fails: errors are turned into replies.

use crate::config::Config;
use crate::error::CommandError;
use crate::parser::{parse, Command};
use crate::task_list::{Outcome, TaskList};
use crate::traits::TaskStore;

const HELP: &str = "Here are the list of commands:
\t- hello
\t- list
\t- todo [task description]
\t- deadline [task description] /by [dd-mm-yyyy hhmm]
\t- event [task description] /from [dd-mm-yyyy hhmm] /to [dd-mm-yyyy hhmm]
\t- mark [task number] / unmark [task number]
\t- delete [task number]
\t- find [keyword in task]
\t- bye";

const GOODBYE: &str = "Bye-bye!
  /\\_/\\
 ( o.o )
  > ^ <";

/// The answer to one line of input
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    /// What should be shown to the user
    pub text: String,
    /// Whether the user asked to end the session
    pub exit: bool,
}

impl Reply {
    fn say(text: String) -> Self {
        Self { text, exit: false }
    }
}

/// Interprets user commands, applies them to its task list and keeps the store up to date
pub struct Assistant<S: TaskStore> {
    config: Config,
    store: S,
    tasks: TaskList,
}

impl<S: TaskStore> Assistant<S> {
    /// Create an assistant, with the tasks that `store` currently holds
    pub fn new(config: Config, store: S) -> Self {
        let tasks = TaskList::from_tasks(store.load());
        log::info!("{} starts with {} task(s)", config.name, tasks.len());
        Self { config, store, tasks }
    }

    pub fn tasks(&self) -> &TaskList { &self.tasks }
    pub fn store(&self) -> &S        { &self.store }
    pub fn store_mut(&mut self) -> &mut S { &mut self.store }
    pub fn config(&self) -> &Config  { &self.config }

    /// The first thing the assistant says
    pub fn greet(&self) -> String {
        format!("Hello I am {} :D\nHow can I help you?", self.config.name)
    }

    /// Handle one line of user input
    pub fn respond(&mut self, input: &str) -> Reply {
        log::debug!("Handling {:?}", input);
        let command = match parse(input) {
            Ok(command) => command,
            Err(err) => {
                log::debug!("Rejected {:?}: {:?}", input, err);
                return Reply::say(err.to_string());
            },
        };

        match self.execute(command) {
            Ok(reply) => reply,
            Err(err) => Reply::say(err.to_string()),
        }
    }

    fn execute(&mut self, command: Command) -> Result<Reply, CommandError> {
        let outcome = match command {
            Command::Greet => return Ok(Reply::say(String::from("Hello! What would you like me to do today?"))),
            Command::Help => return Ok(Reply::say(HELP.to_string())),
            Command::Thanks => return Ok(Reply::say(String::from("You're welcome!"))),
            Command::Exit => return Ok(Reply { text: GOODBYE.to_string(), exit: true }),
            Command::List => return Ok(Reply::say(self.list())),
            Command::Find(keyword) => return Ok(Reply::say(self.tasks.find(&keyword))),
            Command::Add(task) => self.tasks.add(task)?,
            Command::Mark(index) => self.tasks.mark(index),
            Command::Unmark(index) => self.tasks.unmark(index),
            Command::Delete(index) => self.tasks.delete(index),
        };
        Ok(Reply::say(self.persist(outcome)))
    }

    /// The list is shown as the store holds it, which is what the last successful save wrote
    fn list(&self) -> String {
        match self.store.render() {
            Ok(text) => text,
            Err(err) => {
                log::warn!("Unable to read the task list: {}", err);
                format!("Something went wrong with the file: {}", err)
            },
        }
    }

    /// Save the list if `outcome` changed it, and returns the message to show
    fn persist(&mut self, outcome: Outcome) -> String {
        if outcome.is_change() == false {
            return outcome.into_message();
        }
        match self.store.save(self.tasks.tasks()) {
            Ok(()) => outcome.into_message(),
            Err(err) => {
                log::warn!("Unable to save the task list: {}", err);
                format!("{}\nSomething went wrong with the file: {}", outcome.message(), err)
            },
        }
    }
}
