use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("action").args(["add", "complete", "delete", "list"])))]
pub struct Cli {
    /// Add a task to the list
    ///
    /// Example: taskbook --add "Buy milk"
    #[arg(long, value_name = "TEXT")]
    pub add: Option<String>,

    /// Mark a task as completed (1-based position)
    ///
    /// Example: taskbook --complete 1
    #[arg(long, value_name = "POSITION")]
    pub complete: Option<usize>,

    /// Delete a task (1-based position)
    ///
    /// Example: taskbook --delete 1
    #[arg(long, value_name = "POSITION")]
    pub delete: Option<usize>,

    /// List all tasks
    ///
    /// Example: taskbook --list
    #[arg(long)]
    pub list: bool,

    /// Read and write this file instead of the default store
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Complete(usize),
    Delete(usize),
    List,
}

impl Cli {
    /// The single action selected by the flags, if any. The `action`
    /// arg group guarantees at most one is set.
    pub fn action(&self) -> Option<Action> {
        if let Some(text) = self.add.as_deref() {
            return Some(Action::Add(text.to_string()));
        }
        if let Some(position) = self.complete {
            return Some(Action::Complete(position));
        }
        if let Some(position) = self.delete {
            return Some(Action::Delete(position));
        }
        if self.list {
            return Some(Action::List);
        }
        None
    }
}
