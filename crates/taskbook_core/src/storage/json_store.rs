use crate::error::StoreError;
use crate::model::Task;
use std::io::ErrorKind;
use std::path::Path;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// The ordered task list plus its load/save contract.
///
/// Tasks are addressed by 1-based position; positions shift after a
/// deletion. One invocation owns the whole list: load, at most one
/// mutation, save. Concurrent invocations are last-writer-wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a pending task stamped with the current UTC time.
    pub fn add(&mut self, description: &str) -> Result<Task, StoreError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(StoreError::invalid_input("description is required"));
        }

        let task = Task {
            description: trimmed.to_string(),
            done: false,
            created_at: now_rfc3339()?,
            completed_at: None,
        };
        self.tasks.push(task.clone());

        Ok(task)
    }

    /// Mark the task at `position` as done and stamp `completed_at`.
    ///
    /// Completing an already-done task succeeds and refreshes the
    /// timestamp.
    pub fn complete(&mut self, position: usize) -> Result<Task, StoreError> {
        let index = self.index_for(position)?;
        let completed_at = now_rfc3339()?;

        let task = &mut self.tasks[index];
        task.done = true;
        task.completed_at = Some(completed_at);

        Ok(task.clone())
    }

    /// Remove the task at `position`; later tasks shift down one.
    pub fn delete(&mut self, position: usize) -> Result<Task, StoreError> {
        let index = self.index_for(position)?;
        Ok(self.tasks.remove(index))
    }

    /// Read a store from `path`. A missing file is an empty list, not
    /// an error; any other read failure is `io_error`.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::new()),
            Err(err) => return Err(StoreError::io(err.to_string())),
        };

        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(|err| StoreError::decode(err.to_string()))?;

        for (index, task) in tasks.iter().enumerate() {
            validate_task(task)
                .map_err(|message| StoreError::decode(format!("task {}: {message}", index + 1)))?;
        }

        Ok(Self { tasks })
    }

    /// Write the whole list to `path` as an indented JSON array,
    /// overwriting any existing content.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|err| StoreError::io(err.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&self.tasks)
            .map_err(|err| StoreError::encode(err.to_string()))?;
        std::fs::write(path, content).map_err(|err| StoreError::io(err.to_string()))
    }

    fn index_for(&self, position: usize) -> Result<usize, StoreError> {
        if position < 1 || position > self.tasks.len() {
            return Err(StoreError::out_of_range(format!(
                "position {position} is out of range (list has {} tasks)",
                self.tasks.len()
            )));
        }
        Ok(position - 1)
    }
}

fn validate_task(task: &Task) -> Result<(), String> {
    OffsetDateTime::parse(&task.created_at, &Rfc3339)
        .map_err(|_| "created_date must be RFC3339".to_string())?;

    match (task.completed_at.as_deref(), task.done) {
        (Some(completed_at), true) => {
            OffsetDateTime::parse(completed_at, &Rfc3339)
                .map_err(|_| "completed_date must be RFC3339".to_string())?;
        }
        (Some(_), false) => {
            return Err("completed_date set on a task that is not done".to_string());
        }
        (None, true) => return Err("done task is missing completed_date".to_string()),
        (None, false) => {}
    }

    Ok(())
}

fn now_rfc3339() -> Result<String, StoreError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|err| StoreError::encode(err.to_string()))
}
