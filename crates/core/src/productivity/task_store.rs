use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskStoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed task file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no task at index {0}")]
    IndexOutOfRange(usize),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<u64>,
}

/// Per-study-session bookkeeping: which tasks got done and when the
/// session ran, in epoch seconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub session_id: u32,
    pub start_time: Option<u64>,
    pub end_time: Option<u64>,
    pub tasks_completed: Vec<String>,
    pub total_tasks_completed: u32,
}

impl SessionStats {
    pub fn start(session_id: u32, now_epoch: u64) -> Self {
        Self {
            session_id,
            start_time: Some(now_epoch),
            end_time: None,
            tasks_completed: Vec::new(),
            total_tasks_completed: 0,
        }
    }

    pub fn end(&mut self, now_epoch: u64) {
        self.end_time = Some(now_epoch);
    }
}

/// JSON-file backed to-do list.
///
/// A missing file loads as an empty list so a first run needs no setup.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn load(path: &Path) -> Result<Self, TaskStoreError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(TaskStoreError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        let tasks = serde_json::from_str(&contents).map_err(|e| TaskStoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { tasks })
    }

    pub fn save(&self, path: &Path) -> Result<(), TaskStoreError> {
        let json = serde_json::to_string_pretty(&self.tasks).map_err(|e| TaskStoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        fs::write(path, json).map_err(|e| TaskStoreError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn add(&mut self, title: impl Into<String>) {
        self.tasks.push(Task {
            title: title.into(),
            done: false,
            completed_at: None,
        });
    }

    /// Marks a task done, stamps it, and records it in the session.
    pub fn complete(
        &mut self,
        index: usize,
        now_epoch: u64,
        stats: &mut SessionStats,
    ) -> Result<(), TaskStoreError> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskStoreError::IndexOutOfRange(index))?;
        task.done = true;
        task.completed_at = Some(now_epoch);
        stats.tasks_completed.push(task.title.clone());
        stats.total_tasks_completed += 1;
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }
}
