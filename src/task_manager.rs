use std::path::Path;

use rand::Rng;

use crate::error::Result;
use crate::fileio::TaskFile;
use crate::paths::{COMPLETED_FILE, PENDING_FILE};

/// Chooses which pending task gets swapped to the front on shuffle.
pub trait IndexPicker {
    /// Returns an index in `1..len`. Only called with `len >= 2`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform draw from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(1..len)
    }
}

/// The pending and completed lists, each saved in full after every change.
pub struct TaskManager {
    pending: TaskFile,
    completed: TaskFile,
}

impl TaskManager {
    pub const fn new(pending: TaskFile, completed: TaskFile) -> Self {
        Self { pending, completed }
    }

    /// Load both lists from `dir`, creating the files on first use.
    pub fn load(dir: &Path) -> Result<Self> {
        let pending = TaskFile::load(dir.join(PENDING_FILE))?;
        let completed = TaskFile::load(dir.join(COMPLETED_FILE))?;
        Ok(Self::new(pending, completed))
    }

    pub fn current_task(&self) -> Option<&str> {
        self.pending.first()
    }

    #[cfg(test)]
    pub fn pending(&self) -> &[String] {
        self.pending.lines()
    }

    #[cfg(test)]
    pub fn completed(&self) -> &[String] {
        self.completed.lines()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Move the current task to the completed list. Returns false if there is
    /// nothing pending.
    pub fn complete_current(&mut self) -> Result<bool> {
        let Some(task) = self.pending.first().map(String::from) else {
            return Ok(false);
        };

        self.completed.append(task.clone());
        self.completed.save()?;
        self.pending.remove_first();
        self.pending.save()?;

        tracing::info!(task = %task, remaining = self.pending.len(), "completed task");
        Ok(true)
    }

    pub fn add_task(&mut self, text: String) -> Result<()> {
        tracing::info!(task = %text, "queued task");
        self.pending.append(text);
        self.pending.save()
    }

    /// Swap the current task with a randomly chosen later one. Returns false
    /// without touching the list when there are fewer than two tasks.
    pub fn shuffle_current(&mut self, picker: &mut dyn IndexPicker) -> Result<bool> {
        let len = self.pending.len();
        if len < 2 {
            return Ok(false);
        }

        let index = picker.pick(len);
        debug_assert!((1..len).contains(&index));
        self.pending.swap(0, index);
        self.pending.save()?;

        tracing::info!(index, "shuffled current task");
        Ok(true)
    }
}
