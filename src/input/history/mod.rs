mod file_ops;
pub mod types;

use std::{collections::VecDeque, path::PathBuf};

use self::file_ops::FileOps;
pub use self::types::{HistoryError, DEFAULT_CAPACITY};

/// Bounded log of accepted command lines, oldest first.
///
/// Once `max_entries` entries are stored, every append evicts the oldest one.
/// When backed by a file, the whole log is rewritten after each append.
pub struct History {
    entries: VecDeque<String>,
    file_ops: Option<FileOps>,
    max_entries: usize,
}

impl History {
    pub fn new(history_file: PathBuf, max_entries: usize) -> Self {
        History {
            entries: VecDeque::with_capacity(max_entries),
            file_ops: Some(FileOps::new(history_file)),
            max_entries,
        }
    }

    /// A history that never touches the filesystem.
    pub fn in_memory(max_entries: usize) -> Self {
        History {
            entries: VecDeque::with_capacity(max_entries),
            file_ops: None,
            max_entries,
        }
    }

    /// Appends `entry`, evicting the oldest entry when full, then rewrites the
    /// backing file.
    ///
    /// The in-memory append always happens. An error only means the file
    /// mirror is stale.
    pub fn add(&mut self, entry: &str) -> Result<(), HistoryError> {
        if self.max_entries == 0 {
            return Ok(());
        }

        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.to_owned());

        self.persist()
    }

    /// Entries in insertion order with 1-based indices.
    pub fn list(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i + 1, entry.as_str()))
    }

    fn persist(&self) -> Result<(), HistoryError> {
        let Some(file_ops) = &self.file_ops else {
            return Ok(());
        };

        file_ops.rewrite_all(self.list())?;
        log::debug!(
            "rewrote {} history entries to {}",
            self.entries.len(),
            file_ops.path().display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn commands(history: &History) -> Vec<String> {
        history.list().map(|(_, c)| c.to_string()).collect()
    }

    #[test]
    fn test_list_is_one_based() {
        let mut history = History::in_memory(DEFAULT_CAPACITY);
        history.add("ls").unwrap();
        history.add("pwd").unwrap();

        let listed: Vec<(usize, &str)> = history.list().collect();
        assert_eq!(listed, vec![(1, "ls"), (2, "pwd")]);
    }

    #[test]
    fn test_bound_holds_most_recent() {
        let mut history = History::in_memory(DEFAULT_CAPACITY);
        for i in 1..=2500 {
            history.add(&format!("cmd {}", i)).unwrap();
            assert!(history.list().count() <= DEFAULT_CAPACITY);
        }

        let expected: Vec<String> = (1501..=2500).map(|i| format!("cmd {}", i)).collect();
        assert_eq!(commands(&history), expected);
    }

    #[test]
    fn test_fifo_eviction() {
        let mut history = History::in_memory(DEFAULT_CAPACITY);
        for i in 1..=1000 {
            history.add(&i.to_string()).unwrap();
        }
        assert_eq!(history.list().count(), 1000);

        history.add("1001").unwrap();

        let expected: Vec<String> = (2..=1001).map(|i| i.to_string()).collect();
        assert_eq!(commands(&history), expected);
    }

    #[test]
    fn test_every_append_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.txt");
        let mut history = History::new(path.clone(), 3);

        history.add("echo one").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1 echo one\n");

        history.add("echo two").unwrap();
        history.add("echo three").unwrap();
        history.add("echo four").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "1 echo two\n2 echo three\n3 echo four\n"
        );
    }

    #[test]
    fn test_persist_failure_keeps_entry() {
        let mut history = History::new(PathBuf::from("/nonexistent/dir/history.txt"), 10);

        let result = history.add("ls -la");

        assert!(matches!(result, Err(HistoryError::Persist(_))));
        assert_eq!(commands(&history), vec!["ls -la"]);
    }
}
