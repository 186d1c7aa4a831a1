use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use super::HistoryError;

/// Write-only mirror of the in-memory history.
pub struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Truncates the file and writes every entry as `<index> <command>`.
    pub fn rewrite_all<'a, I>(&self, entries: I) -> Result<(), HistoryError>
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);

        for (index, command) in entries {
            writeln!(writer, "{} {}", index, command)?;
        }

        writer.flush()?;
        Ok(())
    }
}
