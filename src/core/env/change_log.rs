use std::{
    fmt,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

/// One successful environment mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvChange<'a> {
    Set { name: &'a str, value: &'a str },
    Unset { name: &'a str },
}

impl fmt::Display for EnvChange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvChange::Set { name, value } => write!(f, "SET {}={}", name, value),
            EnvChange::Unset { name } => write!(f, "UNSET {}", name),
        }
    }
}

/// Append-only record of environment changes. Never truncated.
pub struct EnvChangeLog {
    file_path: PathBuf,
}

impl EnvChangeLog {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn record(&self, change: &EnvChange<'_>) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)?;

        writeln!(file, "{}", change)?;
        log::debug!("env log {}: {}", self.file_path.display(), change);
        Ok(())
    }
}
