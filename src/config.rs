use crate::constants::CONFIG_FILE;
use crate::error::ConfigError;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Persistent store for the single configured value: the export directory
/// path, kept as one JSON string in a small file.
///
/// Reads never surface errors. A missing, unreadable, or malformed file
/// degrades to the empty-string sentinel, and [`ConfigStore::ensure_initialized`]
/// guarantees that sentinel never survives startup.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store bound to the well-known relative config path.
    pub fn open() -> Self {
        Self::at(CONFIG_FILE)
    }

    /// Store bound to an arbitrary path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the persisted export directory path, or `""` when the file is
    /// missing, unreadable, or not valid JSON.
    pub fn read(&self) -> String {
        self.try_read().unwrap_or_default()
    }

    /// Fallible reader backing [`ConfigStore::read`]. Kept separate so
    /// `ensure_initialized` can tell "stored empty string" apart from
    /// "storage missing or corrupt", even though both collapse to the
    /// sentinel for ordinary callers.
    fn try_read(&self) -> Result<String, ConfigError> {
        let file = File::open(&self.path)?;
        let value = serde_json::from_reader(BufReader::new(file))?;
        Ok(value)
    }

    /// Persists `path` as the sole stored value, creating or replacing the
    /// file. serde_json writes UTF-8 verbatim, so non-ASCII directory names
    /// survive the round trip.
    pub fn write(&self, path: &str) -> Result<(), ConfigError> {
        let file = File::create(&self.path)?;
        serde_json::to_writer(file, path)?;
        Ok(())
    }

    /// Startup check: if the store holds the empty sentinel, or reading fails
    /// outright, the user's home directory is written as the default.
    /// A valid non-empty value is left untouched.
    pub fn ensure_initialized(&self) -> Result<(), ConfigError> {
        match self.try_read() {
            Ok(value) if !value.is_empty() => Ok(()),
            _ => {
                let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
                self.write(&home.to_string_lossy())
            }
        }
    }
}
