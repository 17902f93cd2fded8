use super::DataStore;
use crate::codec;
use crate::error::{Result, UserDbError};
use crate::model::User;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the file, creating it empty on first use.
    fn read_or_create(&self) -> Result<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                debug!(path = %self.path.display(), bytes = bytes.len(), "read store file");
                Ok(bytes)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                File::create(&self.path)
                    .map_err(|e| UserDbError::io("failed to create file", e))?;
                debug!(path = %self.path.display(), "created empty store file");
                Ok(Vec::new())
            }
            Err(e) => Err(UserDbError::io("failed to read file", e)),
        }
    }
}

impl DataStore for FileStore {
    fn load(&mut self) -> Result<Vec<User>> {
        let bytes = self.read_or_create()?;
        let users = codec::decode(&bytes)?;
        debug!(count = users.len(), "loaded users");
        Ok(users)
    }

    fn save(&mut self, users: &[User]) -> Result<()> {
        let bytes = codec::encode(users)?;

        // Dropped at the end of this scope on every path, closing the handle.
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| UserDbError::io("failed to open file", e))?;
        file.write_all(&bytes)
            .map_err(|e| UserDbError::io("failed to write file", e))?;

        debug!(path = %self.path.display(), count = users.len(), "saved users");
        Ok(())
    }

    fn read_raw(&mut self) -> Result<Vec<u8>> {
        self.read_or_create()
    }
}
