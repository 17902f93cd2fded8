use std::path::PathBuf;

/// Everything one invocation needs, built once from the command line.
///
/// Fields hold the flag values as given; an empty string means the flag was not
/// passed. Validation happens in [`crate::dispatch::Request::from_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub file_name: String,
    pub operation: String,
    pub item: String,
    pub id: String,
}

impl Config {
    pub fn new(operation: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = item.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.file_name)
    }
}
