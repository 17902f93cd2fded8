use crate::model::User;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

/// What one command produced. Messages report non-error outcomes such as an
/// id that already exists.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Raw store bytes from `list`.
    pub raw: Option<Vec<u8>>,
    /// The record found by `findById`.
    pub found_user: Option<User>,
    pub messages: Vec<String>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn with_found_user(mut self, user: Option<User>) -> Self {
        self.found_user = user;
        self
    }

    pub fn with_raw(mut self, raw: Vec<u8>) -> Self {
        self.raw = Some(raw);
        self
    }
}
