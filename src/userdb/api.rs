//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! userdb operations. It dispatches to the command functions and returns
//! structured [`CmdResult`]s; it never formats output or touches stdout.
//!
//! `UserDbApi<S: DataStore>` is generic over the storage backend:
//! - Production: `UserDbApi<FileStore>`
//! - Testing: `UserDbApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::User;
use crate::store::DataStore;

pub struct UserDbApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> UserDbApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn list_users(&mut self) -> Result<CmdResult> {
        commands::list::run(&mut self.store)
    }

    pub fn add_user(&mut self, user: User) -> Result<CmdResult> {
        commands::add::run(&mut self.store, user)
    }

    pub fn find_user(&mut self, id: &str) -> Result<CmdResult> {
        commands::find::run(&mut self.store, id)
    }

    pub fn remove_user(&mut self, id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id)
    }
}
