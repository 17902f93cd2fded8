//! # Storage Layer
//!
//! The [`DataStore`] trait is the load/save half of the record repository. The
//! lookup half lives in [`crate::repository`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file holding the whole
//!   collection. Loading a missing file creates it empty.
//! - [`memory::InMemoryStore`]: Keeps the encoded bytes in memory, for tests.
//!
//! Both go through [`crate::codec`], so an in-memory store holding corrupt
//! bytes fails exactly like a corrupt file would.
//!
//! ## Write semantics
//!
//! `save` replaces the whole collection. There is no locking and no
//! write-then-rename: two invocations racing on one file lose updates (last
//! writer wins), and a crash between truncate and write leaves the file empty.

use crate::error::Result;
use crate::model::User;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Load the whole collection, creating an empty store if there is none yet.
    fn load(&mut self) -> Result<Vec<User>>;

    /// Replace the stored collection with `users`.
    fn save(&mut self, users: &[User]) -> Result<()>;

    /// The stored bytes as-is, without decoding. Creates an empty store if
    /// there is none yet.
    fn read_raw(&mut self) -> Result<Vec<u8>>;
}
