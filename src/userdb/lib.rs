//! # Userdb Architecture
//!
//! Userdb keeps a list of user records in a single JSON file and exposes four
//! operations over it: `list`, `add`, `findById` and `remove`. Every invocation
//! performs at most one load-modify-store cycle against that file.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags into a Config, sets up logging              │
//! │  - The ONLY place that knows about exit codes               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatch Layer (dispatch.rs)                               │
//! │  - Validates the Config into a typed Request                │
//! │  - Renders the CmdResult into an output sink                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Command Layer (api.rs, commands/*.rs)                │
//! │  - One read-modify-write cycle per command                  │
//! │  - Returns structured results, never writes to stdout       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository Layer (repository.rs, store/, codec.rs)         │
//! │  - Pure lookup/insert/delete over the collection            │
//! │  - DataStore trait: FileStore (production),                 │
//! │    InMemoryStore (testing)                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes vs. errors
//!
//! "Already exists" and "not found" are successful outcomes. They travel as
//! messages inside a [`commands::CmdResult`]. Only argument,
//! I/O and (de)serialization failures are [`error::UserDbError`]s.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade over the commands, generic over [`store::DataStore`]
//! - [`codec`]: JSON encoding of the collection and of single records
//! - [`commands`]: Business logic for each operation
//! - [`config`]: The immutable invocation configuration
//! - [`dispatch`]: Argument validation and output rendering
//! - [`error`]: Error types
//! - [`model`]: The [`model::User`] record
//! - [`repository`]: Linear lookup and deduplication over a collection
//! - [`store`]: Storage abstraction and implementations
//! - `cli`: Flag parsing and logging setup for the binary (not part of the lib API)

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod repository;
pub mod store;
