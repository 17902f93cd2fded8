//! Turns a [`Config`] into exactly one API call and writes what it produced.
//!
//! Validation runs before any storage is touched, in this order: operation
//! present, file name present, operation known, then the operation's own flag
//! (`-item` for `add`, `-id` for `findById`/`remove`).

use crate::api::UserDbApi;
use crate::codec;
use crate::commands::CmdResult;
use crate::config::Config;
use crate::error::{Result, UserDbError};
use crate::model::User;
use crate::store::fs::FileStore;
use crate::store::DataStore;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    FindById,
    Remove,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Add => "add",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        }
    }
}

impl FromStr for Operation {
    type Err = UserDbError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(Operation::List),
            "add" => Ok(Operation::Add),
            "findById" => Ok(Operation::FindById),
            "remove" => Ok(Operation::Remove),
            other => Err(UserDbError::Argument(format!(
                "Operation {} not allowed!",
                other
            ))),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated operation with its decoded arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Add(User),
    FindById(String),
    Remove(String),
}

impl Request {
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.operation.is_empty() {
            return Err(missing_flag("operation"));
        }
        if config.file_name.is_empty() {
            return Err(missing_flag("fileName"));
        }

        match config.operation.parse::<Operation>()? {
            Operation::List => Ok(Request::List),
            Operation::Add => {
                if config.item.is_empty() {
                    return Err(missing_flag("item"));
                }
                Ok(Request::Add(codec::decode_user(&config.item)?))
            }
            Operation::FindById => Ok(Request::FindById(required_id(config)?)),
            Operation::Remove => Ok(Request::Remove(required_id(config)?)),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Request::List => Operation::List,
            Request::Add(_) => Operation::Add,
            Request::FindById(_) => Operation::FindById,
            Request::Remove(_) => Operation::Remove,
        }
    }
}

fn missing_flag(flag: &str) -> UserDbError {
    UserDbError::Argument(format!("-{} flag has to be specified", flag))
}

fn required_id(config: &Config) -> Result<String> {
    if config.id.is_empty() {
        return Err(missing_flag("id"));
    }
    Ok(config.id.clone())
}

/// Validates `config`, runs it against the file it names and writes the
/// outcome to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let request = Request::from_config(config)?;
    let mut api = UserDbApi::new(FileStore::new(config.store_path()));
    perform(&mut api, request, out)
}

pub fn perform<S: DataStore, W: Write>(
    api: &mut UserDbApi<S>,
    request: Request,
    out: &mut W,
) -> Result<()> {
    debug!(operation = %request.operation(), "dispatching");
    let result = match request {
        Request::List => api.list_users()?,
        Request::Add(user) => api.add_user(user)?,
        Request::FindById(id) => api.find_user(&id)?,
        Request::Remove(id) => api.remove_user(&id)?,
    };
    write_result(&result, out)
}

/// Writes raw listing bytes, a found record, and messages, in that order.
/// Nothing is newline-terminated.
pub fn write_result<W: Write>(result: &CmdResult, out: &mut W) -> Result<()> {
    let write_err = |e| UserDbError::io("failed to write output", e);

    if let Some(raw) = &result.raw {
        out.write_all(raw).map_err(write_err)?;
    }
    if let Some(user) = &result.found_user {
        out.write_all(&codec::encode_user(user)?)
            .map_err(write_err)?;
    }
    for (i, message) in result.messages.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n").map_err(write_err)?;
        }
        out.write_all(message.as_bytes())
            .map_err(write_err)?;
    }
    out.flush().map_err(write_err)
}
