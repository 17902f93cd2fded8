//! JSON encoding of the user collection.
//!
//! The store file holds a compact JSON array of `{"id","email","age"}` objects.
//! A freshly created store file is empty, so empty (or whitespace-only) input
//! and a literal `null` both decode to the empty collection. Anything else that
//! fails to parse is a [`UserDbError::Decode`].

use crate::error::{Result, UserDbError};
use crate::model::User;

pub fn decode(bytes: &[u8]) -> Result<Vec<User>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let users: Option<Vec<User>> = serde_json::from_slice(bytes).map_err(UserDbError::Decode)?;
    Ok(users.unwrap_or_default())
}

pub fn encode(users: &[User]) -> Result<Vec<u8>> {
    serde_json::to_vec(users).map_err(UserDbError::Encode)
}

pub fn encode_user(user: &User) -> Result<Vec<u8>> {
    serde_json::to_vec(user).map_err(UserDbError::Encode)
}

/// Parses a single record, as passed through `-item`.
pub fn decode_user(item: &str) -> Result<User> {
    serde_json::from_str(item)
        .map_err(|e| UserDbError::Argument(format!("failed to unmarshal item: {}", e)))
}
