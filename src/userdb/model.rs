use serde::{Deserialize, Deserializer, Serialize};

/// One user entry. `id` is the unique key within a store; neither it nor
/// `email` is validated.
///
/// Field order here is the field order on disk. Missing or `null` fields
/// decode to their zero value (`""`, `0`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub age: u64,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: u64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
