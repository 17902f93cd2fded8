use crate::commands::CmdResult;
use crate::error::Result;
use crate::repository;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let users = store.load()?;
    let (users, found) = repository::remove(users, id);

    let mut result = CmdResult::default();
    if !found {
        debug!(%id, "user not found, store left untouched");
        result.add_message(format!("Item with id {} not found", id));
        return Ok(result);
    }

    store.save(&users)?;
    Ok(result)
}
