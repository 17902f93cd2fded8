use crate::commands::CmdResult;
use crate::error::Result;
use crate::repository;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let users = store.load()?;
    let found = repository::find_by_id(&users, id).cloned();
    Ok(CmdResult::default().with_found_user(found))
}
