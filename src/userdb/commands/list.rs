use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Returns the store contents without decoding them.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let raw = store.read_raw()?;
    Ok(CmdResult::default().with_raw(raw))
}
