use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::User;
use crate::repository;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, user: User) -> Result<CmdResult> {
    let users = store.load()?;
    let id = user.id.clone();
    let (users, already_exists) = repository::add(users, user);

    let mut result = CmdResult::default();
    if already_exists {
        debug!(%id, "user already exists, store left untouched");
        result.add_message(format!("Item with id {} already exists", id));
        return Ok(result);
    }

    store.save(&users)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::find_by_id;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_user_to_empty_store() {
        let mut store = InMemoryStore::new();
        let user = User::new("1", "a@b.com", 30);

        let result = run(&mut store, user.clone()).unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(store.load().unwrap(), vec![user]);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn adding_existing_id_reports_and_does_not_save() {
        let mut fixture = StoreFixture::new().with_users(2);
        let before = fixture.users();

        let result = run(&mut fixture.store, User::new("2", "new@x.com", 1)).unwrap();
        assert_eq!(
            result.messages,
            vec!["Item with id 2 already exists"]
        );
        assert_eq!(fixture.store.saves(), 0);
        assert_eq!(fixture.users(), before);
    }

    #[test]
    fn added_user_is_findable() {
        let mut fixture = StoreFixture::new().with_users(3);
        let user = User::new("new", "n@x.com", 7);
        run(&mut fixture.store, user.clone()).unwrap();

        let users = fixture.users();
        assert_eq!(find_by_id(&users, "new"), Some(&user));
        assert_eq!(users.len(), 4);
    }

    #[test]
    fn corrupt_store_fails_without_saving() {
        let mut store = InMemoryStore::with_bytes("[{");
        assert!(run(&mut store, User::new("1", "a", 1)).is_err());
        assert_eq!(store.saves(), 0);
        assert_eq!(store.bytes(), Some(&b"[{"[..]));
    }
}
