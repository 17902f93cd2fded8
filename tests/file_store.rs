use std::fs;
use userdb::api::UserDbApi;
use userdb::error::UserDbError;
use userdb::model::User;
use userdb::repository;
use userdb::store::fs::FileStore;
use userdb::store::DataStore;

#[test]
fn insertion_order_survives_reload() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("users.json");
    let mut api = UserDbApi::new(FileStore::new(&path));

    for id in ["b", "a", "c"] {
        api.add_user(User::new(id, format!("{}@x.com", id), 1)).unwrap();
    }

    let mut store = FileStore::new(&path);
    let ids: Vec<_> = store.load().unwrap().into_iter().map(|u| u.id).collect();
    assert_eq!(ids, ["b", "a", "c"]);
}

#[test]
fn duplicates_in_file_are_not_revalidated() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("users.json");
    fs::write(
        &path,
        r#"[{"id":"1","email":"first","age":1},{"id":"2","email":"x","age":2},{"id":"1","email":"second","age":3}]"#,
    )
    .unwrap();

    let mut store = FileStore::new(&path);
    let users = store.load().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(repository::find_by_id(&users, "1").unwrap().email, "first");

    let mut api = UserDbApi::new(store);
    api.remove_user("2").unwrap();

    let users = FileStore::new(&path).load().unwrap();
    assert_eq!(users.iter().filter(|u| u.id == "1").count(), 2);
}

#[test]
fn concurrent_writers_last_one_wins() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("users.json");

    let mut first = FileStore::new(&path);
    let mut second = FileStore::new(&path);

    let (a, _) = repository::add(first.load().unwrap(), User::new("a", "a@x.com", 1));
    let (b, _) = repository::add(second.load().unwrap(), User::new("b", "b@x.com", 2));
    first.save(&a).unwrap();
    second.save(&b).unwrap();

    let users = FileStore::new(&path).load().unwrap();
    assert_eq!(users, vec![User::new("b", "b@x.com", 2)]);
}

#[test]
fn decode_error_leaves_file_untouched() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("users.json");
    fs::write(&path, "{\"not\":\"an array\"}").unwrap();

    let mut api = UserDbApi::new(FileStore::new(&path));
    let err = api.add_user(User::new("1", "a", 1)).unwrap_err();
    assert!(matches!(err, UserDbError::Decode(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"not\":\"an array\"}");
}

#[test]
fn save_into_missing_directory_is_io_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(temp_dir.path().join("missing").join("users.json"));

    let err = store.save(&[User::new("1", "a", 1)]).unwrap_err();
    assert!(err.to_string().starts_with("failed to open file"));
}
