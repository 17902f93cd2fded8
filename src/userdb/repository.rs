//! Lookup, insert and delete over an in-memory collection.
//!
//! These functions never touch storage; commands load the collection through a
//! [`crate::store::DataStore`], run one of these, and save the result back.

use crate::model::User;

/// Linear scan; the first record with `id` wins when a store holds duplicates.
pub fn find_by_id<'a>(users: &'a [User], id: &str) -> Option<&'a User> {
    users.iter().find(|user| user.id == id)
}

/// Appends `user` unless its id is already present.
///
/// Returns the collection and whether the id already existed. When it did, the
/// collection comes back untouched.
pub fn add(mut users: Vec<User>, user: User) -> (Vec<User>, bool) {
    if find_by_id(&users, &user.id).is_some() {
        return (users, true);
    }
    users.push(user);
    (users, false)
}

/// Drops every record whose id matches, not just the first.
///
/// Returns the collection and whether anything matched.
pub fn remove(users: Vec<User>, id: &str) -> (Vec<User>, bool) {
    if find_by_id(&users, id).is_none() {
        return (users, false);
    }
    let kept = users.into_iter().filter(|user| user.id != id).collect();
    (kept, true)
}
