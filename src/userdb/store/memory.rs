use super::DataStore;
use crate::codec;
use crate::error::Result;
use crate::model::User;

/// In-memory storage for testing.
///
/// Holds the encoded bytes rather than a `Vec<User>` so that decoding behaves
/// the same as with a file. `None` means the store was never created.
#[derive(Default)]
pub struct InMemoryStore {
    bytes: Option<Vec<u8>>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose backing bytes are exactly `bytes`, valid JSON or not.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Some(bytes.into()),
            saves: 0,
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    /// Number of `save` calls so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&mut self) -> Result<Vec<User>> {
        codec::decode(self.bytes.get_or_insert_with(Vec::new))
    }

    fn save(&mut self, users: &[User]) -> Result<()> {
        self.bytes = Some(codec::encode(users)?);
        self.saves += 1;
        Ok(())
    }

    fn read_raw(&mut self) -> Result<Vec<u8>> {
        Ok(self.bytes.get_or_insert_with(Vec::new).clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds `count` users with ids `"1"..="count"`.
        pub fn with_users(mut self, count: usize) -> Self {
            let mut users = self.store.load().unwrap();
            for i in 1..=count {
                let email = format!("user{}@example.com", i);
                users.push(User::new(i.to_string(), email, 20 + i as u64));
            }
            self.store.save(&users).unwrap();
            self.store.saves = 0;
            self
        }

        pub fn with_user(mut self, user: User) -> Self {
            let mut users = self.store.load().unwrap();
            users.push(user);
            self.store.save(&users).unwrap();
            self.store.saves = 0;
            self
        }

        pub fn users(&mut self) -> Vec<User> {
            self.store.load().unwrap()
        }
    }
}
