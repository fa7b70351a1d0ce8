use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserRecord};

/// Persistence port for users.
///
/// Implementations turn a storage-level email uniqueness violation during
/// [`save`](UserRepository::save) into [`UserError::EmailAlreadyExists`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, in no particular order
    async fn find_all(&self) -> UserResult<Vec<User>>;

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Users born within `[from, to]`, both ends inclusive
    async fn find_by_birthday_range(&self, from: NaiveDate, to: NaiveDate) -> UserResult<Vec<User>>;

    /// Inserts a new record with a fresh id, or overwrites an existing one.
    async fn save(&self, user: UserRecord) -> UserResult<User>;

    async fn delete_by_id(&self, id: i32) -> UserResult<()>;
}

#[derive(Debug)]
struct Store {
    users: HashMap<i32, User>,
    next_id: i32,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Ids come from a counter that only moves forward, so deleted ids are
/// never handed out again.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_birthday_range(&self, from: NaiveDate, to: NaiveDate) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store
            .users
            .values()
            .filter(|u| (from..=to).contains(&u.date_of_birth))
            .cloned()
            .collect())
    }

    async fn save(&self, record: UserRecord) -> UserResult<User> {
        // Email check and write happen under one lock, so concurrent saves
        // cannot both claim the same address
        let mut store = self.store.write().await;

        let own_id = match &record {
            UserRecord::New(_) => None,
            UserRecord::Existing(user) => Some(user.id),
        };
        let email_taken = store
            .users
            .values()
            .any(|u| u.email == record.email() && Some(u.id) != own_id);
        if email_taken {
            return Err(UserError::EmailAlreadyExists(record.email().to_string()));
        }

        let user = match record {
            UserRecord::New(new_user) => {
                let id = store.next_id;
                store.next_id += 1;
                let user = new_user.with_id(id);
                tracing::info!(user_id = user.id, "Created user");
                user
            }
            UserRecord::Existing(user) => {
                if !store.users.contains_key(&user.id) {
                    return Err(UserError::NotFound(user.id));
                }
                tracing::info!(user_id = user.id, "Updated user");
                user
            }
        };

        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: i32) -> UserResult<()> {
        let mut store = self.store.write().await;

        if store.users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(())
    }
}
