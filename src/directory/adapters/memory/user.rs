//! In-memory repository for user directory tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
///
/// Keeps an explicit insertion log so `list` preserves creation order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, User>,
    passport_index: HashMap<String, UserId>,
    insertion_order: Vec<UserId>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Checks whether a passport key is taken by a user other than `id`.
fn passport_taken_by_other(state: &InMemoryUserState, key: &str, id: UserId) -> bool {
    state
        .passport_index
        .get(key)
        .is_some_and(|owner| *owner != id)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::DuplicateUser(user.id()));
        }

        let passport_key = user.passport().to_string();
        if state.passport_index.contains_key(&passport_key) {
            return Err(UserRepositoryError::DuplicatePassport(
                user.passport().clone(),
            ));
        }

        state.passport_index.insert(passport_key, user.id());
        state.insertion_order.push(user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_passport_key = state
            .users
            .get(&user.id())
            .ok_or(UserRepositoryError::NotFound(user.id()))?
            .passport()
            .to_string();

        let new_passport_key = user.passport().to_string();
        if passport_taken_by_other(&state, &new_passport_key, user.id()) {
            return Err(UserRepositoryError::DuplicatePassport(
                user.passport().clone(),
            ));
        }

        state.passport_index.remove(&old_passport_key);
        state.passport_index.insert(new_passport_key, user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let removed = state
            .users
            .remove(&id)
            .ok_or(UserRepositoryError::NotFound(id))?;
        state.passport_index.remove(&removed.passport().to_string());
        state.insertion_order.retain(|entry| *entry != id);
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.users.get(&id).cloned())
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.state.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect())
    }
}
