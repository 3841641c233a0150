//! In-memory user store

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::user::User,
};

/// Users keyed by exact email
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<IndexMap<String, User>>>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.email.clone(), user))
            .collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, IndexMap<String, User>>> {
        self.users
            .read()
            .map_err(|_| AppError::Internal("user store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, IndexMap<String, User>>> {
        self.users
            .write()
            .map_err(|_| AppError::Internal("user store lock poisoned".to_string()))
    }

    /// Get user by email (case-sensitive)
    pub fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.read()?.get(email).cloned())
    }

    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    /// Overwrite the stored hash. Returns the updated user, or None when absent.
    pub fn set_password_hash(&self, email: &str, password_hash: String) -> AppResult<Option<User>> {
        let mut users = self.write()?;
        Ok(users.get_mut(email).map(|user| {
            user.password_hash = password_hash;
            user.clone()
        }))
    }
}
