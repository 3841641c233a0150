//! Repository layer: in-memory stores for books and users

pub mod books;
pub mod seed;
pub mod users;

use crate::{error::AppResult, services::password::PasswordHashing};

/// Main repository struct holding both stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BookStore,
    pub users: users::UserStore,
}

impl Repository {
    pub fn new(books: books::BookStore, users: users::UserStore) -> Self {
        Self { books, users }
    }

    /// Repository preloaded with the seed catalog and seed accounts
    pub fn seeded(hasher: &PasswordHashing) -> AppResult<Self> {
        Ok(Self {
            books: books::BookStore::new(seed::books()),
            users: users::UserStore::new(seed::users(hasher)?),
        })
    }
}
