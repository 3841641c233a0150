//! In-memory book store

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Ordered collection of catalog records.
///
/// Every method takes the lock once, so each call is atomic with respect to
/// the others. Lookups match the earliest-inserted record with a given id.
#[derive(Clone, Default)]
pub struct BookStore {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BookStore {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<Book>>> {
        self.books
            .read()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Book>>> {
        self.books
            .write()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    /// Snapshot of every book in insertion order
    pub fn all(&self) -> AppResult<Vec<Book>> {
        Ok(self.read()?.clone())
    }

    pub fn find(&self, id: i64) -> AppResult<Option<Book>> {
        Ok(self.read()?.iter().find(|b| b.id == id).cloned())
    }

    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    /// Append a book. With `allow_duplicate` unset, an id already present is a conflict.
    pub fn insert(&self, book: Book, allow_duplicate: bool) -> AppResult<Book> {
        let mut books = self.write()?;
        if !allow_duplicate && books.iter().any(|b| b.id == book.id) {
            return Err(AppError::Conflict(format!(
                "A book with id {} already exists",
                book.id
            )));
        }
        books.push(book.clone());
        Ok(book)
    }

    /// Replace title and author of the first book with `id`. Returns false when absent.
    pub fn update(&self, id: i64, title: String, author: Option<String>) -> AppResult<bool> {
        let mut books = self.write()?;
        match books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                book.title = title;
                book.author = author;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the first book with `id`. Returns false when absent.
    pub fn remove(&self, id: i64) -> AppResult<bool> {
        let mut books = self.write()?;
        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
