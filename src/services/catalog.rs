//! Catalog management service

use validator::Validate;

use crate::{
    config::{CatalogConfig, DeleteMissing},
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    repository::Repository,
    services::identifier,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(repository: Repository, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    /// Every book in insertion order
    pub fn list_all(&self) -> AppResult<Vec<Book>> {
        self.repository.books.all()
    }

    /// Get a book by its raw path id
    pub fn get_by_id(&self, raw_id: &str) -> AppResult<Book> {
        let id = identifier::coerce(raw_id)?;
        self.repository
            .books
            .find(id)?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Create a new book from the payload as given
    pub fn create(&self, payload: BookPayload) -> AppResult<Book> {
        payload.validate().map_err(|e| {
            tracing::debug!("Rejected book payload: {}", e);
            AppError::Validation("Book title is required".to_string())
        })?;

        let BookPayload { id, title, author } = payload;
        let id = id.ok_or_else(|| AppError::Validation("Book ID is required".to_string()))?;
        let title = title.ok_or_else(|| AppError::Validation("Book title is required".to_string()))?;

        let created = self.repository.books.insert(
            Book { id, title, author },
            self.config.allow_duplicate_ids,
        )?;
        tracing::info!("Catalog: created book id={}", created.id);
        Ok(created)
    }

    /// Delete a book. An absent id succeeds unless configured otherwise.
    pub fn delete_by_id(&self, raw_id: &str) -> AppResult<()> {
        let id = identifier::coerce(raw_id)?;
        let removed = self.repository.books.remove(id)?;

        if removed {
            tracing::info!("Catalog: deleted book id={}", id);
        } else if self.config.delete_missing == DeleteMissing::NotFound {
            return Err(AppError::NotFound("Book not found".to_string()));
        } else {
            tracing::debug!("Catalog: delete of absent book id={} ignored", id);
        }
        Ok(())
    }

    /// Replace title and author of an existing book. The id never changes.
    pub fn update(&self, raw_id: &str, patch: BookPayload) -> AppResult<()> {
        let id = identifier::coerce(raw_id)?;

        if patch.validate().is_err() {
            return Err(AppError::Validation("Bad Request".to_string()));
        }
        let title = patch
            .title
            .ok_or_else(|| AppError::Validation("Bad Request".to_string()))?;

        if !self.repository.books.update(id, title, patch.author)? {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        tracing::info!("Catalog: updated book id={}", id);
        Ok(())
    }
}
