//! Data models for In-N-Out-Books

pub mod book;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookPayload};
pub use user::{LoginRequest, PasswordReset, PublicUser, SecurityAnswer, SecurityQuestion, User};
