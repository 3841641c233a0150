//! Seed catalog and accounts loaded at startup

use crate::{
    error::AppResult,
    models::{
        book::Book,
        user::{SecurityQuestion, User},
    },
    services::password::PasswordHashing,
};

const PET_QUESTION: &str = "What is your pet's name?";
const BOOK_QUESTION: &str = "What is your favorite book?";
const MAIDEN_NAME_QUESTION: &str = "What is your mother's maiden name?";

pub fn books() -> Vec<Book> {
    [
        (1, "The Fellowship of the Ring", "J.R.R. Tolkien"),
        (2, "Harry Potter and the Philosopher's Stone", "J.K. Rowling"),
        (3, "The Two Towers", "J.R.R. Tolkien"),
        (4, "Harry Potter and the Chamber of Secrets", "J.K. Rowling"),
        (5, "The Return of the King", "J.R.R. Tolkien"),
    ]
    .into_iter()
    .map(|(id, title, author)| Book {
        id,
        title: title.to_string(),
        author: Some(author.to_string()),
    })
    .collect()
}

/// Seed accounts. Passwords are hashed here and the plain text is dropped.
pub fn users(hasher: &PasswordHashing) -> AppResult<Vec<User>> {
    [
        (
            "harry@hogwarts.edu",
            "potter",
            ["Hedwig", "Quidditch Through the Ages", "Evans"],
        ),
        (
            "hermione@hogwarts.edu",
            "granger",
            ["Crookshanks", "Hogwarts: A History", "Granger"],
        ),
        (
            "ron@hogwarts.edu",
            "weasley",
            ["Scabbers", "Martin Miggs, the Mad Muggle", "Prewett"],
        ),
    ]
    .into_iter()
    .map(|(email, password, [pet, book, maiden_name])| -> AppResult<User> {
        Ok(User {
            email: email.to_string(),
            password_hash: hasher.hash(password)?,
            security_questions: vec![
                SecurityQuestion::new(PET_QUESTION, pet),
                SecurityQuestion::new(BOOK_QUESTION, book),
                SecurityQuestion::new(MAIDEN_NAME_QUESTION, maiden_name),
            ],
        })
    })
    .collect()
}
