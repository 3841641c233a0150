//! Book (catalog record) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Externally supplied identifier; never changes after creation
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Body of `POST /api/books` and `PUT /api/books/{id}`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    /// Required on create, ignored on update
    pub id: Option<i64>,
    #[validate(
        required(message = "Book title is required"),
        length(min = 1, message = "Book title is required")
    )]
    pub title: Option<String>,
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_requires_title() {
        let missing = BookPayload {
            id: Some(7),
            author: Some("Anonymous".to_string()),
            ..Default::default()
        };
        assert!(missing.validate().is_err());

        let empty = BookPayload {
            title: Some(String::new()),
            ..missing.clone()
        };
        assert!(empty.validate().is_err());

        let present = BookPayload {
            title: Some("Dune".to_string()),
            ..missing
        };
        assert!(present.validate().is_ok());
    }

    #[test]
    fn test_author_omitted_when_absent() {
        let book = Book {
            id: 3,
            title: "Beowulf".to_string(),
            author: None,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "title": "Beowulf" }));
    }
}
