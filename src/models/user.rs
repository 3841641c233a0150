//! User model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored security question and its expected answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityQuestion {
    pub question: String,
    pub answer: String,
}

impl SecurityQuestion {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Full user record as held by the user store.
///
/// Not serializable: responses go through [`PublicUser`].
#[derive(Clone)]
pub struct User {
    /// Unique, case-sensitive key
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    /// Order is significant for answer matching
    pub security_questions: Vec<SecurityQuestion>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("security_questions", &self.security_questions.len())
            .finish()
    }
}

/// Question text without its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PublicQuestion {
    pub question: String,
}

/// User view safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub email: String,
    pub security_questions: Vec<PublicQuestion>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            security_questions: user
                .security_questions
                .iter()
                .map(|q| PublicQuestion {
                    question: q.question.clone(),
                })
                .collect(),
        }
    }
}

/// Body of `POST /api/login`
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// One supplied answer in a password reset request
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SecurityAnswer {
    pub answer: String,
}

/// A password reset request that passed schema validation.
///
/// Built only by `services::reset::validate_reset_payload`.
#[derive(Clone, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct PasswordReset {
    pub new_password: String,
    pub security_questions: Vec<SecurityAnswer>,
}
