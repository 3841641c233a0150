//! Security-question password reset

use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    error::{AppError, AppResult},
    models::user::{PasswordReset, PublicUser, SecurityAnswer, SecurityQuestion},
    repository::Repository,
    services::password::PasswordHashing,
};

const NEW_PASSWORD: &str = "newPassword";
const SECURITY_QUESTIONS: &str = "securityQuestions";
const ANSWER: &str = "answer";

/// First rule a reset payload broke
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("payload is not an object")]
    NotAnObject,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("securityQuestions[{0}] is not an object")]
    ItemNotAnObject(usize),
    #[error("securityQuestions[{0}] is missing `answer`")]
    ItemMissingAnswer(usize),
    #[error("securityQuestions[{index}] has unknown field `{field}`")]
    ItemUnknownField { index: usize, field: String },
    #[error("securityQuestions[{0}].answer must be a string")]
    ItemAnswerNotString(usize),
}

/// Validate a raw reset payload.
///
/// Accepted shape, with no other properties at either level:
/// `{ "newPassword": string, "securityQuestions": [ { "answer": string }, ... ] }`
pub fn validate_reset_payload(payload: &Value) -> Result<PasswordReset, SchemaViolation> {
    let object = payload.as_object().ok_or(SchemaViolation::NotAnObject)?;

    if let Some(unknown) = object
        .keys()
        .find(|key| key.as_str() != NEW_PASSWORD && key.as_str() != SECURITY_QUESTIONS)
    {
        return Err(SchemaViolation::UnknownField(unknown.clone()));
    }

    let new_password = object
        .get(NEW_PASSWORD)
        .ok_or(SchemaViolation::MissingField(NEW_PASSWORD))?
        .as_str()
        .ok_or(SchemaViolation::WrongType {
            field: NEW_PASSWORD,
            expected: "a string",
        })?;

    let items = object
        .get(SECURITY_QUESTIONS)
        .ok_or(SchemaViolation::MissingField(SECURITY_QUESTIONS))?
        .as_array()
        .ok_or(SchemaViolation::WrongType {
            field: SECURITY_QUESTIONS,
            expected: "an array",
        })?;

    let security_questions = items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_answer(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PasswordReset {
        new_password: new_password.to_string(),
        security_questions,
    })
}

fn validate_answer(index: usize, item: &Value) -> Result<SecurityAnswer, SchemaViolation> {
    let object: &Map<String, Value> = item
        .as_object()
        .ok_or(SchemaViolation::ItemNotAnObject(index))?;

    if let Some(unknown) = object.keys().find(|key| key.as_str() != ANSWER) {
        return Err(SchemaViolation::ItemUnknownField {
            index,
            field: unknown.clone(),
        });
    }

    let answer = object
        .get(ANSWER)
        .ok_or(SchemaViolation::ItemMissingAnswer(index))?
        .as_str()
        .ok_or(SchemaViolation::ItemAnswerNotString(index))?;

    Ok(SecurityAnswer {
        answer: answer.to_string(),
    })
}

/// Positional, case-sensitive comparison of stored and supplied answers.
///
/// A user without stored questions never matches.
pub fn answers_match(stored: &[SecurityQuestion], supplied: &[SecurityAnswer]) -> bool {
    !stored.is_empty()
        && stored.len() == supplied.len()
        && stored
            .iter()
            .zip(supplied)
            .all(|(expected, given)| expected.answer == given.answer)
}

#[derive(Clone)]
pub struct ResetService {
    repository: Repository,
    hasher: PasswordHashing,
}

impl ResetService {
    pub fn new(repository: Repository, hasher: PasswordHashing) -> Self {
        Self { repository, hasher }
    }

    /// Reset a password after verifying the user's security answers
    pub fn reset_password(&self, email: &str, payload: &Value) -> AppResult<PublicUser> {
        let reset = validate_reset_payload(payload).map_err(|violation| {
            tracing::debug!("Rejected reset payload: {}", violation);
            AppError::BadRequest("Bad Request".to_string())
        })?;

        let user = self
            .repository
            .users
            .find_by_email(email)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !answers_match(&user.security_questions, &reset.security_questions) {
            tracing::warn!("Password reset rejected for {}: answers do not match", email);
            return Err(AppError::Unauthorized("Unauthorized".to_string()));
        }

        let password_hash = self.hasher.hash(&reset.new_password)?;
        let updated = self
            .repository
            .users
            .set_password_hash(email, password_hash)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!("Password reset for {}", updated.email);
        Ok(PublicUser::from(&updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::user::User,
        repository::{books::BookStore, users::UserStore},
        services::password::test_hasher,
    };
    use serde_json::json;

    const EMAIL: &str = "harry@hogwarts.edu";

    fn stored() -> Vec<SecurityQuestion> {
        vec![
            SecurityQuestion::new("What is your pet's name?", "Hedwig"),
            SecurityQuestion::new("What is your favorite book?", "Quidditch Through the Ages"),
            SecurityQuestion::new("What is your mother's maiden name?", "Evans"),
        ]
    }

    fn supplied(answers: &[&str]) -> Vec<SecurityAnswer> {
        answers
            .iter()
            .map(|a| SecurityAnswer {
                answer: a.to_string(),
            })
            .collect()
    }

    fn service() -> (ResetService, Repository) {
        let hasher = test_hasher();
        let users = UserStore::new(vec![User {
            email: EMAIL.to_string(),
            password_hash: hasher.hash("potter").unwrap(),
            security_questions: stored(),
        }]);
        let repository = Repository::new(BookStore::default(), users);
        (ResetService::new(repository.clone(), hasher), repository)
    }

    fn valid_payload() -> Value {
        json!({
            "newPassword": "password",
            "securityQuestions": [
                { "answer": "Hedwig" },
                { "answer": "Quidditch Through the Ages" },
                { "answer": "Evans" }
            ]
        })
    }

    #[test]
    fn test_schema_accepts_valid_payload() {
        let reset = validate_reset_payload(&valid_payload()).unwrap();
        assert_eq!(reset.new_password, "password");
        assert_eq!(reset.security_questions.len(), 3);
        assert_eq!(reset.security_questions[2].answer, "Evans");
    }

    #[test]
    fn test_schema_accepts_empty_answer_list() {
        let reset =
            validate_reset_payload(&json!({ "newPassword": "x", "securityQuestions": [] })).unwrap();
        assert!(reset.security_questions.is_empty());
    }

    #[test]
    fn test_schema_rejects_non_object() {
        assert_eq!(
            validate_reset_payload(&json!(["Hedwig"])).err(),
            Some(SchemaViolation::NotAnObject)
        );
    }

    #[test]
    fn test_schema_rejects_missing_fields() {
        assert_eq!(
            validate_reset_payload(&json!({ "securityQuestions": [] })).err(),
            Some(SchemaViolation::MissingField("newPassword"))
        );
        assert_eq!(
            validate_reset_payload(&json!({ "newPassword": "x" })).err(),
            Some(SchemaViolation::MissingField("securityQuestions"))
        );
    }

    #[test]
    fn test_schema_rejects_extra_property() {
        let mut payload = valid_payload();
        payload["email"] = json!("harry@hogwarts.edu");
        assert_eq!(
            validate_reset_payload(&payload).err(),
            Some(SchemaViolation::UnknownField("email".to_string()))
        );
    }

    #[test]
    fn test_schema_rejects_wrong_types() {
        assert!(matches!(
            validate_reset_payload(&json!({ "newPassword": 42, "securityQuestions": [] })),
            Err(SchemaViolation::WrongType { field: "newPassword", .. })
        ));
        assert!(matches!(
            validate_reset_payload(&json!({ "newPassword": "x", "securityQuestions": {} })),
            Err(SchemaViolation::WrongType { field: "securityQuestions", .. })
        ));
    }

    #[test]
    fn test_schema_rejects_bad_items() {
        let cases = [
            (json!(["Hedwig"]), SchemaViolation::ItemNotAnObject(0)),
            (json!([{ "answer": "Hedwig" }, {}]), SchemaViolation::ItemMissingAnswer(1)),
            (json!([{ "answer": 1 }]), SchemaViolation::ItemAnswerNotString(0)),
            (
                json!([{ "answer": "Hedwig", "question": "Pet?" }]),
                SchemaViolation::ItemUnknownField {
                    index: 0,
                    field: "question".to_string(),
                },
            ),
        ];
        for (items, expected) in cases {
            let payload = json!({ "newPassword": "x", "securityQuestions": items });
            assert_eq!(validate_reset_payload(&payload).err(), Some(expected));
        }
    }

    #[test]
    fn test_answers_match_positionally() {
        let stored = stored();
        assert!(answers_match(
            &stored,
            &supplied(&["Hedwig", "Quidditch Through the Ages", "Evans"])
        ));
        // permuted
        assert!(!answers_match(
            &stored,
            &supplied(&["Evans", "Hedwig", "Quidditch Through the Ages"])
        ));
        // one altered
        assert!(!answers_match(
            &stored,
            &supplied(&["Hedwig", "Quidditch Through the Ages", "evans"])
        ));
        // length mismatch
        assert!(!answers_match(&stored, &supplied(&["Hedwig"])));
        assert!(!answers_match(&stored, &[]));
        assert!(!answers_match(&[], &[]));
    }

    #[test]
    fn test_reset_replaces_hash() {
        let (reset, repository) = service();
        let before = repository.users.find_by_email(EMAIL).unwrap().unwrap();

        let user = reset.reset_password(EMAIL, &valid_payload()).unwrap();
        assert_eq!(user.email, EMAIL);
        assert_eq!(user.security_questions.len(), 3);

        let after = repository.users.find_by_email(EMAIL).unwrap().unwrap();
        assert_ne!(before.password_hash, after.password_hash);
        let hasher = test_hasher();
        assert!(hasher.verify("password", &after.password_hash).unwrap());
        assert!(!hasher.verify("potter", &after.password_hash).unwrap());
    }

    #[test]
    fn test_reset_outcomes() {
        let (reset, repository) = service();
        let original = repository.users.find_by_email(EMAIL).unwrap().unwrap();

        assert!(matches!(
            reset.reset_password(EMAIL, &json!({ "newPassword": "x" })),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            reset.reset_password("nobody@hogwarts.edu", &valid_payload()),
            Err(AppError::NotFound(_))
        ));

        let mut altered = valid_payload();
        altered["securityQuestions"][1]["answer"] = json!("Hogwarts: A History");
        assert!(matches!(
            reset.reset_password(EMAIL, &altered),
            Err(AppError::Unauthorized(_))
        ));

        let unchanged = repository.users.find_by_email(EMAIL).unwrap().unwrap();
        assert_eq!(original.password_hash, unchanged.password_hash);
    }

    #[test]
    fn test_schema_checked_before_user_lookup() {
        let (reset, _) = service();
        assert!(matches!(
            reset.reset_password("nobody@hogwarts.edu", &json!({})),
            Err(AppError::BadRequest(_))
        ));
    }
}
