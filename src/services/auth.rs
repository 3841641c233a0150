//! Credential authentication service

use crate::{
    error::{AppError, AppResult},
    models::user::LoginRequest,
    repository::Repository,
    services::password::PasswordHashing,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    hasher: PasswordHashing,
}

impl AuthService {
    pub fn new(repository: Repository, hasher: PasswordHashing) -> Self {
        Self { repository, hasher }
    }

    /// Verify an email/password pair.
    ///
    /// Unknown email and wrong password yield the same error.
    pub fn login(&self, request: &LoginRequest) -> AppResult<()> {
        let (Some(email), Some(password)) = (&request.email, &request.password) else {
            return Err(AppError::BadRequest("Bad Request".to_string()));
        };

        let Some(user) = self.repository.users.find_by_email(email)? else {
            tracing::warn!("Login rejected: unknown account");
            return Err(unauthorized());
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            tracing::warn!("Login rejected for {}: wrong password", user.email);
            return Err(unauthorized());
        }

        tracing::info!("Login succeeded for {}", user.email);
        Ok(())
    }
}

fn unauthorized() -> AppError {
    AppError::Unauthorized("Unauthorized".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::user::User,
        repository::{books::BookStore, users::UserStore},
        services::password::test_hasher,
    };

    fn service() -> AuthService {
        let hasher = test_hasher();
        let users = UserStore::new(vec![User {
            email: "harry@hogwarts.edu".to_string(),
            password_hash: hasher.hash("potter").unwrap(),
            security_questions: vec![],
        }]);
        AuthService::new(Repository::new(BookStore::default(), users), hasher)
    }

    fn request(email: Option<&str>, password: Option<&str>) -> LoginRequest {
        LoginRequest {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_login_success() {
        assert!(service()
            .login(&request(Some("harry@hogwarts.edu"), Some("potter")))
            .is_ok());
    }

    #[test]
    fn test_missing_fields_are_bad_request() {
        let auth = service();
        for req in [
            request(None, Some("potter")),
            request(Some("harry@hogwarts.edu"), None),
            request(None, None),
        ] {
            assert!(matches!(auth.login(&req), Err(AppError::BadRequest(_))));
        }
    }

    #[test]
    fn test_unknown_email_and_wrong_password_look_alike() {
        let auth = service();
        let unknown = auth
            .login(&request(Some("voldemort@hogwarts.edu"), Some("potter")))
            .unwrap_err();
        let wrong = auth
            .login(&request(Some("harry@hogwarts.edu"), Some("malfoy")))
            .unwrap_err();

        assert_eq!(unknown.status(), wrong.status());
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[test]
    fn test_email_is_case_sensitive() {
        assert!(matches!(
            service().login(&request(Some("HARRY@hogwarts.edu"), Some("potter"))),
            Err(AppError::Unauthorized(_))
        ));
    }
}
