//! Password hashing with Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::{
    config::SecurityConfig,
    error::{AppError, AppResult},
};

/// One-way hash and verify, configured from [`SecurityConfig`]
#[derive(Clone)]
pub struct PasswordHashing {
    params: Params,
}

impl PasswordHashing {
    pub fn new(config: &SecurityConfig) -> AppResult<Self> {
        let params = Params::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a password into a PHC string with a fresh salt
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2().hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// Check a password against a stored PHC string.
    ///
    /// The cost parameters embedded in the stored hash are used, so hashes
    /// made under an older configuration still verify.
    pub fn verify(&self, password: &str, stored_hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(stored_hash)?;
        match self
            .argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_hasher() -> PasswordHashing {
    PasswordHashing::new(&SecurityConfig {
        hash_memory_kib: 8,
        hash_iterations: 1,
        hash_parallelism: 1,
    })
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = test_hasher();
        let hash = hasher.hash("potter").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("potter"));
        assert!(hasher.verify("potter", &hash).unwrap());
        assert!(!hasher.verify("Potter", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let hasher = test_hasher();
        assert_ne!(hasher.hash("same").unwrap(), hasher.hash("same").unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = test_hasher();
        assert!(matches!(
            hasher.verify("potter", "not-a-phc-string"),
            Err(AppError::PasswordHash(_))
        ));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let result = PasswordHashing::new(&SecurityConfig {
            hash_memory_kib: 1,
            hash_iterations: 0,
            hash_parallelism: 1,
        });
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
