use argon2::{
    Argon2, PasswordHash as Argon2Hash,
    password_hash::{PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::domain::{
    error::DomainError, models::credential::PasswordCredential,
    services::password_service::PasswordHasher,
};

#[derive(Clone, Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<PasswordCredential, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(plain_password.as_bytes(), &salt)
            .map_err(|_| DomainError::InvalidCredentials)?
            .to_string();

        Ok(PasswordCredential::new(hash))
    }

    fn verify(
        &self,
        plain_password: &str,
        credential: &PasswordCredential,
    ) -> Result<bool, DomainError> {
        let parsed_hash =
            Argon2Hash::new(credential.as_str()).map_err(|_| DomainError::InvalidCredentials)?;

        Ok(self
            .argon2
            .verify_password(plain_password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
