use crate::domain::{error::DomainError, models::credential::PasswordCredential};

/// Service for hashing and verifying participant passwords
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain text password into a storable credential
    fn hash(&self, plain_password: &str) -> Result<PasswordCredential, DomainError>;

    /// Verify a plain text password against a stored credential
    fn verify(
        &self,
        plain_password: &str,
        credential: &PasswordCredential,
    ) -> Result<bool, DomainError>;
}
