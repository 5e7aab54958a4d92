use serde::{Deserialize, Serialize};

/// Value object holding a participant's stored password credential.
///
/// The store treats it as an opaque string. Intake hashes the plain password
/// before constructing one (see `RegisterParticipantUsecase`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCredential(String);

impl PasswordCredential {
    /// Wrap an already prepared credential string
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
