use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, models::credential::PasswordCredential};

pub type DisplayName = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(i32);
impl ParticipantId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(String);
impl EmailAddress {
    /// Accepts `local@domain` with both parts non-empty
    pub fn new(value: String) -> Result<Self, DomainError> {
        match value.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(Self(value)),
            _ => Err(DomainError::InvalidEmail),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Participant data before the store has assigned an id
#[derive(Debug, Clone)]
pub struct NewParticipant {
    display_name: DisplayName,
    email: EmailAddress,
    password: PasswordCredential,
}

impl NewParticipant {
    pub fn new(
        display_name: DisplayName,
        email: EmailAddress,
        password: PasswordCredential,
    ) -> Result<Self, DomainError> {
        if display_name.trim().is_empty() {
            return Err(DomainError::EmptyField("display_name"));
        }

        Ok(Self {
            display_name,
            email,
            password,
        })
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
    pub fn password(&self) -> &PasswordCredential {
        &self.password
    }

    pub fn into_participant(self, id: ParticipantId) -> Participant {
        Participant {
            id,
            display_name: self.display_name,
            email: self.email,
            password: self.password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    display_name: DisplayName,
    email: EmailAddress,
    password: PasswordCredential,
}

impl Participant {
    pub fn id(&self) -> ParticipantId {
        self.id
    }
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
    pub fn password(&self) -> &PasswordCredential {
        &self.password
    }
}
