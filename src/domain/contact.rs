use super::*;
use serde::{Deserialize, Serialize};

/// One persisted row of the contacts table.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// The user-editable fields of a contact, as passed to create and update.
/// Fields are only set through `new`, so they are always trimmed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ContactDraft {
    name: String,
    phone: String,
    email: String,
    address: String,
}

pub struct ValidationReq;

impl ValidationReq {
    pub fn required_fields() -> String {
        "Name and Phone are required.".to_string()
    }
}

impl ContactDraft {
    pub fn new(name: &str, phone: &str, email: &str, address: &str) -> Self {
        ContactDraft {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
            address: address.trim().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn validate(&self) -> Result<(), AppError> {
        // Only name and phone are mandatory. Email and address may be empty.
        if self.name.is_empty() || self.phone.is_empty() {
            return Err(AppError::Validation(ValidationReq::required_fields()));
        }
        Ok(())
    }

    pub fn into_contact(self, id: i64) -> Contact {
        Contact {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
        }
    }
}

impl Contact {
    /// Draft pre-filled with this contact's current fields, used by edit.
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft::new(&self.name, &self.phone, &self.email, &self.address)
    }

    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?')
    }
}
