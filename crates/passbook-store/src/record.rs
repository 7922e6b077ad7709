//! Credential records and validated entries

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::Result;

/// The stored value for one site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// User-supplied input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Site,
    Email,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Site => "Website",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A site and its credential, trimmed and checked for blank fields.
///
/// The only way to build one is [`Entry::new`], so an `Entry` is always
/// safe to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    site: String,
    credential: Credential,
}

impl Entry {
    pub fn new(site: &str, email: &str, password: &str) -> Result<Self> {
        let site = site.trim();
        let email = email.trim();
        let password = password.trim();

        let fields: Vec<Field> = [
            (Field::Site, site),
            (Field::Email, email),
            (Field::Password, password),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !fields.is_empty() {
            return Err(StoreError::Validation { fields });
        }

        Ok(Self {
            site: site.to_string(),
            credential: Credential::new(email, password),
        })
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn into_parts(self) -> (String, Credential) {
        (self.site, self.credential)
    }
}

/// Trim a site name for lookup, rejecting blank input
pub(crate) fn normalize_site(site: &str) -> Result<&str> {
    let site = site.trim();
    if site.is_empty() {
        return Err(StoreError::Validation {
            fields: vec![Field::Site],
        });
    }
    Ok(site)
}
