//! In-memory form of the data file

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::record::{Credential, Entry};

/// Site name -> credential. Keys are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: BTreeMap<String, Credential>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding exactly one entry
    pub fn single(entry: Entry) -> Self {
        let mut document = Self::new();
        document.upsert(entry);
        document
    }

    pub fn get(&self, site: &str) -> Option<&Credential> {
        self.entries.get(site)
    }

    /// Insert or replace the credential for the entry's site.
    /// Returns the credential it replaced, if any.
    pub fn upsert(&mut self, entry: Entry) -> Option<Credential> {
        let (site, credential) = entry.into_parts();
        self.entries.insert(site, credential)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
