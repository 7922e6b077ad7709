//! Vault: the operations the UI layer calls
//!
//! Owns one password generator and one record store. Saving is split in
//! two so the UI can ask for confirmation in between:
//! `stage` validates and returns an [`Entry`] to show the user, `commit`
//! writes it.

use passbook_generator::PasswordGenerator;
use passbook_store::{Credential, Entry, RecordStore};

use crate::config::Config;
use crate::Result;

#[derive(Clone)]
pub struct Vault {
    config: Config,
    generator: PasswordGenerator,
    store: RecordStore,
}

impl Vault {
    pub fn new(config: Config) -> Self {
        let store = RecordStore::open(&config.data_file);

        tracing::debug!(data_file = %config.data_file.display(), "Opened vault");

        Self {
            config,
            generator: PasswordGenerator::new(),
            store,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn generate_password(&self) -> String {
        self.generator.generate()
    }

    pub fn lookup(&self, site: &str) -> Result<Credential> {
        Ok(self.store.lookup(site)?)
    }

    /// Validate details ahead of confirmation. Performs no I/O.
    pub fn stage(&self, site: &str, email: &str, password: &str) -> Result<Entry> {
        Ok(Entry::new(site, email, password)?)
    }

    /// Write a staged entry
    pub fn commit(&self, entry: Entry) -> Result<()> {
        Ok(self.store.insert(entry)?)
    }

    /// Validate and write in one step
    pub fn save(&self, site: &str, email: &str, password: &str) -> Result<()> {
        Ok(self.store.save(site, email, password)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use passbook_store::{ErrorKind, StoreError};
    use tempfile::TempDir;

    fn temp_vault() -> (TempDir, Vault) {
        let dir = TempDir::new().unwrap();
        let vault = Vault::new(Config::new(dir.path().to_path_buf()));
        (dir, vault)
    }

    #[test]
    fn test_end_to_end() {
        let (_dir, vault) = temp_vault();
        assert!(!vault.store().exists());

        vault.save("example.com", "a@b.com", "Zz1!").unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&vault.config().data_file).unwrap())
                .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "example.com": { "email": "a@b.com", "password": "Zz1!" } })
        );

        vault.save("bank.test", "c@d.com", "Yy2@").unwrap();
        assert_eq!(
            vault.lookup("example.com").unwrap(),
            Credential::new("a@b.com", "Zz1!")
        );
        assert_eq!(
            vault.lookup("bank.test").unwrap(),
            Credential::new("c@d.com", "Yy2@")
        );
    }

    #[test]
    fn test_stage_then_commit() {
        let (_dir, vault) = temp_vault();

        let entry = vault.stage(" example.com ", "a@b.com", "Zz1!").unwrap();
        assert_eq!(entry.site(), "example.com");
        // Staging alone writes nothing
        assert!(!vault.store().exists());

        vault.commit(entry).unwrap();
        assert!(vault.lookup("example.com").is_ok());
    }

    #[test]
    fn test_stage_rejects_blank_fields() {
        let (_dir, vault) = temp_vault();

        let err = vault.stage("example.com", "", "Zz1!").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Validation));
        assert!(!vault.store().exists());
    }

    #[test]
    fn test_lookup_distinguishes_missing_file_and_site() {
        let (_dir, vault) = temp_vault();

        let err = vault.lookup("example.com").unwrap_err();
        assert!(matches!(err, CoreError::Store(StoreError::NoDocument(_))));

        vault.save("bank.test", "c@d.com", "Yy2@").unwrap();
        let err = vault.lookup("example.com").unwrap_err();
        assert!(matches!(err, CoreError::Store(StoreError::SiteNotFound(_))));
    }

    #[test]
    fn test_generated_password_can_be_saved() {
        let (_dir, vault) = temp_vault();

        let password = vault.generate_password();
        vault
            .save("example.com", &vault.config().default_email, &password)
            .unwrap();

        let credential = vault.lookup("example.com").unwrap();
        assert_eq!(credential.email, "example@email.com");
        assert_eq!(credential.password, password);
    }

    #[test]
    fn test_clones_share_the_data_file() {
        let (_dir, vault) = temp_vault();
        let other = vault.clone();

        other.save("example.com", "a@b.com", "Zz1!").unwrap();
        assert_eq!(
            vault.lookup("example.com").unwrap(),
            Credential::new("a@b.com", "Zz1!")
        );
    }
}
