//! JSON file store: lookup, save and the read-modify-write cycle

use parking_lot::Mutex;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

use crate::document::Document;
use crate::error::StoreError;
use crate::record::{normalize_site, Credential, Entry};
use crate::Result;

/// Indentation used when writing the data file
pub const INDENT: &[u8] = b"    ";

#[derive(Clone)]
pub struct RecordStore {
    path: PathBuf,
    /// Serialises read-modify-write cycles between clones of this store.
    /// Other processes writing the same file are not covered.
    write_lock: Arc<Mutex<()>>,
}

impl RecordStore {
    /// Point a store at `path`. Nothing is read until an operation runs.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read and parse the data file.
    ///
    /// Returns `Ok(None)` only when the file does not exist. Any other read
    /// failure or a parse failure is an error.
    pub fn load(&self) -> Result<Option<Document>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let document = serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        Ok(Some(document))
    }

    /// Find the saved credential for `site`
    pub fn lookup(&self, site: &str) -> Result<Credential> {
        let site = normalize_site(site)?;

        let document = self
            .load()?
            .ok_or_else(|| StoreError::NoDocument(self.path.clone()))?;

        tracing::debug!(site = %site, "Looking up credential");

        document
            .get(site)
            .cloned()
            .ok_or_else(|| StoreError::SiteNotFound(site.to_string()))
    }

    /// Validate the inputs and save them, replacing any record for the site
    pub fn save(&self, site: &str, email: &str, password: &str) -> Result<()> {
        let entry = Entry::new(site, email, password)?;
        self.insert(entry)
    }

    /// Merge a validated entry into the data file and write it back.
    ///
    /// Creates the file when absent. Fails without writing when the existing
    /// file cannot be read or parsed.
    pub fn insert(&self, entry: Entry) -> Result<()> {
        let _guard = self.write_lock.lock();
        let site = entry.site().to_string();

        let document = match self.load()? {
            Some(mut document) => {
                let replaced = document.upsert(entry).is_some();
                tracing::debug!(site = %site, replaced, "Merged entry into data file");
                document
            }
            None => {
                tracing::info!(path = %self.path.display(), "Creating data file");
                Document::single(entry)
            }
        };

        self.write(&document)?;

        tracing::info!(site = %site, entries = document.len(), "Saved credential");

        Ok(())
    }

    /// Write the full document atomically.
    ///
    /// Data goes into a new, randomly named file beside the target which is
    /// owner-only before anything is written. It is fsynced, then renamed
    /// over the target.
    fn write(&self, document: &Document) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

        let data = to_pretty_json(document).map_err(|e| StoreError::io(&self.path, e.into()))?;

        let mut temp = tempfile::Builder::new()
            .prefix(&self.temp_prefix())
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| StoreError::io(dir, e))?;

        write_file(&mut temp, &data).map_err(|e| StoreError::io(temp.path(), e))?;

        // Dropping a failed temp file removes it
        temp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        Ok(())
    }

    fn temp_prefix(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!(".{name}.")
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

fn write_file(temp: &mut NamedTempFile, data: &[u8]) -> io::Result<()> {
    // Owner read/write only on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    temp.write_all(data)?;
    temp.as_file().sync_all()
}
