use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::AddressBookRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Storage format version written by this build.
pub const STORAGE_VERSION: u32 = 1;

/// On-disk document: `{"version": 1, "contacts": [...]}`
#[derive(Debug, Serialize)]
struct StoredBookRef<'a> {
    version: u32,
    contacts: &'a AddressBook,
}

#[derive(Debug, Deserialize)]
struct StoredBook {
    version: u32,
    #[serde(default)]
    contacts: AddressBook,
}

/// Address book repository backed by a single JSON file.
///
/// Records are re-validated on load through the domain types' `Deserialize`
/// impls, so a hand-edited file cannot smuggle raw phone numbers in.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the book is written to before being renamed into place.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredBook = serde_json::from_str(&content)?;
        if stored.version != STORAGE_VERSION {
            return Err(StorageError::UnsupportedVersion(stored.version));
        }

        info!(
            path = %self.path.display(),
            contacts = stored.contacts.len(),
            "Address book loaded"
        );
        Ok(stored.contacts)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let document = StoredBookRef {
            version: STORAGE_VERSION,
            contacts: book,
        };
        let json = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp = self.temp_path();
        debug!(path = %temp.display(), "Writing address book to temporary file");
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;

        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
