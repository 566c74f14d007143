use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the whole address book.
///
/// The book is read once at startup and written once at shutdown, so the
/// interface works on whole books rather than individual records. This keeps
/// the storage format out of the domain and lets tests swap in an in-memory
/// implementation.
pub trait AddressBookRepository {
    /// Load the persisted book, or an empty one if nothing was saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the whole book, replacing whatever was stored before.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
