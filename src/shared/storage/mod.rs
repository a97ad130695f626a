mod file_local_store;
mod local_document;
mod local_store;

pub use file_local_store::FileLocalStore;
pub use local_document::{LocalDocument, LocalPersistence};
pub use local_store::{InMemoryLocalStore, LocalStore, LocalStoreError};
