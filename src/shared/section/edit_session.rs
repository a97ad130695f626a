// src/shared/section/edit_session.rs
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("No active edit session")]
    NotOpen,

    #[error("Only an existing record can be deleted")]
    NotEditing,
}

/// The modal bound to a section: closed, a new record, or an existing one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EditSession<K, D> {
    Closed,
    Creating { draft: D },
    Editing { key: K, draft: D },
}

impl<K, D> Default for EditSession<K, D> {
    fn default() -> Self {
        EditSession::Closed
    }
}

impl<K: Clone, D: Clone> EditSession<K, D> {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditSession::Closed)
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            EditSession::Closed => None,
            EditSession::Creating { draft } | EditSession::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn key(&self) -> Option<&K> {
        match self {
            EditSession::Editing { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn open_new(&mut self, draft: D) {
        *self = EditSession::Creating { draft };
    }

    pub fn open_existing(&mut self, key: K, draft: D) {
        *self = EditSession::Editing { key, draft };
    }

    pub fn replace_draft(&mut self, next: D) -> Result<(), SessionError> {
        match self {
            EditSession::Closed => Err(SessionError::NotOpen),
            EditSession::Creating { draft } | EditSession::Editing { draft, .. } => {
                *draft = next;
                Ok(())
            }
        }
    }

    /// Key and draft to submit; the key is `None` for a new record.
    pub fn pending(&self) -> Result<(Option<K>, D), SessionError> {
        match self {
            EditSession::Closed => Err(SessionError::NotOpen),
            EditSession::Creating { draft } => Ok((None, draft.clone())),
            EditSession::Editing { key, draft } => Ok((Some(key.clone()), draft.clone())),
        }
    }

    pub fn deletable(&self) -> Result<(K, D), SessionError> {
        match self {
            EditSession::Closed => Err(SessionError::NotOpen),
            EditSession::Creating { .. } => Err(SessionError::NotEditing),
            EditSession::Editing { key, draft } => Ok((key.clone(), draft.clone())),
        }
    }

    pub fn close(&mut self) {
        *self = EditSession::Closed;
    }
}
