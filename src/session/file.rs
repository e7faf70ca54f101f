// File-backed session store.
// Keeps the signed-in user in a JSON file so a session survives restarts.

use std::path::PathBuf;

use crate::campaign::User;
use crate::error::Result;
use crate::store;

use super::SessionStore;

/// Session store persisted to `session.json`.
///
/// The user is cached in memory; every change is written through. Write
/// failures are logged and leave the in-memory value updated.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    user: Option<User>,
}

impl FileSessionStore {
    /// Open the store, reading any previously saved user.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let user = store::read_json::<User>(&path)?;
        tracing::debug!(path = %path.display(), signed_in = user.is_some(), "opened session store");
        Ok(Self { path, user })
    }

    fn persist(&self) -> Result<()> {
        match &self.user {
            Some(user) => store::write_json(&self.path, user),
            None => store::delete(&self.path),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn stored_user(&self) -> Option<User> {
        self.user.clone()
    }

    fn set_stored_user(&mut self, user: Option<User>) {
        self.user = user;
        if let Err(e) = self.persist() {
            tracing::error!(path = %self.path.display(), error = %e, "failed to persist session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_session_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");

        let mut session = FileSessionStore::open(&path).unwrap();
        assert!(session.stored_user().is_none());

        session.set_stored_user(Some(User::with_role("agency")));
        assert!(path.exists());

        let reopened = FileSessionStore::open(&path).unwrap();
        assert_eq!(
            reopened.stored_user().and_then(|u| u.role),
            Some("agency".to_string())
        );
    }

    #[test]
    fn test_sign_out_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");

        let mut session = FileSessionStore::open(&path).unwrap();
        session.set_stored_user(Some(User::with_role("client")));
        session.set_stored_user(None);

        assert!(!path.exists());
        assert!(FileSessionStore::open(&path).unwrap().stored_user().is_none());
    }
}
