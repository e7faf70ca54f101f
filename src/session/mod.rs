// Session store module.
// Holds the signed-in user behind a trait so views can be given one explicitly.

mod file;

pub use file::FileSessionStore;

use crate::campaign::User;

/// Holder of the currently authenticated user.
pub trait SessionStore {
    /// The stored user, if anyone is signed in.
    fn stored_user(&self) -> Option<User>;

    /// Replace the stored user. `None` signs out.
    fn set_stored_user(&mut self, user: Option<User>);
}

/// Session store kept only in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    user: Option<User>,
}

impl MemorySessionStore {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }
}

impl SessionStore for MemorySessionStore {
    fn stored_user(&self) -> Option<User> {
        self.user.clone()
    }

    fn set_stored_user(&mut self, user: Option<User>) {
        self.user = user;
    }
}
