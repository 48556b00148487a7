//! In-process user cache
//!
//! Keyed by user id, one entry per id. Reads run concurrently; an upsert
//! takes the write lock, so no reader ever observes a half-applied entry.
//! Nickname lookup is a linear scan; the cache holds one tenant's users,
//! which stays small.

use std::collections::HashMap;
use std::sync::RwLock;

use roster_core::User;

/// Thread-safe cache of user records.
pub struct UserCache {
    users: RwLock<HashMap<String, User>>,
}

impl UserCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or replace the entry for `user.user_id`.
    pub fn upsert(&self, user: User) {
        let mut users = match self.users.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        users.insert(user.user_id.clone(), user);
    }

    /// Look up a user by id.
    pub fn get_by_id(&self, user_id: &str) -> Option<User> {
        let users = match self.users.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        users.get(user_id).cloned()
    }

    /// Snapshot of all cached users. Order is unspecified.
    pub fn get_all(&self) -> Vec<User> {
        let users = match self.users.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        users.values().cloned().collect()
    }

    /// All users whose nickname equals `nickname` exactly (case-sensitive).
    pub fn get_by_nickname(&self, nickname: &str) -> Vec<User> {
        let users = match self.users.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        users
            .values()
            .filter(|user| user.nickname == nickname)
            .cloned()
            .collect()
    }

    /// Discard every entry. Used on tenant switch.
    pub fn clear(&self) {
        let mut users = match self.users.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        users.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        let users = match self.users.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        users.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UserCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCache").field("len", &self.len()).finish()
    }
}
