//! User store keyed by GitHub id.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::User;

/// In-memory user store. Users are created once, on first login, and
/// never mutated or deleted.
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<HashMap<i64, User>>>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a user by GitHub id.
    pub async fn find_by_github_id(&self, github_id: i64) -> Option<User> {
        self.users.read().await.get(&github_id).cloned()
    }

    /// Return the stored user for this GitHub id, creating it from the
    /// profile fields on first login.
    ///
    /// The write lock covers the lookup and the insert, so two
    /// concurrent first logins for the same id cannot create twice.
    pub async fn find_or_create(&self, github_id: i64, name: &str, profile_url: &str) -> User {
        let mut users = self.users.write().await;
        if let Some(user) = users.get(&github_id) {
            return user.clone();
        }

        let user = User {
            name: name.to_owned(),
            profile_url: profile_url.to_owned(),
            github_id,
        };
        users.insert(github_id, user.clone());

        tracing::info!(github_id, "Created user on first login");

        user
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore").finish()
    }
}
