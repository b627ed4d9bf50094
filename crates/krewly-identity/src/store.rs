// store.rs — Persistence for the signed-in user record.
//
// One key, one record. Reads fail open: an unreadable stored value is
// "nobody signed in", never an error.

use krewly_storage::KvStore;

use crate::error::IdentityError;
use crate::user::{User, UserRole};

/// Key holding the signed-in user record.
pub const USER_KEY: &str = "krewly_user";

/// Store for the local actor's identity over a [`KvStore`] backend.
pub struct IdentityStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> IdentityStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// The signed-in user, if any. Unreadable stored content reads as none.
    pub fn current(&self) -> Result<Option<User>, IdentityError> {
        let Some(raw) = self.kv.get(USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                tracing::warn!("unreadable stored user, treating as signed out: {err}");
                Ok(None)
            }
        }
    }

    /// Persist `user` as the signed-in identity.
    pub fn save(&mut self, user: &User) -> Result<(), IdentityError> {
        let json = serde_json::to_string(user)?;
        self.kv.set(USER_KEY, &json)?;
        Ok(())
    }

    /// Sign out: drop the stored record.
    pub fn clear(&mut self) -> Result<(), IdentityError> {
        self.kv.remove(USER_KEY)?;
        Ok(())
    }

    /// Flip the stored user's role to vendor, if the stored user is
    /// `user_id`. Called after an application approval. Returns the updated
    /// user, or `None` when nobody matching is signed in.
    pub fn promote_to_vendor(&mut self, user_id: &str) -> Result<Option<User>, IdentityError> {
        let Some(mut user) = self.current()? else {
            return Ok(None);
        };
        if user.id != user_id {
            return Ok(None);
        }

        user.role = UserRole::Vendor;
        user.updated_at = chrono::Utc::now();
        self.save(&user)?;
        tracing::info!(id = %user.id, "user promoted to vendor");
        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krewly_storage::MemoryKv;

    #[test]
    fn save_and_current_round_trip() {
        let mut store = IdentityStore::new(MemoryKv::new());
        let user = User::new("tolu@example.com", UserRole::Client);
        store.save(&user).unwrap();
        assert_eq!(store.current().unwrap(), Some(user));
    }

    #[test]
    fn empty_store_has_no_user() {
        let store = IdentityStore::new(MemoryKv::new());
        assert!(store.current().unwrap().is_none());
    }

    #[test]
    fn unreadable_stored_user_reads_as_signed_out() {
        let mut kv = MemoryKv::new();
        kv.set(USER_KEY, "###").unwrap();
        let store = IdentityStore::new(kv);
        assert!(store.current().unwrap().is_none());
    }

    #[test]
    fn clear_signs_out() {
        let mut store = IdentityStore::new(MemoryKv::new());
        store
            .save(&User::new("tolu@example.com", UserRole::Client))
            .unwrap();
        store.clear().unwrap();
        assert!(store.current().unwrap().is_none());
    }

    #[test]
    fn promote_flips_matching_user_to_vendor() {
        let mut store = IdentityStore::new(MemoryKv::new());
        let user = User::new("tolu@example.com", UserRole::Client);
        store.save(&user).unwrap();

        let promoted = store.promote_to_vendor(&user.id).unwrap().unwrap();
        assert_eq!(promoted.role, UserRole::Vendor);
        assert!(promoted.updated_at >= user.updated_at);
        assert_eq!(store.current().unwrap().unwrap().role, UserRole::Vendor);
    }

    #[test]
    fn promote_ignores_non_matching_user() {
        let mut store = IdentityStore::new(MemoryKv::new());
        let user = User::new("tolu@example.com", UserRole::Client);
        store.save(&user).unwrap();

        assert!(store.promote_to_vendor("user-someone-else").unwrap().is_none());
        assert_eq!(store.current().unwrap().unwrap().role, UserRole::Client);
    }

    #[test]
    fn promote_with_nobody_signed_in_is_none() {
        let mut store = IdentityStore::new(MemoryKv::new());
        assert!(store.promote_to_vendor("user-1").unwrap().is_none());
    }
}
