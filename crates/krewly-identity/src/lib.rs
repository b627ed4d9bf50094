//! # krewly-identity
//!
//! The mock signed-in user for the Krewly marketplace core.
//!
//! There is no authentication server in this system — the identity layer
//! persists a single [`User`] record in the shared key-value namespace and
//! hands it to whoever asks. The one piece of real behavior is
//! [`IdentityStore::promote_to_vendor`]: when an application is approved,
//! the stored user's role flips from `client` to `vendor`.
//!
//! Token issuance and refresh are deliberately absent.

pub mod error;
pub mod store;
pub mod user;

pub use error::IdentityError;
pub use store::{IdentityStore, USER_KEY};
pub use user::{User, UserRole, UserStatus};
