//! # krewly-vendor
//!
//! Vendor application lifecycle, persistence and queries for the Krewly
//! marketplace.
//!
//! A [`VendorApplication`] moves through exactly one transition in its life:
//! pending → approved or pending → rejected, applied by an admin review.
//! Records persist as a single JSON collection in a [`krewly_storage::KvStore`]
//! namespace, alongside a session pointer naming the local actor's own
//! application.
//!
//! ## Key components
//!
//! - [`VendorApplication`] / [`ApplicationStatus`] — the record and its
//!   two-step lifecycle
//! - [`ApplicationStore`] — collection persistence, session pointer, and the
//!   `submit`/`review` write-through operations
//! - [`validate_draft`] — submission-time field validation with per-field
//!   messages
//! - [`ApplicationCounts`] / [`search`] — read-side views for the admin queue
//! - [`VendorEvent`] / [`NotificationSink`] — lifecycle notifications
//! - [`seed_mock_applications`] — dev-only synthetic records
//!
//! All operations are synchronous and single-writer: the backing namespace
//! belongs to one actor at a time, and concurrent writers overwrite each
//! other wholesale (last write wins, no merge).

pub mod application;
pub mod error;
pub mod events;
pub mod query;
pub mod seed;
pub mod store;
pub mod validate;

pub use application::{
    ApplicationDraft, ApplicationStatus, ReviewDecision, SocialHandles, VendorApplication,
    VendorCategory, VENDOR_CATEGORIES,
};
pub use error::{SubmitError, VendorError};
pub use events::{EventDispatcher, LogSink, NotificationSink, VendorEvent};
pub use query::{search, ApplicationCounts};
pub use seed::seed_mock_applications;
pub use store::{
    ApplicationStore, APPLICATIONS_KEY, LEGACY_APPLICATION_KEY, SESSION_POINTER_KEY,
};
pub use validate::{validate_draft, ValidationErrors};
