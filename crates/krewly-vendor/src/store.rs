// store.rs — ApplicationStore: persistence for vendor application records.
//
// The whole collection lives under one key as a JSON array, the reference
// client's layout. Every mutation is a full read-modify-write of that array;
// the last writer wins completely. A second, independent key tracks which
// record the local actor considers theirs (the session pointer).
//
// Reads fail open: an unreadable payload is an empty collection, and a
// malformed record inside a readable array is quarantined (skipped with a
// warning) rather than taking the rest of the collection down with it.

use krewly_storage::KvStore;

use crate::application::{ApplicationDraft, ApplicationStatus, ReviewDecision, VendorApplication};
use crate::error::{SubmitError, VendorError};
use crate::events::{EventDispatcher, NotificationSink, VendorEvent};
use crate::validate::validate_draft;

/// Key holding the serialized collection of application records.
pub const APPLICATIONS_KEY: &str = "krewly_vendor_applications";

/// Key holding the current actor's application id (the session pointer).
pub const SESSION_POINTER_KEY: &str = "krewly_current_user_application_id";

/// Deprecated single-record key from an older persistence shape. Migrated
/// into the collection on store open.
pub const LEGACY_APPLICATION_KEY: &str = "krewly_vendor_application";

/// Store for vendor application records over a [`KvStore`] backend.
///
/// Single-writer by design: there is no locking or conflict detection, and
/// two stores over the same backend overwrite each other wholesale.
pub struct ApplicationStore<S: KvStore> {
    kv: S,
    dispatcher: EventDispatcher,
}

impl<S: KvStore> ApplicationStore<S> {
    /// Open a store over `kv`, migrating the deprecated single-record key
    /// into the collection if one is present.
    pub fn new(kv: S) -> Result<Self, VendorError> {
        let mut store = Self {
            kv,
            dispatcher: EventDispatcher::new(),
        };
        store.migrate_legacy()?;
        Ok(store)
    }

    /// Register a sink to receive submission/review events.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.dispatcher.add_sink(sink);
    }

    // ---- Collection ----

    /// The full collection. Empty if nothing is stored or the stored payload
    /// is unreadable; individually malformed records are quarantined.
    pub fn all(&self) -> Result<Vec<VendorApplication>, VendorError> {
        match self.kv.get(APPLICATIONS_KEY)? {
            Some(raw) => Ok(parse_collection(&raw)),
            None => Ok(Vec::new()),
        }
    }

    /// Look up one record by id. Linear scan — the collection is tens of
    /// records, not thousands.
    pub fn get(&self, id: &str) -> Result<Option<VendorApplication>, VendorError> {
        Ok(self.all()?.into_iter().find(|app| app.id == id))
    }

    /// Overwrite the entire serialized collection.
    pub fn save_all(&mut self, records: &[VendorApplication]) -> Result<(), VendorError> {
        let json = serde_json::to_string(records)?;
        self.kv.set(APPLICATIONS_KEY, &json)?;
        Ok(())
    }

    /// Replace the record with a matching id, or append if absent, then point
    /// the session pointer at it.
    pub fn upsert(&mut self, record: &VendorApplication) -> Result<(), VendorError> {
        let mut records = self.all()?;
        match records.iter_mut().find(|app| app.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        self.save_all(&records)?;
        self.set_session_pointer(&record.id)?;
        Ok(())
    }

    // ---- Session pointer ----

    /// The id of the record the local actor considers theirs, if any.
    pub fn session_pointer(&self) -> Result<Option<String>, VendorError> {
        Ok(self.kv.get(SESSION_POINTER_KEY)?)
    }

    pub fn set_session_pointer(&mut self, id: &str) -> Result<(), VendorError> {
        self.kv.set(SESSION_POINTER_KEY, id)?;
        Ok(())
    }

    pub fn clear_session_pointer(&mut self) -> Result<(), VendorError> {
        self.kv.remove(SESSION_POINTER_KEY)?;
        Ok(())
    }

    /// The local actor's application, resolved through the session pointer.
    pub fn current(&self) -> Result<Option<VendorApplication>, VendorError> {
        match self.session_pointer()? {
            Some(id) => self.get(&id),
            None => Ok(None),
        }
    }

    /// Whether the local actor has an application awaiting review.
    pub fn has_pending(&self) -> Result<bool, VendorError> {
        Ok(self
            .current()?
            .is_some_and(|app| app.status == ApplicationStatus::Pending))
    }

    /// Whether the local actor's application has been approved.
    pub fn has_approved(&self) -> Result<bool, VendorError> {
        Ok(self
            .current()?
            .is_some_and(|app| app.status == ApplicationStatus::Approved))
    }

    // ---- Lifecycle ----

    /// Validate a draft and, if it passes, create a pending record, persist
    /// it, and point the session pointer at it.
    ///
    /// Validation failures come back as a per-field message map; nothing is
    /// persisted in that case.
    pub fn submit(&mut self, draft: ApplicationDraft) -> Result<VendorApplication, SubmitError> {
        validate_draft(&draft).map_err(SubmitError::Validation)?;

        let app = VendorApplication::from_draft(draft);
        self.upsert(&app)?;
        tracing::info!(id = %app.id, business = %app.business_name, "application submitted");
        self.dispatcher.dispatch(&VendorEvent::submitted(&app));
        Ok(app)
    }

    /// Apply a review decision to the record with `id` and persist the
    /// result. The session pointer is not touched — reviewing is an admin
    /// action, not the applicant's.
    ///
    /// Returns `Ok(None)` if no such record exists (the stored collection is
    /// left untouched). Reviewing a record that is already approved or
    /// rejected is an [`VendorError::InvalidTransition`].
    pub fn review(
        &mut self,
        id: &str,
        decision: &ReviewDecision,
    ) -> Result<Option<VendorApplication>, VendorError> {
        let mut records = self.all()?;
        let Some(app) = records.iter_mut().find(|app| app.id == id) else {
            return Ok(None);
        };

        app.review(decision)?;
        let reviewed = app.clone();
        self.save_all(&records)?;
        tracing::info!(id = %reviewed.id, status = %reviewed.status, "application reviewed");
        self.dispatcher.dispatch(&VendorEvent::reviewed(&reviewed));
        Ok(Some(reviewed))
    }

    /// Dev shortcut: approve the local actor's own application.
    pub fn approve_current(&mut self) -> Result<Option<VendorApplication>, VendorError> {
        match self.session_pointer()? {
            Some(id) => self.review(&id, &ReviewDecision::Approve),
            None => Ok(None),
        }
    }

    /// Wipe the collection and the session pointer.
    pub fn clear_all(&mut self) -> Result<(), VendorError> {
        self.kv.remove(APPLICATIONS_KEY)?;
        self.kv.remove(SESSION_POINTER_KEY)?;
        Ok(())
    }

    // ---- Legacy migration ----

    /// Fold a record stored under the deprecated single-record key into the
    /// collection, adopt it as the session pointer if none is set, and drop
    /// the legacy key. Runs once, on open.
    fn migrate_legacy(&mut self) -> Result<(), VendorError> {
        let Some(raw) = self.kv.get(LEGACY_APPLICATION_KEY)? else {
            return Ok(());
        };

        let legacy: VendorApplication = match serde_json::from_str(&raw) {
            Ok(app) => app,
            Err(err) => {
                // Unreadable legacy value: leave it in place rather than
                // destroy data we could not parse.
                tracing::warn!("unreadable legacy application record, skipping migration: {err}");
                return Ok(());
            }
        };

        let mut records = self.all()?;
        if !records.iter().any(|app| app.id == legacy.id) {
            records.push(legacy.clone());
            self.save_all(&records)?;
        }
        if self.session_pointer()?.is_none() {
            self.set_session_pointer(&legacy.id)?;
        }
        self.kv.remove(LEGACY_APPLICATION_KEY)?;
        tracing::info!(id = %legacy.id, "migrated legacy application record into collection");
        Ok(())
    }
}

/// Parse a stored collection payload, failing open.
fn parse_collection(raw: &str) -> Vec<VendorApplication> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(err) => {
            tracing::warn!("unreadable application collection, treating as empty: {err}");
            return Vec::new();
        }
    };

    let mut records = Vec::with_capacity(values.len());
    let mut quarantined = 0usize;
    for value in values {
        match serde_json::from_value::<VendorApplication>(value) {
            Ok(app) => records.push(app),
            Err(err) => {
                quarantined += 1;
                tracing::warn!("quarantining malformed application record: {err}");
            }
        }
    }
    if quarantined > 0 {
        tracing::warn!(
            quarantined,
            kept = records.len(),
            "application collection loaded with malformed records skipped"
        );
    }
    records
}
