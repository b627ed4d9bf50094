// query.rs — Read-side views over the application store.
//
// Counts are recomputed on every call; with a collection of tens of records
// there is nothing to cache. No pagination, and no ordering guarantee beyond
// what callers impose themselves.

use krewly_storage::KvStore;
use serde::Serialize;

use crate::application::{ApplicationStatus, VendorApplication};
use crate::error::VendorError;
use crate::store::ApplicationStore;

/// Aggregate counts per status. `all` is always the sum of the other three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationCounts {
    pub all: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl<S: KvStore> ApplicationStore<S> {
    /// All records with the given status.
    pub fn list_by_status(
        &self,
        status: ApplicationStatus,
    ) -> Result<Vec<VendorApplication>, VendorError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|app| app.status == status)
            .collect())
    }

    /// Count records per status, in one pass over the collection.
    pub fn counts(&self) -> Result<ApplicationCounts, VendorError> {
        let mut counts = ApplicationCounts::default();
        for app in self.all()? {
            counts.all += 1;
            match app.status {
                ApplicationStatus::Pending => counts.pending += 1,
                ApplicationStatus::Approved => counts.approved += 1,
                ApplicationStatus::Rejected => counts.rejected += 1,
            }
        }
        Ok(counts)
    }
}

/// Case-insensitive substring filter over business name, city and state.
///
/// Pure function, no storage access. An empty (or all-whitespace) query
/// matches every record.
pub fn search<'a>(query: &str, records: &'a [VendorApplication]) -> Vec<&'a VendorApplication> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|app| {
            app.business_name.to_lowercase().contains(&needle)
                || app.city.to_lowercase().contains(&needle)
                || app.state.to_lowercase().contains(&needle)
        })
        .collect()
}
