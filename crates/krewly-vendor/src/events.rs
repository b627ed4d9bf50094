// events.rs — Lifecycle events and notification dispatch.
//
// The store emits an event when an application is submitted and when one is
// reviewed. Sinks decide what to do with them (append to a JSONL log, ping a
// webhook, drive a UI refresh); a sink failure never fails the operation
// that produced the event.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationStatus, VendorApplication};
use crate::error::VendorError;

/// Events emitted at application lifecycle points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum VendorEvent {
    /// A new application was submitted.
    ApplicationSubmitted {
        application_id: String,
        user_id: String,
        business_name: String,
        timestamp: DateTime<Utc>,
    },

    /// An application was approved or rejected.
    ApplicationReviewed {
        application_id: String,
        status: ApplicationStatus,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rejection_reason: Option<String>,
        timestamp: DateTime<Utc>,
    },
}

impl VendorEvent {
    /// The event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            VendorEvent::ApplicationSubmitted { .. } => "application_submitted",
            VendorEvent::ApplicationReviewed { .. } => "application_reviewed",
        }
    }

    pub fn submitted(app: &VendorApplication) -> Self {
        VendorEvent::ApplicationSubmitted {
            application_id: app.id.clone(),
            user_id: app.user_id.clone(),
            business_name: app.business_name.clone(),
            timestamp: Utc::now(),
        }
    }

    pub fn reviewed(app: &VendorApplication) -> Self {
        VendorEvent::ApplicationReviewed {
            application_id: app.id.clone(),
            status: app.status,
            rejection_reason: app.rejection_reason.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// Trait for receiving lifecycle events.
pub trait NotificationSink: Send {
    /// Handle an event. Errors are logged by the dispatcher, not propagated.
    fn send(&self, event: &VendorEvent) -> Result<(), VendorError>;
}

/// Appends events as JSONL to a file.
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NotificationSink for LogSink {
    fn send(&self, event: &VendorEvent) -> Result<(), VendorError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| {
                VendorError::Storage(krewly_storage::StorageError::Io {
                    path: parent.display().to_string(),
                    source,
                })
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| {
                VendorError::Storage(krewly_storage::StorageError::Io {
                    path: self.path.display().to_string(),
                    source,
                })
            })?;

        let json = serde_json::to_string(event)?;
        writeln!(file, "{}", json).map_err(|source| {
            VendorError::Storage(krewly_storage::StorageError::Io {
                path: self.path.display().to_string(),
                source,
            })
        })?;
        Ok(())
    }
}

/// Dispatches events to registered sinks. A failing sink is logged and does
/// not prevent the others from receiving the event.
#[derive(Default)]
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    pub fn dispatch(&self, event: &VendorEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!("notification sink error: {}", e);
            }
        }
    }
}
