// application.rs — VendorApplication: the record a vendor submits for review.
//
// The lifecycle is deliberately small:
//   pending → approved
//   pending → rejected
// Both end states are terminal; a reviewed application is never re-reviewed.
//
// Records serialize with the camelCase field names of the reference client's
// persisted layout, so collections written by it load unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::VendorError;

/// The canonical service categories a vendor can apply under.
pub const VENDOR_CATEGORIES: [&str; 6] = [
    "Makeup Artist",
    "Gele Stylist",
    "Hair Stylist",
    "Photographer",
    "Event Decorator",
    "Fashion Stylist/Tailor",
];

/// A service category: one of the canonical set, or a free-text override.
///
/// Serializes as its display string (`"Makeup Artist"`), matching the stored
/// layout; unknown strings deserialize into [`VendorCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VendorCategory {
    MakeupArtist,
    GeleStylist,
    HairStylist,
    Photographer,
    EventDecorator,
    FashionStylist,
    Other(String),
}

impl VendorCategory {
    /// The display label, as shown to users and stored on disk.
    pub fn label(&self) -> &str {
        match self {
            VendorCategory::MakeupArtist => "Makeup Artist",
            VendorCategory::GeleStylist => "Gele Stylist",
            VendorCategory::HairStylist => "Hair Stylist",
            VendorCategory::Photographer => "Photographer",
            VendorCategory::EventDecorator => "Event Decorator",
            VendorCategory::FashionStylist => "Fashion Stylist/Tailor",
            VendorCategory::Other(label) => label,
        }
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for VendorCategory {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Makeup Artist" => VendorCategory::MakeupArtist,
            "Gele Stylist" => VendorCategory::GeleStylist,
            "Hair Stylist" => VendorCategory::HairStylist,
            "Photographer" => VendorCategory::Photographer,
            "Event Decorator" => VendorCategory::EventDecorator,
            "Fashion Stylist/Tailor" => VendorCategory::FashionStylist,
            _ => VendorCategory::Other(s),
        }
    }
}

impl From<VendorCategory> for String {
    fn from(c: VendorCategory) -> Self {
        c.label().to_string()
    }
}

/// The review state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted, awaiting admin review. The only initial state.
    Pending,
    /// Approved by an admin. Terminal.
    Approved,
    /// Rejected by an admin. Terminal.
    Rejected,
}

impl ApplicationStatus {
    /// Whether no further transition is defined out of this status.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Approved | ApplicationStatus::Rejected
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(format!(
                "unknown status '{}' (expected pending, approved or rejected)",
                other
            )),
        }
    }
}

/// Social media handles attached to an application.
/// Instagram is the one required handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialHandles {
    pub instagram: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// An admin's review decision for a pending application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject { reason: Option<String> },
}

impl ReviewDecision {
    /// The status this decision moves the application into.
    pub fn status(&self) -> ApplicationStatus {
        match self {
            ReviewDecision::Approve => ApplicationStatus::Approved,
            ReviewDecision::Reject { .. } => ApplicationStatus::Rejected,
        }
    }
}

/// Everything a vendor provides when applying. Validated by
/// [`crate::validate::validate_draft`] before a record is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    /// The submitting user. Weak reference — nothing enforces it resolves.
    pub user_id: String,
    pub business_name: String,
    pub categories: Vec<VendorCategory>,
    pub state: String,
    pub city: String,
    pub available_for_travel: bool,
    pub phone_number: String,
    /// Base64-encoded image payloads.
    pub portfolio_images: Vec<String>,
    pub social_handles: SocialHandles,
}

/// A vendor's application and its review state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorApplication {
    /// Opaque unique identifier, assigned at creation. Immutable.
    pub id: String,

    /// The submitting user. Weak reference — nothing enforces it resolves.
    pub user_id: String,

    pub business_name: String,
    pub categories: Vec<VendorCategory>,
    pub state: String,
    pub city: String,
    pub available_for_travel: bool,
    pub phone_number: String,

    /// Base64-encoded image payloads, in upload order.
    pub portfolio_images: Vec<String>,

    pub social_handles: SocialHandles,

    pub status: ApplicationStatus,

    /// Set once at creation. Immutable.
    pub submitted_at: DateTime<Utc>,

    /// Set exactly once, when the status leaves pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,

    /// Present only on rejected applications, and only when the reviewer
    /// provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl VendorApplication {
    /// Build a pending record from a validated draft.
    ///
    /// Assigns the id and submission timestamp and normalizes the free-text
    /// fields (trimmed business name, whitespace stripped from the phone
    /// number). Callers are expected to have run
    /// [`crate::validate::validate_draft`] first — this constructor does not
    /// re-check invariants.
    pub fn from_draft(draft: ApplicationDraft) -> Self {
        Self {
            id: format!("app-{}", Uuid::new_v4()),
            user_id: draft.user_id,
            business_name: draft.business_name.trim().to_string(),
            categories: draft.categories,
            state: draft.state,
            city: draft.city,
            available_for_travel: draft.available_for_travel,
            phone_number: draft
                .phone_number
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect(),
            portfolio_images: draft.portfolio_images,
            social_handles: draft.social_handles,
            status: ApplicationStatus::Pending,
            submitted_at: Utc::now(),
            reviewed_at: None,
            rejection_reason: None,
        }
    }

    /// Apply a review decision.
    ///
    /// Only a pending application can be reviewed; a decision against an
    /// already-approved or already-rejected record is an
    /// [`VendorError::InvalidTransition`] and leaves the record unchanged.
    /// The rejection reason is stored only on the reject path.
    pub fn review(&mut self, decision: &ReviewDecision) -> Result<(), VendorError> {
        let to = decision.status();
        if self.status.is_terminal() {
            return Err(VendorError::InvalidTransition {
                id: self.id.clone(),
                from: self.status,
                to,
            });
        }

        self.status = to;
        self.reviewed_at = Some(Utc::now());
        if let ReviewDecision::Reject {
            reason: Some(reason),
        } = decision
        {
            self.rejection_reason = Some(reason.clone());
        }
        Ok(())
    }
}
