// validate.rs — Submission-time validation of application drafts.
//
// Validation failures are data, not errors: callers get back a per-field
// message map for inline display. Nothing here panics on bad input.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::application::ApplicationDraft;

/// Accepted phone formats: 0xxxxxxxxxx (11 digits) or +234xxxxxxxxx.
pub const PHONE_PATTERN: &str = r"^(0[7-9][0-1]\d{8}|\+234[7-9][0-1]\d{8})$";

/// Bounds enforced at submission time (not by storage).
pub const MIN_BUSINESS_NAME_LEN: usize = 2;
pub const MIN_CATEGORIES: usize = 1;
pub const MAX_CATEGORIES: usize = 3;
pub const MIN_PORTFOLIO_IMAGES: usize = 2;
pub const MAX_PORTFOLIO_IMAGES: usize = 5;

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

/// Per-field validation messages, keyed by the form field name.
///
/// Field keys match the reference client's form (`businessName`,
/// `categories`, `state`, `city`, `phone`, `images`, `instagram`), so callers
/// can attach each message to its input. Ordered for stable display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// The message for one field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// All `(field, message)` pairs, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Check every field invariant on a draft.
///
/// Returns all failures at once so the caller can render the full set inline,
/// the way the submission form does.
pub fn validate_draft(draft: &ApplicationDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.business_name.trim().len() < MIN_BUSINESS_NAME_LEN {
        errors.add(
            "businessName",
            "Business name is required (min 2 characters)",
        );
    }

    if draft.categories.len() < MIN_CATEGORIES {
        errors.add("categories", "Select at least one category");
    } else if draft.categories.len() > MAX_CATEGORIES {
        errors.add("categories", "Select at most 3 categories");
    }

    if draft.state.trim().is_empty() {
        errors.add("state", "State is required");
    }

    if draft.city.trim().is_empty() {
        errors.add("city", "City/LGA is required");
    }

    let phone: String = draft
        .phone_number
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if phone.is_empty() {
        errors.add("phone", "Phone number is required");
    } else if !phone_regex().is_match(&phone) {
        errors.add(
            "phone",
            "Enter a valid Nigerian phone number (e.g., 08012345678 or +2348012345678)",
        );
    }

    if draft.portfolio_images.len() < MIN_PORTFOLIO_IMAGES {
        errors.add("images", "Upload at least 2 portfolio images");
    } else if draft.portfolio_images.len() > MAX_PORTFOLIO_IMAGES {
        errors.add("images", "Upload at most 5 portfolio images");
    }

    if draft.social_handles.instagram.trim().is_empty() {
        errors.add("instagram", "Instagram handle is required");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{SocialHandles, VendorCategory};

    fn valid_draft() -> ApplicationDraft {
        ApplicationDraft {
            user_id: "user-1".to_string(),
            business_name: "Glam by Tolu".to_string(),
            categories: vec![VendorCategory::MakeupArtist],
            state: "Lagos".to_string(),
            city: "Ikeja".to_string(),
            available_for_travel: false,
            phone_number: "08012345678".to_string(),
            portfolio_images: vec!["aW1nMQ==".to_string(), "aW1nMg==".to_string()],
            social_handles: SocialHandles {
                instagram: "glambytolu".to_string(),
                ..SocialHandles::default()
            },
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate_draft(&valid_draft()).is_ok());
    }

    #[test]
    fn short_business_name_is_rejected() {
        let mut draft = valid_draft();
        draft.business_name = "G".to_string();
        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors.get("businessName").is_some());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn category_count_bounds() {
        let mut draft = valid_draft();
        draft.categories.clear();
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(
            errors.get("categories"),
            Some("Select at least one category")
        );

        draft.categories = vec![
            VendorCategory::MakeupArtist,
            VendorCategory::HairStylist,
            VendorCategory::Photographer,
            VendorCategory::GeleStylist,
        ];
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(errors.get("categories"), Some("Select at most 3 categories"));

        draft.categories.truncate(3);
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn missing_location_fields_are_rejected() {
        let mut draft = valid_draft();
        draft.state = String::new();
        draft.city = "  ".to_string();
        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors.get("state").is_some());
        assert!(errors.get("city").is_some());
    }

    #[test]
    fn phone_formats() {
        let mut draft = valid_draft();

        // Spaces are stripped before matching.
        draft.phone_number = "0801 234 5678".to_string();
        assert!(validate_draft(&draft).is_ok());

        draft.phone_number = "+2348012345678".to_string();
        assert!(validate_draft(&draft).is_ok());

        draft.phone_number = String::new();
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(errors.get("phone"), Some("Phone number is required"));

        // Wrong prefix digit.
        draft.phone_number = "06012345678".to_string();
        let errors = validate_draft(&draft).unwrap_err();
        assert!(errors.get("phone").unwrap().contains("valid Nigerian"));

        // Too short.
        draft.phone_number = "080123".to_string();
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn image_count_bounds() {
        let mut draft = valid_draft();
        draft.portfolio_images.truncate(1);
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(
            errors.get("images"),
            Some("Upload at least 2 portfolio images")
        );

        draft.portfolio_images = vec!["aW1n".to_string(); 6];
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(
            errors.get("images"),
            Some("Upload at most 5 portfolio images")
        );

        draft.portfolio_images.truncate(5);
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn instagram_handle_is_required() {
        let mut draft = valid_draft();
        draft.social_handles.instagram = "  ".to_string();
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(errors.get("instagram"), Some("Instagram handle is required"));
    }

    #[test]
    fn all_failures_are_reported_together() {
        let draft = ApplicationDraft::default();
        let errors = validate_draft(&draft).unwrap_err();
        for field in [
            "businessName",
            "categories",
            "state",
            "city",
            "phone",
            "images",
            "instagram",
        ] {
            assert!(errors.get(field).is_some(), "missing error for {}", field);
        }
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn display_joins_fields_in_order() {
        let draft = ApplicationDraft::default();
        let errors = validate_draft(&draft).unwrap_err();
        let rendered = errors.to_string();
        assert!(rendered.contains("businessName: "));
        assert!(rendered.contains("; phone: "));
    }
}
