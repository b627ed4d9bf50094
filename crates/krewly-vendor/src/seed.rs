// seed.rs — Dev-only seeding of synthetic application records.
//
// Fields cycle deterministically over fixed fixture lists so the admin list
// view has predictable variety. Not part of the production contract.

use chrono::{Duration, Utc};
use krewly_storage::KvStore;
use uuid::Uuid;

use crate::application::{
    ApplicationStatus, SocialHandles, VendorApplication, VendorCategory,
};
use crate::error::VendorError;
use crate::store::ApplicationStore;

pub const MOCK_BUSINESS_NAMES: [&str; 8] = [
    "Glam by Tolu",
    "Beauty Queens NG",
    "Temi Makeup Artistry",
    "ChiChi Gele House",
    "Lagos Hair Studio",
    "Snap Perfect Photos",
    "Event Decor Masters",
    "Fashion Forward Styles",
];

const MOCK_CATEGORY_SETS: [&[&str]; 8] = [
    &["Makeup Artist"],
    &["Gele Stylist"],
    &["Hair Stylist"],
    &["Photographer"],
    &["Event Decorator"],
    &["Fashion Stylist/Tailor"],
    &["Makeup Artist", "Hair Stylist"],
    &["Photographer", "Event Decorator"],
];

pub const MOCK_STATES: [&str; 5] = ["Lagos", "Abuja", "Rivers", "Oyo", "Kano"];

fn cities_for(state: &str) -> &'static [&'static str] {
    match state {
        "Lagos" => &["Ikeja", "Lekki", "Victoria Island", "Surulere"],
        "Abuja" => &["Wuse", "Garki", "Asokoro", "Central Area"],
        "Rivers" => &["Port Harcourt", "Obio-Akpor"],
        "Oyo" => &["Ibadan", "Ogbomoso"],
        "Kano" => &["Kano Municipal", "Nassarawa"],
        _ => &["Unknown"],
    }
}

/// Append `count` synthetic pending applications to the stored collection.
///
/// Submission dates are staggered one day apart (newest first at index 0).
/// Portfolios are left empty — seeded records exist to exercise the admin
/// list, not the image pipeline. The session pointer is not touched.
pub fn seed_mock_applications<S: KvStore>(
    store: &mut ApplicationStore<S>,
    count: usize,
) -> Result<(), VendorError> {
    let mut records = store.all()?;
    let now = Utc::now();

    for i in 0..count {
        let name = MOCK_BUSINESS_NAMES[i % MOCK_BUSINESS_NAMES.len()];
        let state = MOCK_STATES[i % MOCK_STATES.len()];
        let cities = cities_for(state);

        // 080 + 8 digits, always a valid regional number.
        let digits = (10_000_000 + i).to_string();
        let phone = format!("080{}", &digits[..8]);

        let instagram: String = name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        records.push(VendorApplication {
            id: format!("mock-app-{}-{}", Uuid::new_v4(), i),
            user_id: format!("mock-user-{}", i),
            business_name: name.to_string(),
            categories: MOCK_CATEGORY_SETS[i % MOCK_CATEGORY_SETS.len()]
                .iter()
                .map(|label| VendorCategory::from(label.to_string()))
                .collect(),
            state: state.to_string(),
            city: cities[i % cities.len()].to_string(),
            available_for_travel: i % 2 == 0,
            phone_number: phone,
            portfolio_images: Vec::new(),
            social_handles: SocialHandles {
                instagram,
                tiktok: (i % 2 == 0).then(|| format!("tiktok_user_{}", i)),
                twitter: (i % 3 == 0).then(|| format!("twitter_user_{}", i)),
            },
            status: ApplicationStatus::Pending,
            submitted_at: now - Duration::days(i as i64),
            reviewed_at: None,
            rejection_reason: None,
        });
    }

    store.save_all(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use krewly_storage::MemoryKv;

    #[test]
    fn seed_five_yields_five_pending() {
        let mut store = ApplicationStore::new(MemoryKv::new()).unwrap();
        seed_mock_applications(&mut store, 5).unwrap();

        let counts = store.counts().unwrap();
        assert_eq!(counts.all, 5);
        assert_eq!(counts.pending, 5);
        assert_eq!(counts.approved, 0);
        assert_eq!(counts.rejected, 0);
    }

    #[test]
    fn seeding_appends_to_existing_records() {
        let mut store = ApplicationStore::new(MemoryKv::new()).unwrap();
        seed_mock_applications(&mut store, 2).unwrap();
        seed_mock_applications(&mut store, 3).unwrap();
        assert_eq!(store.counts().unwrap().all, 5);
    }

    #[test]
    fn fields_cycle_deterministically() {
        let mut store = ApplicationStore::new(MemoryKv::new()).unwrap();
        seed_mock_applications(&mut store, 8).unwrap();

        let records = store.all().unwrap();
        assert_eq!(records[0].business_name, "Glam by Tolu");
        assert_eq!(records[5].business_name, "Snap Perfect Photos");
        assert_eq!(records[0].state, "Lagos");
        assert_eq!(records[5].state, "Lagos");
        assert_eq!(records[6].categories.len(), 2);
        assert!(records[0].available_for_travel);
        assert!(!records[1].available_for_travel);
        // Every seeded id is distinct.
        let mut ids: Vec<_> = records.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn seeded_phone_numbers_pass_validation_pattern() {
        let mut store = ApplicationStore::new(MemoryKv::new()).unwrap();
        seed_mock_applications(&mut store, 5).unwrap();

        let re = regex::Regex::new(crate::validate::PHONE_PATTERN).unwrap();
        for app in store.all().unwrap() {
            assert!(re.is_match(&app.phone_number), "bad phone {}", app.phone_number);
        }
    }

    #[test]
    fn submission_dates_are_staggered_newest_first() {
        let mut store = ApplicationStore::new(MemoryKv::new()).unwrap();
        seed_mock_applications(&mut store, 4).unwrap();

        let records = store.all().unwrap();
        for pair in records.windows(2) {
            assert!(pair[0].submitted_at > pair[1].submitted_at);
        }
    }

    #[test]
    fn seeding_does_not_touch_session_pointer() {
        let mut store = ApplicationStore::new(MemoryKv::new()).unwrap();
        seed_mock_applications(&mut store, 3).unwrap();
        assert!(store.session_pointer().unwrap().is_none());
    }
}
