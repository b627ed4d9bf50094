// application_flow.rs — End-to-end flow over a durable backend:
// submit → review → query, surviving a store reopen.

use krewly_storage::FileKv;
use krewly_vendor::{
    search, seed_mock_applications, ApplicationDraft, ApplicationStatus, ApplicationStore,
    ReviewDecision, SocialHandles, SubmitError, VendorCategory,
};
use tempfile::tempdir;

fn draft(user_id: &str, business_name: &str, state: &str, city: &str) -> ApplicationDraft {
    ApplicationDraft {
        user_id: user_id.to_string(),
        business_name: business_name.to_string(),
        categories: vec![VendorCategory::MakeupArtist],
        state: state.to_string(),
        city: city.to_string(),
        available_for_travel: true,
        phone_number: "08012345678".to_string(),
        portfolio_images: vec!["aW1nMQ==".to_string(), "aW1nMg==".to_string()],
        social_handles: SocialHandles {
            instagram: "glamstudio".to_string(),
            ..SocialHandles::default()
        },
    }
}

#[test]
fn submit_review_and_query_across_reopen() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("store");

    let submitted_id;
    {
        let kv = FileKv::new(&store_path).unwrap();
        let mut store = ApplicationStore::new(kv).unwrap();

        let app = store
            .submit(draft("user-1", "Glam by Tolu", "Lagos", "Ikeja"))
            .unwrap();
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.categories.len(), 1);
        assert_eq!(app.portfolio_images.len(), 2);
        submitted_id = app.id;

        store
            .submit(draft("user-2", "Snap Perfect Photos", "Abuja", "Wuse"))
            .unwrap();
    }

    // Reopen: both records and the pointer survived on disk.
    let kv = FileKv::new(&store_path).unwrap();
    let mut store = ApplicationStore::new(kv).unwrap();
    assert_eq!(store.counts().unwrap().all, 2);
    assert!(store.session_pointer().unwrap().is_some());

    let approved = store
        .review(&submitted_id, &ReviewDecision::Approve)
        .unwrap()
        .unwrap();
    assert_eq!(approved.status, ApplicationStatus::Approved);
    assert!(approved.reviewed_at.is_some());
    assert!(approved.rejection_reason.is_none());

    // A second review of the same record is refused outright.
    assert!(store
        .review(&submitted_id, &ReviewDecision::Reject { reason: None })
        .is_err());

    let counts = store.counts().unwrap();
    assert_eq!(counts.all, 2);
    assert_eq!(counts.approved, 1);
    assert_eq!(counts.pending, 1);
    assert_eq!(
        counts.all,
        counts.pending + counts.approved + counts.rejected
    );

    let records = store.all().unwrap();
    let hits = search("abuja", &records);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].business_name, "Snap Perfect Photos");
}

#[test]
fn validation_failure_reports_fields_and_persists_nothing() {
    let dir = tempdir().unwrap();
    let kv = FileKv::new(dir.path().join("store")).unwrap();
    let mut store = ApplicationStore::new(kv).unwrap();

    let mut bad = draft("user-1", "Glam by Tolu", "Lagos", "Ikeja");
    bad.phone_number = "12345".to_string();
    bad.social_handles.instagram = String::new();

    match store.submit(bad) {
        Err(SubmitError::Validation(errors)) => {
            assert!(errors.get("phone").is_some());
            assert!(errors.get("instagram").is_some());
            assert_eq!(errors.len(), 2);
        }
        other => panic!("expected validation failure, got {:?}", other.map(|a| a.id)),
    }
    assert_eq!(store.counts().unwrap().all, 0);
}

#[test]
fn seed_then_reset_round_trip() {
    let dir = tempdir().unwrap();
    let kv = FileKv::new(dir.path().join("store")).unwrap();
    let mut store = ApplicationStore::new(kv).unwrap();

    seed_mock_applications(&mut store, 5).unwrap();
    let counts = store.counts().unwrap();
    assert_eq!(counts.all, 5);
    assert_eq!(counts.pending, 5);

    store.clear_all().unwrap();
    assert!(store.all().unwrap().is_empty());
    assert_eq!(store.counts().unwrap().all, 0);
}
