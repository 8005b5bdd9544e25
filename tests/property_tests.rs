/// Property-based tests using proptest
/// Tests invariants that should hold for all submission records.
use lead_qualification_api::models::{Category, SubmissionRecord};
use lead_qualification_api::scoring::{categorize, score};
use proptest::prelude::*;

/// Arbitrary record built through the same serde path real payloads take,
/// so enum fields exercise both recognized and unrecognized wire values.
fn arb_record() -> impl Strategy<Value = SubmissionRecord> {
    let field = prop::option::of("[a-z0-9+-]{0,12}");
    (
        field.clone(),
        field.clone(),
        field.clone(),
        field,
        any::<bool>(),
        prop::option::of("[a-zA-Z ]{0,20}"),
        prop::option::of("[a-z.@]{0,30}"),
        prop::collection::vec("[a-zA-Z ]{1,30}", 0..15),
        prop::option::of(-1e6f64..1e6f64),
    )
        .prop_map(
            |(business, hours, support, timeline, agreed, name, email, challenges, savings)| {
                serde_json::from_value(serde_json::json!({
                    "businessType": business,
                    "adminHoursPerWeek": hours,
                    "hasCurrentSupport": support,
                    "timeline": timeline,
                    "agreedToFullTime": agreed,
                    "name": name,
                    "email": email,
                    "selectedChallenges": challenges,
                    "estimatedSavings": savings,
                }))
                .expect("record shape always deserializes")
            },
        )
}

proptest! {
    #[test]
    fn score_is_always_within_bounds(record in arb_record()) {
        let s = score(&record);
        prop_assert!((0..=100).contains(&s));
    }

    #[test]
    fn categorization_is_total_and_band_consistent(s in -1000i32..1000i32) {
        let category = categorize(s);
        match category {
            Category::Hot => prop_assert!(s >= 80),
            Category::Warm => prop_assert!((65..80).contains(&s)),
            Category::Nurture => prop_assert!((50..65).contains(&s)),
            Category::Redirect => prop_assert!(s < 50),
        }
    }

    #[test]
    fn adding_full_contact_never_decreases_the_score(record in arb_record()) {
        let base = score(&record);
        let mut completed = record;
        completed.name = Some("Jordan Reeves".to_string());
        completed.email = Some("jordan@example.com".to_string());
        completed.phone = Some("0412345678".to_string());
        prop_assert!(score(&completed) >= base);
    }

    #[test]
    fn commitment_never_decreases_the_score(record in arb_record()) {
        let mut uncommitted = record.clone();
        uncommitted.agreed_to_full_time = false;
        let mut committed = record;
        committed.agreed_to_full_time = true;
        prop_assert!(score(&committed) >= score(&uncommitted));
    }

    #[test]
    fn challenge_contribution_is_capped(record in arb_record()) {
        let mut without = record.clone();
        without.selected_challenges.clear();
        without.main_challenges = None;
        let delta = score(&record) - score(&without);
        // Clamping can shrink the visible delta but never grow it.
        prop_assert!(delta <= 10);
    }

    #[test]
    fn scoring_is_deterministic(record in arb_record()) {
        prop_assert_eq!(score(&record), score(&record));
    }
}
