/// Content generation contract: template selection is a pure function of
/// category, with record fields only filling in interpolated values.
use lead_qualification_api::content::generate_result;
use lead_qualification_api::models::{
    AdminHours, BusinessType, Category, ScoreResult, SubmissionRecord, SupportStatus, Timeline,
};
use lead_qualification_api::scoring::score_result;

fn hot_record_healthcare() -> SubmissionRecord {
    SubmissionRecord {
        business_type: Some(BusinessType::Healthcare),
        admin_hours_per_week: Some(AdminHours::FortyPlus),
        timeline: Some(Timeline::Urgent),
        has_current_support: Some(SupportStatus::Replace),
        agreed_to_full_time: true,
        name: Some("A".to_string()),
        email: Some("a@a.com".to_string()),
        phone: Some("1".to_string()),
        ..Default::default()
    }
}

fn hot_record_ecommerce() -> SubmissionRecord {
    SubmissionRecord {
        business_type: Some(BusinessType::Ecommerce),
        admin_hours_per_week: Some(AdminHours::TwentyToForty),
        timeline: Some(Timeline::TwoWeeks),
        has_current_support: Some(SupportStatus::Replace),
        agreed_to_full_time: true,
        name: Some("B".to_string()),
        email: Some("b@b.com".to_string()),
        phone: Some("2".to_string()),
        company: Some("B Pty Ltd".to_string()),
        ..Default::default()
    }
}

#[test]
fn same_category_uses_the_same_template_family() {
    let healthcare = hot_record_healthcare();
    let ecommerce = hot_record_ecommerce();

    let result_a = generate_result(&healthcare, &score_result(&healthcare));
    let result_b = generate_result(&ecommerce, &score_result(&ecommerce));

    assert_eq!(result_a.category, Category::Hot);
    assert_eq!(result_b.category, Category::Hot);
    // Same template family: identical headline and CTA, only interpolated
    // body values differ.
    assert_eq!(result_a.headline, result_b.headline);
    assert_eq!(result_a.cta_action, result_b.cta_action);
    assert_eq!(result_a.recommendations, result_b.recommendations);
}

#[test]
fn industry_label_is_interpolated() {
    let healthcare = hot_record_healthcare();
    let result = generate_result(&healthcare, &score_result(&healthcare));
    assert!(result.body.contains("Healthcare"));

    let ecommerce = hot_record_ecommerce();
    let result = generate_result(&ecommerce, &score_result(&ecommerce));
    assert!(result.body.contains("E-commerce"));
}

#[test]
fn unrecognized_business_type_gets_generic_label() {
    let record: SubmissionRecord = serde_json::from_value(serde_json::json!({
        "businessType": "underwater-basket-weaving"
    }))
    .unwrap();
    let result = generate_result(
        &record,
        &ScoreResult {
            score: 85,
            category: Category::Hot,
        },
    );
    assert!(result.body.contains("business"));
}

#[test]
fn healthcare_clause_only_for_healthcare() {
    let sr = ScoreResult {
        score: 90,
        category: Category::Hot,
    };
    let healthcare = hot_record_healthcare();
    let ecommerce = hot_record_ecommerce();
    assert!(generate_result(&healthcare, &sr)
        .body
        .contains("Healthcare Specialisation"));
    assert!(!generate_result(&ecommerce, &sr)
        .body
        .contains("Healthcare Specialisation"));
}

#[test]
fn savings_figure_appears_when_present() {
    let mut record = hot_record_ecommerce();
    record.estimated_savings = Some(42_500.0);
    let result = generate_result(&record, &score_result(&record));
    assert!(result.body.contains("42500"));
}

#[test]
fn every_category_yields_two_to_four_recommendations() {
    let cases = [
        (Category::Hot, 85),
        (Category::Warm, 70),
        (Category::Nurture, 55),
        (Category::Redirect, 20),
    ];
    for (category, score) in cases {
        let result = generate_result(
            &SubmissionRecord::default(),
            &ScoreResult { score, category },
        );
        assert!(
            (2..=4).contains(&result.recommendations.len()),
            "{:?} produced {} recommendations",
            category,
            result.recommendations.len()
        );
        assert!(!result.headline.is_empty());
        assert!(!result.body.is_empty());
    }
}

#[test]
fn redirect_names_alternatives_and_drops_the_cta() {
    let result = generate_result(
        &SubmissionRecord::default(),
        &ScoreResult {
            score: 30,
            category: Category::Redirect,
        },
    );
    assert!(result.cta_text.is_none());
    assert!(result.cta_action.is_none());
    // The redirect body points at concrete alternative providers.
    assert!(result.body.contains("Upwork"));
    assert!(result.body.contains("Cloudstaff"));
}

#[test]
fn non_redirect_categories_carry_an_action_identifier() {
    let expected = [
        (Category::Hot, "calendar"),
        (Category::Warm, "proposal"),
        (Category::Nurture, "download"),
    ];
    for (category, action) in expected {
        let result = generate_result(
            &SubmissionRecord::default(),
            &ScoreResult {
                score: 85,
                category,
            },
        );
        assert_eq!(result.cta_action.as_deref(), Some(action));
    }
}
