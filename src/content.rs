//! Category-specific result content.
//!
//! Maps a scored submission to one of four fixed content templates keyed by
//! category. Two records with the same category always draw from the same
//! template family; only the interpolated values (industry label, savings
//! figure, conditional clauses) differ.

use crate::models::{
    BusinessType, Category, QualificationResult, ScoreResult, SubmissionRecord, Timeline,
};

/// Renders the tailored result for a scored submission.
///
/// Pure function over (record, score result). The category alone selects
/// the template; record fields only fill in the blanks.
pub fn generate_result(record: &SubmissionRecord, result: &ScoreResult) -> QualificationResult {
    match result.category {
        Category::Hot => hot_result(record, result.score),
        Category::Warm => warm_result(record, result.score),
        Category::Nurture => nurture_result(record, result.score),
        Category::Redirect => redirect_result(record, result.score),
    }
}

fn industry_label(record: &SubmissionRecord) -> &'static str {
    record
        .business_type
        .map_or("Business", |bt| bt.display_label())
}

fn hot_result(record: &SubmissionRecord, score: i32) -> QualificationResult {
    let industry = industry_label(record);

    let mut body = format!(
        "Based on your answers, here's why we're confident we can transform your {} operations:\n\n\
         ✅ Your {} Needs: Our team has deep experience with the specific challenges you're facing.\n",
        industry.to_lowercase(),
        industry,
    );

    if record.timeline == Some(Timeline::Urgent) {
        body.push_str("✅ Your Timeline: We can move quickly to get you the support you need.\n");
    }
    if record.business_type == Some(BusinessType::Healthcare) {
        body.push_str(
            "✅ Healthcare Specialisation: Our dedicated healthcare track covers claiming, \
             scheduling, and practice software end to end.\n",
        );
    }
    body.push_str(
        "✅ Your Commitment: You understand the value of dedicated, full-time support.\n\n\
         Your dedicated Client Success Manager can show you:\n\
         • How similar businesses reduced admin time by 60%\n\
         • Exactly how we'll handle your specific pain points",
    );
    if let Some(savings) = record.estimated_savings {
        body.push_str(&format!(
            "\n• How we'd lock in your estimated ${savings:.0}/year in savings"
        ));
    }

    QualificationResult {
        score,
        category: Category::Hot,
        headline: "Perfect! You're exactly who we built this for".to_string(),
        body,
        cta_text: Some("Book Your Strategy Call".to_string()),
        cta_action: Some("calendar".to_string()),
        recommendations: vec![
            "Prepare a list of your most time-consuming tasks".to_string(),
            "Think about your ideal team structure".to_string(),
            "Consider which processes you want to delegate first".to_string(),
        ],
    }
}

fn warm_result(record: &SubmissionRecord, score: i32) -> QualificationResult {
    let mut body = format!(
        "You're exactly the type of {} we love working with. Based on your needs, we can \
         create a customised solution that:\n\n\
         • Addresses your immediate challenges\n\
         • Scales with your growth plans\n\
         • Integrates seamlessly with your existing operations\n\
         • Delivers measurable ROI within 60 days",
        industry_label(record).to_lowercase(),
    );
    if let Some(savings) = record.estimated_savings {
        body.push_str(&format!(
            "\n• Targets the ${savings:.0}/year in savings your numbers suggest"
        ));
    }
    body.push_str(
        "\n\nOur approach is different because we invest in our team's success, which \
         translates directly to your success.",
    );

    QualificationResult {
        score,
        category: Category::Warm,
        headline: "Great match! Let's explore how we can help".to_string(),
        body,
        cta_text: Some("Get Your Custom Proposal".to_string()),
        cta_action: Some("proposal".to_string()),
        recommendations: vec![
            "Review our case studies for similar businesses".to_string(),
            "Calculate your potential time savings".to_string(),
            "Consider starting with a pilot program".to_string(),
        ],
    }
}

fn nurture_result(_record: &SubmissionRecord, score: i32) -> QualificationResult {
    QualificationResult {
        score,
        category: Category::Nurture,
        headline: "Let's make sure you choose the right partner".to_string(),
        body: "Outsourcing is a big decision, and we want to make sure you have all the \
               information you need.\n\n\
               Here's what sets professional providers apart from freelancer marketplaces:\n\n\
               The Hidden Costs of Cheap:\n\
               • Unincorporated operators = your legal liability\n\
               • No backup when someone's sick\n\
               • Constant retraining from turnover\n\
               • No data security guarantees\n\n\
               What to look for instead:\n\
               • Incorporated and insured for your protection\n\
               • A continuous talent pipeline, not ad-hoc hires\n\
               • Staff retention well above the industry average"
            .to_string(),
        cta_text: Some("Download Our Free Guide".to_string()),
        cta_action: Some("download".to_string()),
        recommendations: vec![
            "Download the outsourcing cost comparison guide".to_string(),
            "Read our community impact report".to_string(),
            "Schedule a no-pressure consultation when ready".to_string(),
        ],
    }
}

fn redirect_result(_record: &SubmissionRecord, score: i32) -> QualificationResult {
    QualificationResult {
        score,
        category: Category::Redirect,
        headline: "We might not be the right fit, and that's okay".to_string(),
        // Redirect must point at concrete alternatives, not reattempt
        // conversion, and carries no CTA action.
        body: "Based on your priorities, these providers might better match your needs:\n\n\
               • For lowest price: Try Upwork or Onlinejobs.ph\n\
               • For larger scale operations: Consider Cloudstaff or Acquire BPO\n\
               • For specific industry needs: Look for specialised providers\n\n\
               We believe in finding the right match for everyone. Good luck with your search!"
            .to_string(),
        cta_text: None,
        cta_action: None,
        recommendations: vec![
            "Define your non-negotiable requirements".to_string(),
            "Research provider track records".to_string(),
            "Always check incorporation and insurance status".to_string(),
        ],
    }
}
