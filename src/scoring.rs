//! Qualification scoring engine.
//!
//! Pure additive point model over a [`SubmissionRecord`]: every answer
//! contributes a fixed number of points on top of a base of 50, the sum is
//! clamped to [0, 100], and four ascending thresholds map the score to a
//! category. The point tables and thresholds live here and nowhere else;
//! content generation and notifications derive from the same functions.
//!
//! The engine is total: missing or unrecognized values contribute zero
//! points, never an error.

use crate::models::{
    AdminHours, BusinessType, Category, ScoreResult, SubmissionRecord, SupportStatus, Timeline,
};

/// Every record starts here; disqualifying answers pull the sum below it.
pub const BASE_SCORE: i32 = 50;

/// Upper bound on the challenge-specificity contribution. Challenge count
/// is a weak signal and must stay small relative to the base.
const CHALLENGE_BONUS_CAP: i32 = 10;

/// Free-text challenges shorter than this are treated as unspecified.
const MIN_CHALLENGE_TEXT_LEN: usize = 20;

fn business_type_points(business_type: BusinessType) -> i32 {
    match business_type {
        BusinessType::Healthcare => 20,
        BusinessType::Ecommerce => 15,
        BusinessType::Professional => 10,
        BusinessType::Accounting => 10,
        BusinessType::Marketing => 10,
        BusinessType::Trades => 5,
        // Explicitly turned away: drags the total well below the base.
        BusinessType::Financial => -50,
        BusinessType::Other => 5,
        BusinessType::Unknown => 0,
    }
}

fn admin_hours_points(hours: AdminHours) -> i32 {
    match hours {
        AdminHours::UpToFive => 5,
        AdminHours::FiveToTen => 10,
        AdminHours::TenToTwenty => 15,
        AdminHours::TwentyToForty => 20,
        AdminHours::FortyPlus => 25,
        AdminHours::Unknown => 0,
    }
}

fn timeline_points(timeline: Timeline) -> i32 {
    match timeline {
        Timeline::Urgent => 20,
        Timeline::TwoWeeks => 15,
        Timeline::Month => 10,
        Timeline::Quarter => 5,
        Timeline::Exploring => 5,
        Timeline::Research => 0,
        Timeline::Unknown => 0,
    }
}

fn support_points(support: SupportStatus) -> i32 {
    match support {
        SupportStatus::Replace => 15,
        SupportStatus::Partial => 10,
        SupportStatus::NoSupport => 5,
        SupportStatus::Unknown => 0,
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Challenge specificity: checklist answers scale at 2 points per selected
/// item capped at [`CHALLENGE_BONUS_CAP`]; otherwise meaningful free text
/// earns a flat 5. The checklist branch wins when both are populated.
fn challenge_points(record: &SubmissionRecord) -> i32 {
    if !record.selected_challenges.is_empty() {
        (record.selected_challenges.len() as i32 * 2).min(CHALLENGE_BONUS_CAP)
    } else if record
        .main_challenges
        .as_deref()
        .is_some_and(|c| c.trim().len() > MIN_CHALLENGE_TEXT_LEN)
    {
        5
    } else {
        0
    }
}

/// Computes the qualification score for a record.
///
/// Deterministic and side-effect free. The internal sum is signed and may
/// conceptually exceed 100 or drop below 0; the final clamp is a hard
/// ceiling and floor, applied once at the end.
pub fn score(record: &SubmissionRecord) -> i32 {
    let mut total = BASE_SCORE;

    total += record.business_type.map_or(0, business_type_points);
    total += record.admin_hours_per_week.map_or(0, admin_hours_points);
    total += record.timeline.map_or(0, timeline_points);
    total += record.has_current_support.map_or(0, support_points);

    if record.agreed_to_full_time {
        total += 10;
    }

    // Contact completeness: partially-filled submissions score lower.
    if is_present(&record.name) && is_present(&record.email) && is_present(&record.phone) {
        total += 5;
    }

    // A company name signals a registered, serious business.
    if is_present(&record.company) {
        total += 3;
    }

    total += challenge_points(record);

    total.clamp(0, 100)
}

/// Maps a score to its category. Total over all integers; the four bands
/// partition the range with no gaps or overlaps.
pub fn categorize(score: i32) -> Category {
    if score >= 80 {
        Category::Hot
    } else if score >= 65 {
        Category::Warm
    } else if score >= 50 {
        Category::Nurture
    } else {
        Category::Redirect
    }
}

/// Convenience wrapper producing the pair the rest of the system consumes.
pub fn score_result(record: &SubmissionRecord) -> ScoreResult {
    let score = score(record);
    ScoreResult {
        score,
        category: categorize(score),
    }
}
