use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::ipnetwork::IpNetwork;
use sqlx::types::Json;
use sqlx::FromRow;
use std::net::IpAddr;
use uuid::Uuid;

// ============ Field Enums ============
//
// Every answer field is a closed enum with an `Unknown` catch-all so that
// unrecognized wire values deserialize cleanly and contribute zero points,
// instead of failing the request or silently passing through as raw strings.

/// Business vertical selected on the first step of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Healthcare,
    Ecommerce,
    Professional,
    Accounting,
    Marketing,
    Trades,
    /// Vertical the business explicitly turns away; carries a strongly
    /// negative score modifier.
    Financial,
    Other,
    #[serde(other)]
    Unknown,
}

impl BusinessType {
    /// Wire value, matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Healthcare => "healthcare",
            BusinessType::Ecommerce => "ecommerce",
            BusinessType::Professional => "professional",
            BusinessType::Accounting => "accounting",
            BusinessType::Marketing => "marketing",
            BusinessType::Trades => "trades",
            BusinessType::Financial => "financial",
            BusinessType::Other => "other",
            BusinessType::Unknown => "unknown",
        }
    }

    /// Human-facing industry label used in generated content and
    /// notifications. Unrecognized types fall back to a generic label.
    pub fn display_label(&self) -> &'static str {
        match self {
            BusinessType::Healthcare => "Healthcare",
            BusinessType::Ecommerce => "E-commerce",
            BusinessType::Professional => "Professional Services",
            BusinessType::Accounting => "Accounting & Bookkeeping",
            BusinessType::Marketing => "Marketing & Creative",
            BusinessType::Trades => "Trades & Construction",
            BusinessType::Financial => "Financial Services",
            BusinessType::Other | BusinessType::Unknown => "Business",
        }
    }
}

/// Weekly hours currently spent on admin work, as an ordinal bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminHours {
    #[serde(rename = "0-5")]
    UpToFive,
    #[serde(rename = "5-10")]
    FiveToTen,
    #[serde(rename = "10-20")]
    TenToTwenty,
    #[serde(rename = "20-40")]
    TwentyToForty,
    #[serde(rename = "40+")]
    FortyPlus,
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl AdminHours {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminHours::UpToFive => "0-5",
            AdminHours::FiveToTen => "5-10",
            AdminHours::TenToTwenty => "10-20",
            AdminHours::TwentyToForty => "20-40",
            AdminHours::FortyPlus => "40+",
            AdminHours::Unknown => "unknown",
        }
    }
}

/// Current support situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportStatus {
    /// Actively looking to switch providers. Highest intent.
    #[serde(rename = "replace")]
    Replace,
    /// Has some support but needs more.
    #[serde(rename = "some")]
    Partial,
    /// No support at all yet.
    #[serde(rename = "none")]
    NoSupport,
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl SupportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportStatus::Replace => "replace",
            SupportStatus::Partial => "some",
            SupportStatus::NoSupport => "none",
            SupportStatus::Unknown => "unknown",
        }
    }
}

/// How soon the prospect wants to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Urgent,
    #[serde(rename = "2weeks")]
    TwoWeeks,
    Month,
    Quarter,
    Exploring,
    Research,
    #[serde(other)]
    Unknown,
}

impl Timeline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::Urgent => "urgent",
            Timeline::TwoWeeks => "2weeks",
            Timeline::Month => "month",
            Timeline::Quarter => "quarter",
            Timeline::Exploring => "exploring",
            Timeline::Research => "research",
            Timeline::Unknown => "unknown",
        }
    }
}

/// Qualification category derived from the score. Four non-overlapping
/// bands; every score maps to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hot,
    Warm,
    Nurture,
    Redirect,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hot => "hot",
            Category::Warm => "warm",
            Category::Nurture => "nurture",
            Category::Redirect => "redirect",
        }
    }
}

// ============ Submission Payload ============

/// The canonical lead payload produced by the form.
///
/// Every field is optional at the type level: the scoring engine is total
/// over partial records (missing answers contribute zero points), and the
/// same type backs the in-progress draft held by a form session. Required
/// fields are enforced by the submission pipeline's validate stage, not by
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionRecord {
    pub business_type: Option<BusinessType>,
    /// Free-text description, present iff business_type is "other".
    pub other_business_type: Option<String>,
    pub admin_hours_per_week: Option<AdminHours>,
    pub has_current_support: Option<SupportStatus>,
    /// Free-text challenges (non-checklist business types).
    pub main_challenges: Option<String>,
    /// Checklist challenges (healthcare track). Either this or
    /// main_challenges is populated in practice, but scoring and content
    /// tolerate either, both, or neither.
    pub selected_challenges: Vec<String>,
    pub timeline: Option<Timeline>,
    /// Hard gate: submissions are rejected unless true.
    pub agreed_to_full_time: bool,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    /// Derived by the client-side calculator; clamped non-negative at
    /// enrichment and echoed back, never recomputed.
    pub estimated_savings: Option<f64>,
    /// Advisory client-side score. Never trusted; the pipeline recomputes.
    pub qualification_score: Option<i32>,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Request-derived audit context attached at the enrich stage. Opaque
/// passthrough: none of these values are validated or interpreted.
#[derive(Debug, Clone, Default)]
pub struct ClientContext {
    pub ip: Option<IpAddr>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}

// ============ Derived Results ============

/// Server-computed score and category. Always recomputed at submission
/// time; never persisted independently of the record that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Integer clamped to [0, 100].
    pub score: i32,
    pub category: Category,
}

/// Category-tailored result content rendered for the prospect. Purely a
/// view over (record, score result); never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationResult {
    pub score: i32,
    pub category: Category,
    pub headline: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    /// Opaque action identifier consumed by the UI layer ("calendar",
    /// "proposal", "download"). Absent for redirect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_action: Option<String>,
    pub recommendations: Vec<String>,
}

// ============ Persisted Entity ============

/// One completed, scored submission. Created exactly once per successful
/// pipeline run; never mutated after creation.
#[derive(Debug, Clone, FromRow)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub business_type: String,
    pub other_business_type: Option<String>,
    pub admin_hours: String,
    pub has_current_support: String,
    pub main_challenges: Option<String>,
    pub selected_challenges: Json<Vec<String>>,
    pub timeline: String,
    pub agreed_to_full_time: bool,
    pub estimated_savings: Option<f64>,
    pub score: i32,
    pub category: String,
    /// Raw JSON snapshot of the original payload, kept for
    /// forward-compatible auditing.
    pub payload_raw: serde_json::Value,
    pub ip: Option<IpNetwork>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub source: String,
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// ============ API DTOs ============

/// Success body for POST /qualification/submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_savings: Option<f64>,
    pub message: String,
}
