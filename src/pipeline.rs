//! Submission pipeline: validate → enrich → score → persist → notify →
//! respond.
//!
//! Persist and notify are sequential but independent in failure domain: a
//! persistence failure is fatal to the request, while a notification
//! failure is caught at its own boundary, logged once, and abandoned; the
//! lead is already durably captured by then. Each POST creates a new lead;
//! no deduplication key is computed.

use crate::errors::AppError;
use crate::handlers::AppState;
use crate::models::{ClientContext, SubmissionRecord, SubmitResponse};
use crate::scoring;
use crate::storage::LeadStorage;
use axum::http::HeaderMap;
use chrono::Utc;
use regex::Regex;

/// Processes one inbound submission end to end.
pub async fn submit(
    state: &AppState,
    headers: &HeaderMap,
    payload: serde_json::Value,
) -> Result<SubmitResponse, AppError> {
    // 1. Parse. A payload that doesn't match the expected shape at all is
    // a generic server error, never a raw deserializer message.
    let mut record: SubmissionRecord = serde_json::from_value(payload.clone())
        .map_err(|e| AppError::MalformedInput(e.to_string()))?;

    // 2. Validate. Short-circuits before anything is persisted or notified.
    validate(&record)?;

    // 3. Enrich. Request-derived audit context plus sanitized derived fields.
    let context = client_context(headers);
    record.estimated_savings = record.estimated_savings.map(|s| s.max(0.0));
    if record.submitted_at.is_none() {
        record.submitted_at = Some(Utc::now());
    }

    // 4. Score server-side. The client-computed score is advisory only.
    let result = scoring::score_result(&record);

    // 5. Persist exactly one lead. Failure here is fatal to the request.
    let storage = LeadStorage::new(state.db.clone());
    let lead_id = storage
        .insert_lead(&record, &context, &result, &payload, &state.config.lead_source)
        .await?;

    tracing::info!(
        "Lead {} persisted: score={} category={}",
        lead_id,
        result.score,
        result.category.as_str()
    );

    // 6. Notify, best-effort. The dispatcher's error type stops here.
    if let Err(e) = state.dispatcher.notify(&record, lead_id, &result).await {
        tracing::warn!("Notification failed for lead {}: {}", lead_id, e);
    }

    // 7. Respond with the server-computed score.
    Ok(SubmitResponse {
        success: true,
        score: result.score,
        estimated_savings: record.estimated_savings,
        message: "Your information has been received. We'll contact you within 24 hours."
            .to_string(),
    })
}

/// Required-field presence, email shape, and the full-time commitment gate.
pub fn validate(record: &SubmissionRecord) -> Result<(), AppError> {
    let mut missing = Vec::new();

    if is_blank(&record.name) {
        missing.push("name");
    }
    if is_blank(&record.email) {
        missing.push("email");
    }
    if is_blank(&record.phone) {
        missing.push("phone");
    }
    if record.business_type.is_none() {
        missing.push("businessType");
    }
    if record.admin_hours_per_week.is_none() {
        missing.push("adminHoursPerWeek");
    }
    if record.has_current_support.is_none() {
        missing.push("hasCurrentSupport");
    }
    if record.timeline.is_none() {
        missing.push("timeline");
    }

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    if let Some(email) = record.email.as_deref() {
        if !is_valid_email(email) {
            return Err(AppError::Validation(format!(
                "Invalid email address: {}",
                email
            )));
        }
    }

    // Hard gate: every persisted lead carries the commitment acknowledgement.
    if !record.agreed_to_full_time {
        return Err(AppError::Validation(
            "Full-time commitment acknowledgement is required".to_string(),
        ));
    }

    Ok(())
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Standard address-shape check (simplified RFC 5322).
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 5 || !email.contains('@') || !email.contains('.') {
        return false;
    }

    // Static pattern; cannot fail to compile.
    let email_regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap();

    email_regex.is_match(email)
}

/// Extracts the audit context from request headers without trusting or
/// validating their content. The client IP comes from the first hop of the
/// forwarded-for chain, with a real-ip fallback.
pub fn client_context(headers: &HeaderMap) -> ClientContext {
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    };

    let ip = header_str("x-forwarded-for")
        .and_then(|chain| chain.split(',').next().map(|hop| hop.trim().to_string()))
        .or_else(|| header_str("x-real-ip"))
        .and_then(|raw| raw.parse().ok());

    ClientContext {
        ip,
        user_agent: header_str("user-agent"),
        referrer: header_str("referer"),
    }
}
