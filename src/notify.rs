//! Best-effort lead notification dispatcher.
//!
//! Posts a flat, structured alert to an operator-configured webhook when a
//! lead is persisted. Failure here is the dispatcher's own error type and
//! stops at the pipeline's notify boundary: the lead is already durably
//! captured, and notification is a convenience, not a correctness
//! requirement. With no webhook configured every call is a silent no-op.

use crate::models::{Category, ScoreResult, SubmissionRecord};
use serde_json::json;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Longest challenge summary included in a notification.
const CHALLENGE_SUMMARY_MAX: usize = 200;

/// Dispatch failure. Deliberately not a variant of [`crate::errors::AppError`]:
/// the pipeline logs it and moves on, it never shapes an HTTP response.
#[derive(Debug)]
pub struct NotifyError(pub String);

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification error: {}", self.0)
    }
}

impl std::error::Error for NotifyError {}

#[derive(Clone)]
pub struct NotificationDispatcher {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl NotificationDispatcher {
    /// Builds the dispatcher with a timed client. `webhook_url = None`
    /// produces a permanently no-op dispatcher.
    pub fn new(webhook_url: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            webhook_url,
        })
    }

    /// Formats and posts the lead alert. Never called for leads that failed
    /// to persist; callers must treat any `Err` as log-and-continue.
    pub async fn notify(
        &self,
        record: &SubmissionRecord,
        lead_id: Uuid,
        result: &ScoreResult,
    ) -> Result<(), NotifyError> {
        let Some(ref url) = self.webhook_url else {
            tracing::debug!("No notification webhook configured; skipping lead {}", lead_id);
            return Ok(());
        };

        let message = build_message(record, lead_id, result);

        let response = self
            .client
            .post(url)
            .json(&message)
            .send()
            .await
            .map_err(|e| NotifyError(format!("webhook request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(NotifyError(format!(
                "webhook returned {}",
                response.status()
            )));
        }

        tracing::info!("✓ Notification sent for lead {}", lead_id);
        Ok(())
    }
}

/// Category → (priority label, visual marker) for the operational channel.
fn priority(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Hot => ("high", "🔥"),
        Category::Warm => ("medium", "⭐"),
        Category::Nurture => ("low", "🌱"),
        Category::Redirect => ("none", "↪"),
    }
}

/// Top challenges as a single bounded line: checklist items joined, or the
/// free-text answer, truncated on a char boundary.
fn challenge_summary(record: &SubmissionRecord) -> String {
    let raw = if !record.selected_challenges.is_empty() {
        record.selected_challenges.join(", ")
    } else {
        record.main_challenges.clone().unwrap_or_default()
    };

    match raw.char_indices().nth(CHALLENGE_SUMMARY_MAX) {
        Some((idx, _)) => format!("{}…", &raw[..idx]),
        None => raw,
    }
}

fn build_message(
    record: &SubmissionRecord,
    lead_id: Uuid,
    result: &ScoreResult,
) -> serde_json::Value {
    let (priority_label, marker) = priority(result.category);
    let industry = record
        .business_type
        .map_or("Business", |bt| bt.display_label());

    json!({
        "priority": priority_label,
        "headline": format!(
            "{} {} lead: {} ({})",
            marker,
            result.category.as_str().to_uppercase(),
            record.name.as_deref().unwrap_or("(no name)"),
            industry,
        ),
        "name": record.name,
        "email": record.email,
        "phone": record.phone,
        "company": record.company,
        "business_type": record.business_type.map(|b| b.as_str()),
        "timeline": record.timeline.map(|t| t.as_str()),
        "challenges": challenge_summary(record),
        "score": result.score,
        "category": result.category.as_str(),
        "estimated_savings": record.estimated_savings,
        "footer": format!("Lead ref: {}", lead_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_summary_is_bounded() {
        let record = SubmissionRecord {
            main_challenges: Some("x".repeat(5000)),
            ..Default::default()
        };
        let summary = challenge_summary(&record);
        assert!(summary.chars().count() <= CHALLENGE_SUMMARY_MAX + 1);
    }

    #[test]
    fn checklist_preferred_over_free_text() {
        let record = SubmissionRecord {
            selected_challenges: vec!["Billing".to_string(), "Scheduling".to_string()],
            main_challenges: Some("ignored".to_string()),
            ..Default::default()
        };
        assert_eq!(challenge_summary(&record), "Billing, Scheduling");
    }

    #[test]
    fn message_carries_priority_and_lead_ref() {
        let record = SubmissionRecord {
            name: Some("Ada".to_string()),
            ..Default::default()
        };
        let lead_id = Uuid::new_v4();
        let message = build_message(
            &record,
            lead_id,
            &ScoreResult {
                score: 85,
                category: Category::Hot,
            },
        );
        assert_eq!(message["priority"], "high");
        assert_eq!(message["score"], 85);
        assert!(message["footer"]
            .as_str()
            .unwrap()
            .contains(&lead_id.to_string()));
    }
}
