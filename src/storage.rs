use crate::errors::AppError;
use crate::models::{ClientContext, Lead, ScoreResult, SubmissionRecord};
use sqlx::types::ipnetwork::IpNetwork;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Insert-only storage for qualified leads.
///
/// Exactly one row per successful pipeline run; rows are never updated or
/// deleted. The full original payload travels along as a raw JSON snapshot
/// so future columns can be backfilled from it.
pub struct LeadStorage {
    pool: PgPool,
}

impl LeadStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the lead row and returns its generated id.
    pub async fn insert_lead(
        &self,
        record: &SubmissionRecord,
        context: &ClientContext,
        result: &ScoreResult,
        payload_raw: &serde_json::Value,
        source: &str,
    ) -> Result<Uuid, AppError> {
        let row: (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO leads (
                name, email, phone, company,
                business_type, other_business_type, admin_hours,
                has_current_support, main_challenges, selected_challenges,
                timeline, agreed_to_full_time, estimated_savings,
                score, category, payload_raw,
                ip, user_agent, referrer, source, submitted_at
            )
            VALUES (
                $1, $2, $3, $4,
                $5, $6, $7,
                $8, $9, $10,
                $11, $12, $13,
                $14, $15, $16,
                $17, $18, $19, $20, $21
            )
            RETURNING id
            "#,
        )
        .bind(record.name.as_deref().unwrap_or_default())
        .bind(record.email.as_deref().unwrap_or_default())
        .bind(record.phone.as_deref().unwrap_or_default())
        .bind(record.company.as_deref())
        .bind(record.business_type.map(|b| b.as_str()).unwrap_or("unknown"))
        .bind(record.other_business_type.as_deref())
        .bind(
            record
                .admin_hours_per_week
                .map(|h| h.as_str())
                .unwrap_or("unknown"),
        )
        .bind(
            record
                .has_current_support
                .map(|s| s.as_str())
                .unwrap_or("unknown"),
        )
        .bind(record.main_challenges.as_deref())
        .bind(Json(&record.selected_challenges))
        .bind(record.timeline.map(|t| t.as_str()).unwrap_or("unknown"))
        .bind(record.agreed_to_full_time)
        .bind(record.estimated_savings)
        .bind(result.score)
        .bind(result.category.as_str())
        .bind(payload_raw)
        .bind(context.ip.map(IpNetwork::from))
        .bind(context.user_agent.as_deref())
        .bind(context.referrer.as_deref())
        .bind(source)
        .bind(record.submitted_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row.0)
    }

    /// Fetches a lead by id. Used by operational tooling and the storage
    /// round-trip test; not exposed over HTTP.
    pub async fn get_lead(&self, id: Uuid) -> Result<Lead, AppError> {
        let lead = sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::Internal(format!("Lead {} not found", id)))?;

        Ok(lead)
    }
}
