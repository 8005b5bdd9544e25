//! Resumable form session state.
//!
//! Holds the in-progress draft of a submission across an arbitrary number
//! of edits, keyed by a generated session identifier, and recomputes a
//! live advisory score on every change. Persistence goes through an
//! injected [`SessionStore`] port so the logic is testable without a real
//! storage backend. Only `{ formData, sessionId }` is ever persisted;
//! timestamps and the advisory score are recomputed on load.
//!
//! The advisory score uses the same formula as the server but is never
//! authoritative: the pipeline recomputes independently at submission time.

use crate::models::{ScoreResult, SubmissionRecord};
use crate::scoring;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Persistence port for the draft blob. Implementations own their own
/// failure handling; the session treats all three operations as
/// fire-and-forget.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, blob: &str);
    fn clear(&self);
}

/// The durable slice of a session. Deliberately excludes timestamps and
/// the derived score.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionSnapshot {
    form_data: SubmissionRecord,
    session_id: String,
}

/// A client-scoped draft of an in-progress submission.
pub struct FormSession<S: SessionStore> {
    store: S,
    form_data: SubmissionRecord,
    session_id: String,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl<S: SessionStore> FormSession<S> {
    /// Opens a session, resuming a persisted draft if the store holds one.
    /// A corrupt blob is discarded and replaced with a fresh session.
    pub fn open(store: S) -> Self {
        let snapshot = store
            .load()
            .and_then(|blob| serde_json::from_str::<SessionSnapshot>(&blob).ok());

        match snapshot {
            Some(snapshot) => Self {
                store,
                form_data: snapshot.form_data,
                session_id: snapshot.session_id,
                started_at: Utc::now(),
                completed_at: None,
            },
            None => {
                let session = Self {
                    store,
                    form_data: SubmissionRecord::default(),
                    session_id: generate_session_id(),
                    started_at: Utc::now(),
                    completed_at: None,
                };
                session.persist();
                session
            }
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn form_data(&self) -> &SubmissionRecord {
        &self.form_data
    }

    /// Applies a partial edit to the draft and persists the new snapshot.
    pub fn update<F: FnOnce(&mut SubmissionRecord)>(&mut self, edit: F) {
        edit(&mut self.form_data);
        self.persist();
    }

    /// Live advisory score over the current draft. Same formula as the
    /// server-side engine; recomputed on demand, never stored.
    pub fn live_score(&self) -> ScoreResult {
        scoring::score_result(&self.form_data)
    }

    /// Records successful submission. Set once; repeated calls are a no-op.
    pub fn mark_completed(&mut self) {
        if self.completed_at.is_none() {
            self.completed_at = Some(Utc::now());
        }
    }

    /// Discards all draft state, issues a fresh session identifier, and
    /// clears the persisted copy so the reset survives reloads.
    pub fn reset(&mut self) {
        self.form_data = SubmissionRecord::default();
        self.session_id = generate_session_id();
        self.started_at = Utc::now();
        self.completed_at = None;
        self.store.clear();
    }

    /// Snapshot of the current draft, ready for the submission pipeline.
    pub fn submission(&self) -> SubmissionRecord {
        let mut record = self.form_data.clone();
        record.qualification_score = Some(self.live_score().score);
        record.submitted_at = Some(Utc::now());
        record
    }

    fn persist(&self) {
        let snapshot = SessionSnapshot {
            form_data: self.form_data.clone(),
            session_id: self.session_id.clone(),
        };
        if let Ok(blob) = serde_json::to_string(&snapshot) {
            self.store.save(&blob);
        }
    }
}

/// Collision-resistant opaque identifier scoped to (creation time, random
/// suffix). Advisory metadata only, never a deduplication key.
fn generate_session_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("qual_{}_{}", Utc::now().timestamp_millis(), &suffix[..9])
}

/// In-process store used by tests and embedded callers. Clones share the
/// same underlying blob.
#[derive(Clone, Default)]
pub struct MemoryStore {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.blob.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, blob: &str) {
        if let Ok(mut guard) = self.blob.lock() {
            *guard = Some(blob.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.blob.lock() {
            *guard = None;
        }
    }
}
