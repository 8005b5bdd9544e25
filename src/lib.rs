//! Lead Qualification API Library
//!
//! Core functionality for the lead qualification service: the scoring
//! engine and categorization thresholds, category-specific result content,
//! resumable form session state, the submission pipeline, lead storage,
//! and the best-effort notification dispatcher.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `content`: Category-specific result content generation.
//! - `db`: Database connection and pool management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Core data models.
//! - `notify`: Outbound notification dispatcher.
//! - `pipeline`: Submission pipeline orchestration.
//! - `scoring`: Qualification scoring engine.
//! - `session`: Resumable form session state.
//! - `storage`: Lead storage operations.

pub mod config;
pub mod content;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod scoring;
pub mod session;
pub mod storage;
