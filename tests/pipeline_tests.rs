/// Pipeline-stage tests with the outbound webhook mocked.
///
/// The full persist path needs a live database and lives in
/// `storage_integration.rs`; here the dispatcher boundary and the
/// validate/enrich stages are exercised in isolation.
use lead_qualification_api::models::{Category, ScoreResult, SubmissionRecord};
use lead_qualification_api::notify::NotificationDispatcher;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn scored_record() -> (SubmissionRecord, ScoreResult) {
    let record = SubmissionRecord {
        name: Some("Jordan Reeves".to_string()),
        email: Some("jordan@clinicgroup.com.au".to_string()),
        phone: Some("0412 345 678".to_string()),
        selected_challenges: vec!["Medicare/DVA claiming".to_string()],
        estimated_savings: Some(38_000.0),
        ..Default::default()
    };
    let result = ScoreResult {
        score: 85,
        category: Category::Hot,
    };
    (record, result)
}

#[tokio::test]
async fn notification_posts_to_the_configured_webhook() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hooks/leads"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dispatcher =
        NotificationDispatcher::new(Some(format!("{}/hooks/leads", mock_server.uri()))).unwrap();

    let (record, result) = scored_record();
    let outcome = dispatcher.notify(&record, Uuid::new_v4(), &result).await;
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn webhook_server_error_surfaces_as_notify_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dispatcher = NotificationDispatcher::new(Some(mock_server.uri())).unwrap();
    let (record, result) = scored_record();
    let outcome = dispatcher.notify(&record, Uuid::new_v4(), &result).await;
    assert!(outcome.is_err());
}

#[tokio::test]
async fn unreachable_webhook_fails_without_panicking() {
    // Nothing listens here; the dispatcher must return an error the
    // pipeline can log and discard, never unwind.
    let dispatcher =
        NotificationDispatcher::new(Some("http://127.0.0.1:9".to_string())).unwrap();
    let (record, result) = scored_record();
    let outcome = dispatcher.notify(&record, Uuid::new_v4(), &result).await;
    assert!(outcome.is_err());
}

#[tokio::test]
async fn missing_configuration_is_a_silent_no_op() {
    let dispatcher = NotificationDispatcher::new(None).unwrap();
    let (record, result) = scored_record();
    let outcome = dispatcher.notify(&record, Uuid::new_v4(), &result).await;
    assert!(outcome.is_ok());
}
