use std::sync::{Arc, Mutex};

use greview_core::types::ChangeInfo;
use greview_core::{ChangeId, ReviewPreset, RevisionId};
use greview_rest::{HttpReviewClient, RemoteConfig, ReviewTransport};
use greview_submit::{
    CascadeStatus, CurrentRevisionSelector, Notifier, ReviewAction, ReviewOutcome,
    ReviewSubmissionService, SubmissionError, SubmitOptions,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gerrit_json(value: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(format!(")]}}'\n{value}"), "application/json")
}

fn client(server: &MockServer) -> Arc<HttpReviewClient> {
    Arc::new(
        HttpReviewClient::new(RemoteConfig::anonymous(server.uri()).with_credentials("jdoe", "secret"))
            .unwrap(),
    )
}

#[derive(Default)]
struct Collected {
    info: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl Notifier for Collected {
    fn notify_information(&self, title: &str, message: &str) {
        self.info.lock().unwrap().push(format!("{title}: {message}"));
    }

    fn notify_error(&self, title: &str, message: &str) {
        self.errors.lock().unwrap().push(format!("{title}: {message}"));
    }
}

async fn mount_change(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/a/changes/42"))
        .respond_with(gerrit_json(serde_json::json!({
            "id": "demo~master~I8473b95934b5732ac55d26311a706c9c2bde9940",
            "_number": 42,
            "subject": "Fix bug",
            "current_revision": "674ac754f91e64a0efb8087e59a176484bd534d1"
        })))
        .mount(server)
        .await;
}

const REVISION_PATH: &str =
    "/a/changes/demo~master~I8473b95934b5732ac55d26311a706c9c2bde9940/revisions/674ac754f91e64a0efb8087e59a176484bd534d1";

// === Vote with drafts, no notification, then submit ===
#[tokio::test]
async fn full_review_publishes_drafts_and_submits() {
    let server = MockServer::start().await;
    mount_change(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{REVISION_PATH}/drafts")))
        .respond_with(gerrit_json(serde_json::json!({
            "a.txt": [{
                "id": "TvcXrmjM",
                "path": "a.txt",
                "line": 3,
                "message": "rename this",
                "updated": "2014-01-10 09:12:44.000000000"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{REVISION_PATH}/review")))
        .and(body_json(serde_json::json!({
            "labels": {"Code-Review": 2},
            "message": "Ship it",
            "notify": "NONE",
            "comments": {
                "a.txt": [{
                    "id": "TvcXrmjM",
                    "path": "a.txt",
                    "line": 3,
                    "message": "rename this",
                    "updated": "2014-01-10 09:12:44.000000000"
                }]
            }
        })))
        .respond_with(gerrit_json(serde_json::json!({"labels": {"Code-Review": 2}})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/a/changes/demo~master~I8473b95934b5732ac55d26311a706c9c2bde9940/submit"))
        .respond_with(gerrit_json(serde_json::json!({
            "id": "demo~master~I8473b95934b5732ac55d26311a706c9c2bde9940",
            "subject": "Fix bug",
            "status": "MERGED"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let change = client.get_change(&ChangeId::new("42")).await.unwrap();
    let notifier = Arc::new(Collected::default());

    let action = ReviewAction::new(
        ReviewPreset::find("code-review+2").unwrap(),
        Arc::new(ReviewSubmissionService::new(client.clone())),
        Arc::new(CurrentRevisionSelector),
        notifier.clone(),
        client.clone(),
    )
    .with_defaults(SubmitOptions {
        message: Some("Ship it".into()),
        notify: false,
        cascade_submit: true,
        ..Default::default()
    });

    let outcome = action.perform(&change).await.unwrap();
    match outcome {
        ReviewOutcome::Posted(posted) => {
            assert!(matches!(posted.cascade, CascadeStatus::Submitted));
            assert_eq!(posted.revision, RevisionId::new("674ac754f91e64a0efb8087e59a176484bd534d1"));
        }
        ReviewOutcome::Cancelled => panic!("expected posted review"),
    }

    assert_eq!(
        *notifier.info.lock().unwrap(),
        vec!["Review posted: Review for change 'Fix bug' posted: Code-Review: 2".to_string()]
    );
    assert!(notifier.errors.lock().unwrap().is_empty());
}

// === Server rejects the vote: no submit is attempted ===
#[tokio::test]
async fn rejected_review_is_not_submitted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/a/changes/42/revisions/current/drafts"))
        .respond_with(gerrit_json(serde_json::json!({})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/a/changes/42/revisions/current/review"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Applying label \"Verified\": 1 is restricted"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/a/changes/42/submit"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = ReviewSubmissionService::new(client(&server));
    let err = service
        .submit(
            &ChangeId::new("42"),
            &RevisionId::current(),
            "Verified",
            1,
            SubmitOptions {
                cascade_submit: true,
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::Submit { .. }));
    assert_eq!(err.server_message(), Some("Applying label \"Verified\": 1 is restricted"));
}

// === Drafts cannot be read: nothing is posted ===
#[tokio::test]
async fn unreachable_drafts_abort_review() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/a/changes/42/revisions/current/drafts"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/a/changes/42/revisions/current/review"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let notifier = Arc::new(Collected::default());
    let action = ReviewAction::new(
        ReviewPreset::find("code-review-1").unwrap(),
        Arc::new(ReviewSubmissionService::new(client(&server))),
        Arc::new(CurrentRevisionSelector),
        notifier.clone(),
        client(&server),
    );

    let err = action.perform(&ChangeInfo::new("42", "Fix bug")).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Fetch { .. }));
    assert!(notifier.info.lock().unwrap().is_empty());
    assert_eq!(notifier.errors.lock().unwrap().len(), 1);
}
