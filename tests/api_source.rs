mod common;

use common::mock_api::{MockApi, MockResponse};
use rollcall::config::ApiConfig;
use rollcall::model::{RollInput, RollState, StudentRollState};
use rollcall::source::{ApiClient, DataSource, SourceError};

fn client_for(mock: &MockApi) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: mock.base_url(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    })
    .unwrap()
}

#[tokio::test]
async fn fetches_students() {
    let mock = MockApi::start().await;
    mock.enqueue(
        "/get-homeboard-students",
        MockResponse::json(
            r#"{"students":[
                {"id":1,"first_name":"Bob","last_name":"Zed","rollState":"present"},
                {"id":2,"first_name":"Amy","last_name":"Young"}
            ]}"#,
        ),
    )
    .await;

    let students = client_for(&mock).fetch_students().await.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].roll_state, RollState::Present);
    assert_eq!(students[1].roll_state, RollState::Unmarked);

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/get-homeboard-students");
}

#[tokio::test]
async fn save_roll_posts_student_states() {
    let mock = MockApi::start().await;
    let source = DataSource::Api(client_for(&mock));

    let input = RollInput {
        student_roll_states: vec![
            StudentRollState {
                student_id: 1,
                roll_state: RollState::Late,
            },
            StudentRollState {
                student_id: 2,
                roll_state: RollState::Unmarked,
            },
        ],
    };
    source.save_roll(&input).await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/save-roll");
    assert_eq!(
        requests[0].json(),
        serde_json::json!({
            "student_roll_states": [
                {"student_id": 1, "roll_state": "late"},
                {"student_id": 2, "roll_state": "unmarked"}
            ]
        })
    );
}

#[tokio::test]
async fn fetches_activities() {
    let mock = MockApi::start().await;
    mock.enqueue(
        "/get-activities",
        MockResponse::json(
            r#"{"activity":[{
                "type":"roll",
                "date":"2024-03-01T09:00:00Z",
                "entity":{
                    "id":7,
                    "name":"Roll 7",
                    "completed_at":"2024-03-01T09:00:00Z",
                    "student_roll_states":[{"student_id":1,"roll_state":"absent"}]
                }
            }]}"#,
        ),
    )
    .await;

    let activities = client_for(&mock).fetch_activities().await.unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].entity.id, 7);
    assert_eq!(
        activities[0].entity.student_roll_states[0].roll_state,
        RollState::Absent
    );
}

#[tokio::test]
async fn server_error_is_reported_with_status() {
    let mock = MockApi::start().await;
    mock.enqueue(
        "/get-homeboard-students",
        MockResponse::error(500, "database offline"),
    )
    .await;

    let err = client_for(&mock).fetch_students().await.unwrap_err();
    match &err {
        SourceError::Status {
            status, message, ..
        } => {
            assert_eq!(*status, 500);
            assert!(message.contains("database offline"));
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let mock = MockApi::start().await;
    mock.enqueue(
        "/get-homeboard-students",
        MockResponse::json(r#"{"students": "nope"}"#),
    )
    .await;

    let err = client_for(&mock).fetch_students().await.unwrap_err();
    assert!(matches!(err, SourceError::Decode { .. }));
}

#[tokio::test]
async fn slow_server_times_out() {
    let mock = MockApi::start().await;
    mock.enqueue(
        "/get-activities",
        MockResponse::json(r#"{"activity":[]}"#).with_delay(3_000),
    )
    .await;

    let client = ApiClient::new(&ApiConfig {
        base_url: mock.base_url(),
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
    })
    .unwrap();
    let err = client.fetch_activities().await.unwrap_err();
    assert!(matches!(err, SourceError::Request { .. }));
}
