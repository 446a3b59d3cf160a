//! Client against an in-process axum server on an ephemeral port

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use gymdesk_client::{
    ClientConfig, ClientError, Degraded, GymClient, OptimisticList, Session, SessionHandle,
    tolerant,
};
use serde_json::{Value, json};
use shared::Normalize;
use shared::models::{AssetTransaction, FollowUp, LeadStatus};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn backend() -> Router {
    Router::new()
        .route(
            "/api/assets",
            get(|| async {
                Json(json!({"data": [
                    {"_id": "a1", "name": "Treadmill", "cost": "AED 5,000", "current_value": "AED 4,000"}
                ]}))
            }),
        )
        .route(
            "/leads",
            get(|| async {
                Json(json!({"data": {"items": [
                    {"id": 1, "name": "Dana", "status": "converted", "score": 140}
                ], "total": 1}}))
            }),
        )
        .route("/api/members", get(|| async { Json(Value::Null) }))
        .route(
            "/api/bills",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"message": "db down"})),
                )
            }),
        )
        .route(
            "/api/trainers",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                if auth == "Bearer good" {
                    Json(json!([{"id": "t1", "fullName": "Coach Rami"}])).into_response()
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({"error": "invalid token"})))
                        .into_response()
                }
            }),
        )
        .route(
            "/api/asset-transactions/{id}/status",
            put(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                status_update(id, body)
            }),
        )
        .route(
            "/api/followups/{id}",
            delete(|Path(id): Path<String>| async move {
                if id == "keep" {
                    StatusCode::FORBIDDEN.into_response()
                } else {
                    StatusCode::NO_CONTENT.into_response()
                }
            }),
        )
}

fn status_update(id: String, body: Value) -> Response {
    if id == "locked" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "transaction is locked"})),
        )
            .into_response();
    }
    Json(json!({"data": {"_id": id, "type": "Maintenance", "amount": 300, "status": body["status"]}}))
        .into_response()
}

async fn client(token: Option<&str>) -> GymClient {
    let mut config = ClientConfig::new(spawn(backend()).await).with_timeout(5);
    if let Some(token) = token {
        config = config.with_token(token);
    }
    GymClient::from_config(&config).unwrap()
}

#[tokio::test]
async fn list_envelopes_normalize_at_the_boundary() {
    let client = client(Some("good")).await;

    let assets = client.assets().list().await.unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].id, "a1");
    assert_eq!(assets[0].cost, 5000.0);
    assert_eq!(assets[0].depreciation(), 1000.0);

    let leads = client.leads().list().await.unwrap();
    assert_eq!(leads[0].status, LeadStatus::Converted);
    assert_eq!(leads[0].score, 100);

    assert!(client.directory().members().await.unwrap().is_empty());
}

#[tokio::test]
async fn status_codes_map_to_errors() {
    let client = client(None).await;

    match client.directory().bills().await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "db down");
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    let err = client.staff().list().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(ref m) if m == "invalid token"));
    assert_eq!(err.user_message("staff"), "Your session has expired. Please sign in again.");
}

#[tokio::test]
async fn bearer_token_comes_from_session() {
    let client = client(Some("good")).await;
    let staff = client.staff().list().await.unwrap();
    assert_eq!(staff[0].name, "Coach Rami");
}

#[tokio::test]
async fn expired_session_never_reaches_the_server() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/api/assets",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!([]))
            }
        }),
    );
    let config = ClientConfig::new(spawn(router).await);
    let session = SessionHandle::from(Session::new("old").expires_at(Utc::now() - Duration::minutes(5)));
    let client = GymClient::with_session(&config, session.clone()).unwrap();

    assert!(matches!(
        client.assets().list().await,
        Err(ClientError::SessionExpired)
    ));
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    session.set(Session::new("fresh").expires_at(Utc::now() + Duration::hours(1)));
    assert!(client.assets().list().await.unwrap().is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn optimistic_status_change_rolls_back_on_rejection() {
    let client = client(Some("good")).await;
    let mut list = OptimisticList::new(AssetTransaction::normalize_all(&[
        json!({"_id": "t1", "assetName": "Rower", "status": "Pending"}),
        json!({"_id": "locked", "assetName": "Bike", "status": "Pending"}),
    ]));

    client
        .transactions()
        .update_status_optimistic(&mut list, "t1", "Completed")
        .await
        .unwrap();
    let t1 = list.get("t1").unwrap();
    assert_eq!(t1.status, "Completed");
    assert_eq!(t1.value, 300.0);
    assert_eq!(t1.asset_name.as_deref(), Some("Rower"));

    let err = client
        .transactions()
        .update_status_optimistic(&mut list, "locked", "Completed")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(ref m) if m == "transaction is locked"));
    assert_eq!(list.get("locked").unwrap().status, "Pending");
    assert_eq!(list.pending(), 0);
}

#[tokio::test]
async fn optimistic_delete_restores_card_in_place() {
    let client = client(Some("good")).await;
    let mut list = OptimisticList::new(FollowUp::normalize_all(&[
        json!({"id": "first"}),
        json!({"id": "keep"}),
        json!({"id": "last"}),
    ]));

    client.followups().delete_optimistic(&mut list, "first").await.unwrap();
    let err = client.followups().delete_optimistic(&mut list, "keep").await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));

    let ids: Vec<&str> = list.items().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, ["keep", "last"]);
}

#[tokio::test]
async fn tolerant_fan_out_reports_degraded_sources() {
    let client = client(Some("good")).await;
    let (directory, assets_api) = (client.directory(), client.assets());
    let (members, bills, assets) = futures::join!(
        tolerant("members", directory.members()),
        tolerant("bills", directory.bills()),
        tolerant("assets", assets_api.list()),
    );

    let mut degraded = Degraded::default();
    assert!(members.take(&mut degraded).is_empty());
    assert!(bills.take(&mut degraded).is_empty());
    assert_eq!(assets.take(&mut degraded).len(), 1);
    assert_eq!(degraded.sources(), vec!["bills"]);
}
