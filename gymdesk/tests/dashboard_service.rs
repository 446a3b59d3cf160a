//! Dashboard service against an in-process axum backend

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use gymdesk::cli::{WorkflowArgs, fill_wizard};
use gymdesk::{AppError, DashboardService, PayrollError, WorkflowWizard};
use gymdesk_client::{ClientConfig, ClientError};
use parking_lot::Mutex;
use serde_json::{Value, json};
use shared::models::{ActionTemplate, TriggerTemplate};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn service(router: Router) -> DashboardService {
    let config = ClientConfig::new(spawn(router).await)
        .with_token("secret")
        .with_timeout(5);
    DashboardService::from_config(&config, 30).unwrap()
}

fn empty(router: Router, path: &str) -> Router {
    router.route(path, get(|| async { Json(json!([])) }))
}

/// Every BiOS source present; bills is broken
fn bios_backend() -> Router {
    let mut router = Router::new()
        .route(
            "/receipt-vouchers",
            get(|| async { Json(json!({"data": [{"amount": "AED 1,000"}, {"amount": 500}]})) }),
        )
        .route(
            "/api/payment-vouchers",
            get(|| async { Json(json!({"items": [{"amount": 300}]})) }),
        )
        .route(
            "/api/bills",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"message": "ledger offline"})),
                )
            }),
        )
        .route(
            "/api/members",
            get(|| async { Json(json!([{"status": "active"}, {"status": "expired"}])) }),
        )
        .route(
            "/api/experience/sessions",
            get(|| async {
                Json(json!([
                    {"return_score": 9}, {"return_score": 9},
                    {"return_score": 7}, {"return_score": 4}
                ]))
            }),
        )
        // null body: an empty, not a failed, source
        .route("/facilities", get(|| async { Json(Value::Null) }));
    for path in [
        "/leads",
        "/api/trainers",
        "/api/bookings",
        "/api/classes",
        "/api/assets",
        "/api/products",
        "/api/membership-plans",
    ] {
        router = empty(router, path);
    }
    router
}

#[tokio::test]
async fn bios_degrades_failed_source_only() {
    let service = service(bios_backend()).await;
    let metrics = service.bios().await;

    assert_eq!(metrics.degraded_sources, vec!["bills".to_string()]);
    assert_eq!(metrics.financials.revenue, 1500.0);
    assert_eq!(metrics.financials.expenses, 300.0);
    assert_eq!(metrics.financials.margin, 80.0);
    assert_eq!(metrics.members.retention_rate, 50.0);
    assert_eq!(metrics.nps.score, 25);
    assert!(metrics.branches.is_empty());
}

#[tokio::test]
async fn payroll_refused_without_staff() {
    let posts = Arc::new(AtomicUsize::new(0));
    let counter = posts.clone();
    let router = Router::new()
        .route("/api/trainers", get(|| async { Json(json!({"data": []})) }))
        .route(
            "/payroll/generate",
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Json(json!({"id": "p1"}))
                }
            }),
        );
    let service = service(router).await;

    let err = service.generate_payroll(10, 2026).await.unwrap_err();
    assert!(matches!(err, AppError::Payroll(PayrollError::NoStaff)));
    assert_eq!(err.user_message("payroll"), "No staff records found to generate payroll");
    assert_eq!(posts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn payroll_generate_posts_rounded_payload() {
    let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let sink = captured.clone();
    let router = Router::new()
        .route(
            "/api/trainers",
            get(|| async {
                Json(json!([
                    {"id": "s1", "name": "Rami", "baseSalary": 3000, "presentDays": 30,
                     "allowances": 200, "deductions": 100, "overtimeHours": 5, "otRate": 20},
                    {"id": "s2", "name": "Maya", "baseSalary": 1000, "presentDays": 20}
                ]))
            }),
        )
        .route(
            "/payroll/generate",
            post(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock() = Some(body);
                    Json(json!({"data": {"id": "p1", "status": "draft"}}))
                }
            }),
        );
    let service = service(router).await.with_actor("hr-admin");

    let created = service.generate_payroll(10, 2026).await.unwrap();
    assert_eq!(created["id"], "p1");

    let body = captured.lock().clone().unwrap();
    assert_eq!(body["month"], 10);
    assert_eq!(body["staff"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["staff"][0]["netSalary"], 3200);
    // 1000 / 30 * 20 = 666.67
    assert_eq!(body["staff"][1]["netSalary"], 667);
    assert_eq!(body["totalNet"], 3867);
}

#[tokio::test]
async fn strict_load_aborts_on_first_failure() {
    let router = Router::new()
        .route(
            "/api/followups",
            get(|| async { Json(json!([{"id": 1, "status": "Pending"}])) }),
        )
        .route(
            "/api/followup-workflows",
            get(|| async { (StatusCode::BAD_GATEWAY, Json(json!({"error": "upstream"}))) }),
        );
    let service = service(router).await;

    let err = service.followups().await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Client(ClientError::Api { status: 502, .. })
    ));
    assert_eq!(err.user_message("follow-ups"), "Failed to load follow-ups");
}

#[tokio::test]
async fn wizard_workflow_is_created() {
    let router = Router::new().route(
        "/api/followup-workflows",
        post(|Json(mut body): Json<Value>| async move {
            body["_id"] = json!("w9");
            (StatusCode::CREATED, Json(json!({"data": body})))
        }),
    );
    let service = service(router).await;

    let mut wizard = WorkflowWizard::new();
    let args = WorkflowArgs {
        name: "Birthday wishes".into(),
        description: String::new(),
        frequency: "yearly".into(),
        trigger: "birthday".into(),
        action: "send-whatsapp".into(),
        message: "Happy birthday from the team!".into(),
        inactive: false,
    };
    fill_wizard(&mut wizard, &args).unwrap();

    let saved = service.save_workflow(&mut wizard).await.unwrap();
    assert_eq!(saved.id.as_deref(), Some("w9"));
    assert_eq!(saved.trigger, Some(TriggerTemplate::Birthday));
    assert_eq!(saved.action, Some(ActionTemplate::SendWhatsapp));
}

#[tokio::test]
async fn wizard_outside_review_never_posts() {
    let posts = Arc::new(AtomicUsize::new(0));
    let counter = posts.clone();
    let router = Router::new().route(
        "/api/followup-workflows",
        post(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({}))
            }
        }),
    );
    let service = service(router).await;

    let mut wizard = WorkflowWizard::new();
    wizard.set_name("Half done").unwrap();
    let err = service.save_workflow(&mut wizard).await.unwrap_err();
    assert!(matches!(err, AppError::Wizard(_)));
    assert_eq!(posts.load(Ordering::SeqCst), 0);
}
