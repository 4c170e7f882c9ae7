//! End-to-end checks of the CMS client against an in-process HTTP server.

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use vitrine_client::{ApiClient, ClientError, CmsClient, ContentApi};
use vitrine_core::config::EndpointsConfig;
use vitrine_core::content::ContactMessage;
use vitrine_core::i18n::{resolve, Language};

/// Serve `app` on an ephemeral port and return its `/api` base URL.
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn cms(base_url: &str) -> CmsClient {
    CmsClient::new(ApiClient::new(base_url), EndpointsConfig::default())
}

#[tokio::test]
async fn test_privacy_policy_selects_active_version() {
    let app = Router::new().route(
        "/api/home/politique_confidentialite/",
        get(|| async {
            Json(json!({
                "message": "ok",
                "data": [
                    {"active": false, "version": "1"},
                    {"active": true, "version": "2", "titre": {"fr": "Confidentialité"}},
                    {"active": false, "version": "3"}
                ]
            }))
        }),
    );
    let base = spawn(app).await;

    let policy = cms(&base).privacy_policy().await.unwrap().unwrap();
    assert_eq!(policy.version.as_deref(), Some("2"));
    assert_eq!(
        resolve(policy.titre.as_ref(), Language::En, ""),
        "Confidentialité"
    );
}

#[tokio::test]
async fn test_odd_active_values_do_not_sink_the_list() {
    let app = Router::new().route(
        "/api/home/conditions_utilisation/",
        get(|| async {
            Json(json!({"data": [
                {"active": "yes", "version": "1"},
                {"active": true, "version": "2"},
                {"active": 1, "version": "3"}
            ]}))
        }),
    );
    let base = spawn(app).await;

    let terms = cms(&base).terms_of_service().await.unwrap().unwrap();
    assert_eq!(terms.version.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_privacy_policy_empty_list_is_none() {
    let app = Router::new().route(
        "/api/home/politique_confidentialite/",
        get(|| async { Json(json!({"message": "ok", "data": []})) }),
    );
    let base = spawn(app).await;

    assert!(cms(&base).privacy_policy().await.unwrap().is_none());
}

#[tokio::test]
async fn test_terms_and_about_us() {
    let app = Router::new()
        .route(
            "/api/home/conditions_utilisation/",
            get(|| async {
                Json(json!({"data": [{"version": "1"}, {"version": "2"}]}))
            }),
        )
        .route(
            "/api/home/a_propos/",
            get(|| async {
                Json(json!({"data": [{
                    "titre": [{"lang": "en", "value": "About us"}],
                    "mission": [{"lang": "fr", "value": "Servir"}]
                }]}))
            }),
        );
    let base = spawn(app).await;
    let client = cms(&base);

    let terms = client.terms_of_service().await.unwrap().unwrap();
    assert_eq!(terms.version.as_deref(), Some("2"));

    let about = client.about_us().await.unwrap().unwrap();
    assert_eq!(resolve(about.titre.as_ref(), Language::Ar, ""), "About us");
    assert_eq!(resolve(about.mission.as_ref(), Language::En, ""), "Servir");
}

#[tokio::test]
async fn test_contact_info_is_raw_object() {
    let app = Router::new().route(
        "/api/home/contacte/",
        get(|| async {
            Json(json!({
                "email": "contact@example.dz",
                "ville": {"fr": "Alger", "en": "Algiers"}
            }))
        }),
    );
    let base = spawn(app).await;

    let contact = cms(&base).contact_info().await.unwrap();
    assert_eq!(contact.email.as_deref(), Some("contact@example.dz"));
    assert_eq!(resolve(contact.ville.as_ref(), Language::En, ""), "Algiers");
}

#[tokio::test]
async fn test_non_2xx_is_request_error() {
    let app = Router::new().route(
        "/api/home/politique_confidentialite/",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let base = spawn(app).await;

    let err = cms(&base).privacy_policy().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "API Error: Service Unavailable");
}

#[tokio::test]
async fn test_missing_route_is_request_error() {
    let base = spawn(Router::new()).await;

    let err = cms(&base).contact_info().await.unwrap_err();
    assert!(matches!(err, ClientError::Request { status: 404, .. }));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Bind and immediately release a port so nothing is listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = cms(&format!("http://{addr}/api"))
        .contact_info()
        .await
        .unwrap_err();
    match err {
        ClientError::Transport(e) => assert!(e.is_connect() || e.is_request()),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let app = Router::new().route("/api/home/contacte/", get(|| async { "<html>oops</html>" }));
    let base = spawn(app).await;

    let err = cms(&base).contact_info().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_send_contact_message_posts_json() {
    let app = Router::new().route(
        "/api/admins/contacte/ajouter/",
        post(|Json(body): Json<Value>| async move {
            Json(json!({"received": body}))
        }),
    );
    let base = spawn(app).await;

    let message = ContactMessage {
        name: "Amina".into(),
        email: "amina@example.dz".into(),
        subject: "Demo".into(),
        message: "Please call me back.".into(),
    };
    let reply = cms(&base).send_contact_message(&message).await.unwrap();
    assert_eq!(reply["received"]["name"], "Amina");
    assert_eq!(reply["received"]["subject"], "Demo");
    assert_eq!(reply["received"]["message"], "Please call me back.");
}

#[tokio::test]
async fn test_post_without_body_and_empty_reply() {
    let app = Router::new().route("/api/ping/", post(|| async { StatusCode::NO_CONTENT }));
    let base = spawn(app).await;

    let reply: Value = ApiClient::new(&base)
        .post::<Value, Value>("/ping/", None)
        .await
        .unwrap();
    assert_eq!(reply, Value::Null);
}

#[tokio::test]
async fn test_concurrent_fetches_are_independent() {
    let app = Router::new()
        .route(
            "/api/home/contacte/",
            get(|| async {
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                Json(json!({"email": "slow@example.dz"}))
            }),
        )
        .route(
            "/api/home/politique_confidentialite/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
    let base = spawn(app).await;
    let client = cms(&base);

    let (contact, policy) = tokio::join!(client.contact_info(), client.privacy_policy());
    assert_eq!(contact.unwrap().email.as_deref(), Some("slow@example.dz"));
    assert_eq!(policy.unwrap_err().status(), Some(500));
}
