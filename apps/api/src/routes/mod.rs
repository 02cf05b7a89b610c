pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::submissions::handlers;

pub fn build_router(state: AppState) -> Router {
    // Anything that is not an API route falls through to the built SPA assets.
    let static_assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/contact", post(handlers::handle_submit_contact))
        .route("/api/contacts", get(handlers::handle_list_contacts))
        .route(
            "/api/bookings",
            post(handlers::handle_submit_booking).get(handlers::handle_list_bookings),
        )
        .fallback_service(static_assets)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::email::{EmailError, EmailService, Notifier};
    use crate::models::{Booking, Contact};
    use crate::state::AppState;
    use crate::storage::StorageManager;

    use super::*;

    fn test_config() -> Config {
        Config {
            database_url: None,
            mailgun_api_key: None,
            mailgun_domain: None,
            from_email: "noreply@saanviyoga.com".to_string(),
            notify_email: "studio@saanviyoga.com".to_string(),
            static_dir: "public".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    /// App wired to the in-memory backend and a dry-run email dispatcher.
    fn test_app() -> Router {
        let config = test_config();
        test_app_with(Arc::new(EmailService::new(&config)))
    }

    fn test_app_with(notifier: Arc<dyn Notifier>) -> Router {
        let state = AppState {
            storage: Arc::new(StorageManager::new(None)),
            notifier,
            config: test_config(),
        };
        build_router(state)
    }

    /// Dispatcher that always fails, as if Mailgun rejected the request.
    struct BrokenNotifier;

    #[async_trait]
    impl Notifier for BrokenNotifier {
        async fn send_contact_confirmation(&self, _contact: &Contact) -> Result<(), EmailError> {
            Err(EmailError::Api {
                status: 500,
                message: "mailgun is down".to_string(),
            })
        }
        async fn send_booking_confirmation(&self, _booking: &Booking) -> Result<(), EmailError> {
            Err(EmailError::Api {
                status: 500,
                message: "mailgun is down".to_string(),
            })
        }
    }

    async fn request(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn booking_payload() -> Value {
        json!({
            "firstName": "Asha",
            "lastName": "Rao",
            "email": "asha@example.com",
            "phone": "9876543210",
            "consultationType": "initial",
            "preferredDate": "2025-03-01",
            "preferredTime": "9:00 AM",
            "experience": "beginner",
            "goals": "reduce stress and improve flexibility"
        })
    }

    fn contact_payload() -> Value {
        json!({
            "firstName": "Asha",
            "lastName": "Rao",
            "email": "asha@example.com",
            "phone": "9876543210",
            "interestedIn": "Hatha Yoga",
            "message": "Looking for morning classes"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = request(test_app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_booking_submission_round_trip() {
        let app = test_app();

        let (status, body) =
            request(app.clone(), "POST", "/api/bookings", Some(booking_payload())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Booking submitted successfully");

        let reference = body["bookingId"].as_str().unwrap();
        assert!(reference.starts_with("SY"));

        let (status, listed) = request(app, "GET", "/api/bookings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed[0]["bookingId"], reference);
        assert_eq!(listed[0]["status"], "pending");
        assert_eq!(listed[0]["firstName"], "Asha");
    }

    #[tokio::test]
    async fn test_contact_submission_round_trip() {
        let app = test_app();

        let (status, body) =
            request(app.clone(), "POST", "/api/contact", Some(contact_payload())).await;
        assert_eq!(status, StatusCode::OK);
        let id = body["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        let (status, listed) = request(app, "GET", "/api/contacts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed[0]["id"], id.as_str());
        assert_eq!(listed[0]["interestedIn"], "Hatha Yoga");
    }

    #[tokio::test]
    async fn test_contact_succeeds_when_email_delivery_fails() {
        let app = test_app_with(Arc::new(BrokenNotifier));

        let (status, body) =
            request(app, "POST", "/api/contact", Some(contact_payload())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_booking_succeeds_when_email_delivery_fails() {
        let app = test_app_with(Arc::new(BrokenNotifier));

        let (status, body) =
            request(app, "POST", "/api/bookings", Some(booking_payload())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["bookingId"].as_str().unwrap().starts_with("SY"));
    }

    #[tokio::test]
    async fn test_empty_contact_payload_rejected() {
        let (status, body) = request(test_app(), "POST", "/api/contact", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_booking_with_unknown_time_slot_rejected() {
        let mut payload = booking_payload();
        payload["preferredTime"] = json!("9:30 PM");

        let (status, body) = request(test_app(), "POST", "/api/bookings", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rejected_submission_is_not_stored() {
        let app = test_app();

        let (status, _) = request(app.clone(), "POST", "/api/contact", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, listed) = request(app, "GET", "/api/contacts", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_listings_start_empty() {
        let (status, body) = request(test_app(), "GET", "/api/bookings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}
