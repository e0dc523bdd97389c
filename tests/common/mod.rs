#![allow(dead_code)]

use appointment_relay::{config::local_relay_url, router, AppConfig, AppState};
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header::CACHE_CONTROL, header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

/// One request as seen by the fake backend.
#[derive(Clone, Debug)]
pub struct Hit {
    pub method: Method,
    pub uri: String,
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
    pub body: String,
}

/// Stand-in for the external backend. Records every request it receives.
#[derive(Clone, Default)]
pub struct FakeBackend {
    pub hits: Arc<Mutex<Vec<Hit>>>,
    pub appointments: Arc<Mutex<Vec<Value>>>,
}

impl FakeBackend {
    pub fn with_appointments(appointments: Vec<Value>) -> Self {
        let backend = FakeBackend::default();
        *backend.appointments.lock().unwrap() = appointments;
        backend
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }
}

pub fn appointment(id: i64, scheduled_at: &str, status: &str) -> Value {
    json!({
        "id": id,
        "customer_name": format!("customer {id}"),
        "phone_e164": "+819012345678",
        "scheduled_at": scheduled_at,
        "status": status,
        "last_inbound_text": null,
        "updated_at": "2024-01-01T00:00:00"
    })
}

fn header(headers: &HeaderMap, name: axum::http::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn handle(
    State(backend): State<FakeBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body = String::from_utf8_lossy(&body).to_string();
    backend.hits.lock().unwrap().push(Hit {
        method: method.clone(),
        uri: uri.to_string(),
        content_type: header(&headers, CONTENT_TYPE),
        cache_control: header(&headers, CACHE_CONTROL),
        body: body.clone(),
    });

    match (method, uri.path()) {
        (Method::GET, "/appointments") | (Method::GET, "/api/appointments") => {
            Json(Value::Array(backend.appointments.lock().unwrap().clone())).into_response()
        }
        (Method::POST, "/appointments") => {
            let payload: Value = match serde_json::from_str(&body) {
                Ok(payload) => payload,
                Err(_) => {
                    return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({"detail": "bad body"})))
                        .into_response()
                }
            };
            let mut appointments = backend.appointments.lock().unwrap();
            let id = appointments.len() as i64 + 1;
            let created = json!({
                "id": id,
                "customer_name": payload["customer_name"],
                "phone_e164": payload["phone_e164"],
                "scheduled_at": payload["scheduled_at"],
                "status": "scheduled",
                "last_inbound_text": null,
                "updated_at": "2024-01-01T00:00:00"
            });
            appointments.push(created.clone());
            Json(created).into_response()
        }
        (Method::POST, "/send-reminder") => {
            let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
            let id = payload["appointment_id"].as_i64().unwrap_or_default();
            let mut appointments = backend.appointments.lock().unwrap();
            let Some(found) = appointments.iter_mut().find(|a| a["id"] == id) else {
                return (
                    StatusCode::NOT_FOUND,
                    Json(json!({"detail": "Appointment not found"})),
                )
                    .into_response();
            };
            if found["status"] == "opt_out" {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"detail": "Customer opted out"})),
                )
                    .into_response();
            }
            found["status"] = json!("reminded");
            Json(json!({"sent": true, "appointment_id": id})).into_response()
        }
        (_, "/teapot") => (
            StatusCode::IM_A_TEAPOT,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            "short and stout",
        )
            .into_response(),
        (_, "/bare") => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from(r#"{"detail":"Not Found"}"#))
            .unwrap(),
        _ => (StatusCode::OK, [(CONTENT_TYPE, "text/plain")], uri.to_string()).into_response(),
    }
}

pub async fn spawn_backend(backend: FakeBackend) -> SocketAddr {
    let app = Router::new().fallback(handle).with_state(backend);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn test_config(backend_base_url: String, bind_addr: SocketAddr) -> AppConfig {
    AppConfig {
        backend_base_url,
        bind_addr,
        relay_url: local_relay_url(bind_addr),
    }
}

/// Router for in-process `oneshot` calls.
pub fn relay_app(backend_base_url: String) -> Router {
    let config = test_config(backend_base_url, "127.0.0.1:0".parse().unwrap());
    router(Arc::new(AppState::new(config)))
}

/// Full server on a loopback port, so the console can reach its own relay.
pub async fn spawn_app(backend_base_url: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(Arc::new(AppState::new(test_config(backend_base_url, addr))));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
