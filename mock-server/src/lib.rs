use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// One request as it arrived, before any validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginAttempt {
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct AuthStore {
    accounts: HashMap<String, String>,
    attempts: Vec<LoginAttempt>,
}

impl AuthStore {
    pub fn with_account(mut self, email: &str, password: &str) -> Self {
        self.accounts.insert(email.to_string(), password.to_string());
        self
    }

    pub fn attempts(&self) -> &[LoginAttempt] {
        &self.attempts
    }
}

pub type Db = Arc<RwLock<AuthStore>>;

pub fn app(db: Db) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/attempts", get(attempts))
        .with_state(db)
}

pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app(db)).await
}

async fn login(State(db): State<Db>, headers: HeaderMap, body: String) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut store = db.write().await;
    store.attempts.push(LoginAttempt {
        content_type: content_type.clone(),
        body: body.clone(),
    });

    if !content_type.is_some_and(|ct| ct.starts_with("application/json")) {
        return error(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Content-Type must be application/json");
    }
    let input: LoginRequest = match serde_json::from_str(&body) {
        Ok(input) => input,
        Err(e) => return error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };

    match store.accounts.get(&input.email) {
        Some(password) if *password == input.password => {
            let tokens = LoginTokens {
                access_token: Uuid::new_v4().to_string(),
                refresh_token: Uuid::new_v4().to_string(),
            };
            (StatusCode::OK, Json(tokens)).into_response()
        }
        _ => error(StatusCode::UNAUTHORIZED, "Bad credentials"),
    }
}

async fn attempts(State(db): State<Db>) -> Json<serde_json::Value> {
    let store = db.read().await;
    Json(json!({ "count": store.attempts.len() }))
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
