use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

// DTOs are defined independently from the client crate; the client's
// integration tests catch schema drift. Attributes are stored as raw JSON
// and echoed back without interpreting their schema.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub organisation_id: String,
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(default)]
    pub version: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,
}

/// Wire envelope: requests arrive as `{"data": ...}`, failures leave as
/// `{"error_message": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Deserialize)]
struct DeleteParams {
    #[serde(default)]
    version: i64,
}

pub type Db = Arc<RwLock<HashMap<String, Account>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/v1/organisation/accounts", post(create_account))
        .route(
            "/v1/organisation/accounts/{id}",
            get(get_account).delete(delete_account),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error_reply(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error_message": message }))).into_response()
}

async fn create_account(
    State(db): State<Db>,
    Json(envelope): Json<Envelope<Account>>,
) -> Response {
    let Some(mut account) = envelope.data else {
        return error_reply(StatusCode::BAD_REQUEST, "data is required");
    };
    if Uuid::parse_str(&account.id).is_err() {
        return error_reply(StatusCode::BAD_REQUEST, "id in body must be of type uuid");
    }

    let mut accounts = db.write().await;
    if accounts.contains_key(&account.id) {
        return error_reply(
            StatusCode::CONFLICT,
            "Account cannot be created as it violates a duplicate constraint",
        );
    }

    let now = Utc::now();
    account.version = 0;
    account.created_on = Some(now);
    account.modified_on = Some(now);
    accounts.insert(account.id.clone(), account.clone());

    (StatusCode::CREATED, Json(json!({ "data": account }))).into_response()
}

async fn get_account(State(db): State<Db>, Path(id): Path<String>) -> Response {
    if Uuid::parse_str(&id).is_err() {
        return error_reply(StatusCode::BAD_REQUEST, "id is not a valid uuid");
    }

    let accounts = db.read().await;
    match accounts.get(&id) {
        Some(account) => (StatusCode::OK, Json(json!({ "data": account }))).into_response(),
        None => error_reply(
            StatusCode::NOT_FOUND,
            &format!("record {id} does not exist"),
        ),
    }
}

// Deleting an unknown id answers 404 with an empty body, unlike the
// enveloped 404 of a get. That asymmetry is the remote service's observed
// behavior and the client's integration tests pin it down.
async fn delete_account(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> Response {
    let mut accounts = db.write().await;
    let Some(existing) = accounts.get(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if existing.version != params.version {
        return error_reply(StatusCode::CONFLICT, "invalid version");
    }

    accounts.remove(&id);
    StatusCode::NO_CONTENT.into_response()
}
