use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, NaiveDate, Utc};
use planner_api::ApiState;
use planner_core::settings::PolicySettings;
use planner_db::{
    mock::MockStore,
    models::{DbScheduleSettings, DbSession},
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestContext {
    pub store: MockStore,
    pub user_id: Uuid,
    pub token: Uuid,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            store: MockStore::new(),
            user_id: Uuid::new_v4(),
            token: Uuid::new_v4(),
        }
    }

    /// Accepts `self.token` as a live session of a regular user.
    pub fn signed_in(self) -> Self {
        self.signed_in_as("User")
    }

    pub fn signed_in_as(mut self, role: &'static str) -> Self {
        let (token, user_id) = (self.token, self.user_id);
        self.store.expect_find_session().returning(move |_| {
            Ok(Some(DbSession {
                token,
                user_id,
                role: role.to_string(),
                expires_at: Utc::now() + Duration::hours(1),
            }))
        });
        self
    }

    pub fn app(self) -> Router {
        planner_api::app(Arc::new(ApiState {
            store: Arc::new(self.store),
            policy: PolicySettings::default(),
            session_ttl: Duration::minutes(300),
        }))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Settings of a schedule whose year runs 2024-09-01..=2025-06-30, Monday to Friday.
pub fn school_year(schedule_id: Uuid) -> DbScheduleSettings {
    DbScheduleSettings {
        id: Uuid::new_v4(),
        schedule_id,
        school_hour: 45,
        school_year_start: date(2024, 9, 1),
        school_year_end: date(2025, 6, 30),
        school_days: "1111100".to_string(),
    }
}

/// Sends one request through the router and decodes the JSON body, if any.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// The messages of an error body, in order.
pub fn messages(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|error| error["message"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
