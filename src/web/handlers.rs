use super::error::ErrorServer;
use super::page;
use crate::core::Locator;
use crate::models::lookup::LookupOutcome;
use axum::{
    Form, Json,
    extract::{Query, State},
    response::Html,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Default, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    pub pupil_name: String,
    pub day: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub name: String,
    pub day: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Runs the lookup on the blocking pool; it reads files.
async fn run_lookup(
    locator: Arc<Locator>,
    name: String,
    day: Option<String>,
) -> Result<LookupOutcome, ErrorServer> {
    tokio::task::spawn_blocking(move || locator.lookup(&name, day.as_deref()))
        .await
        .map_err(|e| {
            error!("Lookup task failed: {}", e);
            ErrorServer::internal("lookup failed")
        })
}

/// GET /: form with defaults only.
pub async fn index(State(locator): State<Arc<Locator>>) -> Result<Html<String>, ErrorServer> {
    let outcome = run_lookup(locator.clone(), String::new(), None).await?;
    Ok(Html(page::render(locator.week().days(), &outcome)))
}

/// POST /: form submission.
pub async fn submit(
    State(locator): State<Arc<Locator>>,
    Form(form): Form<LookupForm>,
) -> Result<Html<String>, ErrorServer> {
    info!(
        "Lookup for {:?} on {:?}",
        form.pupil_name.trim(),
        form.day.as_deref().unwrap_or("default day")
    );
    let outcome = run_lookup(locator.clone(), form.pupil_name, form.day).await?;
    Ok(Html(page::render(locator.week().days(), &outcome)))
}

/// GET /api/lookup?name=..&day=..
pub async fn api_lookup(
    State(locator): State<Arc<Locator>>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<LookupOutcome>, ErrorServer> {
    let outcome = run_lookup(locator, query.name, query.day).await?;
    Ok(Json(outcome))
}

/// GET /health
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        timestamp: chrono::Local::now().to_rfc3339(),
    })
}
