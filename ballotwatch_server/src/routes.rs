//! HTTP route handlers for the resolution endpoint.
//!
//! Every handler wraps its outcome in the uniform envelope. Provider
//! failures are converted here, at the boundary: logged once, then returned
//! as a 500 with the error's display message only. Success payloads are
//! never logged because they can contain a voter's address.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use ballotwatch_api::{Client, RepresentativesQuery, VoterInfoQuery};
use ballotwatch_lib::domain::{ElectionSummary, ResolutionResult};
use ballotwatch_lib::normalize::{normalize_election, normalize_voter_info};

use crate::envelope::Envelope;

const MISSING_ADDRESS: &str = "Address parameter is required";

/// Shared state handed to every handler. The provider client is injected
/// here rather than reached through a global, so tests can substitute a
/// wiremock-backed client.
#[derive(Clone)]
pub struct AppState {
    pub civic: Arc<Client>,
}

impl AppState {
    pub fn new(civic: Client) -> Self {
        Self {
            civic: Arc::new(civic),
        }
    }
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(api_root))
        .route("/elections", get(list_elections))
        .route("/elections/voter-info", get(voter_info))
        .route("/elections/representatives", get(representatives))
        .with_state(state);

    Router::new().route("/health", get(health)).nest("/api/v1", api)
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Serialize)]
struct Banner {
    message: &'static str,
    version: &'static str,
}

async fn api_root() -> Json<Banner> {
    Json(Banner {
        message: "ballotwatch API v1",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct ElectionsData {
    elections: Vec<ElectionSummary>,
}

async fn list_elections(
    State(state): State<AppState>,
) -> (StatusCode, Json<Envelope<ElectionsData>>) {
    match state.civic.elections().await {
        Ok(resp) => {
            let elections = resp.elections.into_iter().map(normalize_election).collect();
            (StatusCode::OK, Json(Envelope::ok(ElectionsData { elections })))
        }
        Err(e) => {
            tracing::error!("Failed to fetch elections: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::error(e.to_string())),
            )
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VoterInfoParams {
    address: Option<String>,
    election_id: Option<String>,
}

async fn voter_info(
    State(state): State<AppState>,
    Query(params): Query<VoterInfoParams>,
) -> (StatusCode, Json<Envelope<ResolutionResult>>) {
    // Fail fast before any outbound call.
    let address = match params.address.as_deref() {
        Some(a) if !a.is_empty() => a,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(Envelope::error(MISSING_ADDRESS)),
            )
        }
    };

    let mut query = VoterInfoQuery::new(address);
    if let Some(election_id) = &params.election_id {
        query = query.with_election_id(election_id);
    }

    match state.civic.voter_info(&query).await {
        Ok(resp) => (
            StatusCode::OK,
            Json(Envelope::ok(normalize_voter_info(resp))),
        ),
        Err(e) => {
            tracing::error!("Failed to fetch voter information: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::error(e.to_string())),
            )
        }
    }
}

#[derive(Deserialize)]
struct RepresentativesParams {
    address: Option<String>,
    /// Comma-separated government levels, e.g. "country,administrativeArea1".
    levels: Option<String>,
    /// Comma-separated office roles, e.g. "legislatorUpperBody".
    roles: Option<String>,
}

async fn representatives(
    State(state): State<AppState>,
    Query(params): Query<RepresentativesParams>,
) -> (StatusCode, Json<Envelope<serde_json::Value>>) {
    let address = match params.address.as_deref() {
        Some(a) if !a.is_empty() => a,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(Envelope::error(MISSING_ADDRESS)),
            )
        }
    };

    let mut query = RepresentativesQuery::new(address);
    if let Some(levels) = &params.levels {
        for level in levels.split(',').filter(|s| !s.is_empty()) {
            query = query.with_level(level);
        }
    }
    if let Some(roles) = &params.roles {
        for role in roles.split(',').filter(|s| !s.is_empty()) {
            query = query.with_role(role);
        }
    }

    match state.civic.representatives(&query).await {
        Ok(payload) => (StatusCode::OK, Json(Envelope::ok(payload))),
        Err(e) => {
            tracing::error!("Failed to fetch representatives: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::error(e.to_string())),
            )
        }
    }
}
