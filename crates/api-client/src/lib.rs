//! # Platform API Client
//!
//! The typed consumer of the negotiation platform's REST API. All endpoints
//! live under `<base_url>/api/...`, speak JSON, and expect a bearer token
//! (attached automatically from the persisted session when one exists).
//!
//! The `DashboardApi` trait is the contract the CLI renders against, allowing
//! the underlying implementation (live or mock) to be swapped out.

use async_trait::async_trait;
use configuration::ApiSettings;
use core_types::{
    BenchmarkResult, ConflictRecord, EvaluationRecord, FeasibilityAnalysis, NegotiationRecord,
    ProposalRecord,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub mod error;
pub mod responses;
pub mod session;
pub mod snapshot;

// --- Public API ---
pub use error::{map_error_body, ApiError};
pub use responses::{Envelope, LoginRequest, LoginResponse};
pub use session::{Session, SessionStore};
pub use snapshot::{fetch_dashboard, DashboardData, SectionError};

/// The generic, abstract interface to the negotiation platform.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Authenticates and persists the resulting session. (POST /api/auth/login)
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError>;

    async fn fetch_proposals(&self) -> Result<Vec<ProposalRecord>, ApiError>;
    async fn fetch_negotiations(&self) -> Result<Vec<NegotiationRecord>, ApiError>;
    async fn fetch_conflicts(&self) -> Result<Vec<ConflictRecord>, ApiError>;
    async fn fetch_evaluations(&self) -> Result<Vec<EvaluationRecord>, ApiError>;
    async fn fetch_benchmarks(&self) -> Result<Vec<BenchmarkResult>, ApiError>;
    async fn fetch_feasibility(&self) -> Result<Vec<FeasibilityAnalysis>, ApiError>;
}

/// The concrete reqwest-backed implementation of `DashboardApi`.
#[derive(Clone)]
pub struct PlatformClient {
    client: reqwest::Client,
    base_url: String,
    store: SessionStore,
}

impl PlatformClient {
    pub fn new(api: &ApiSettings, store: SessionStore) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(api.timeout_secs))
                .build()
                .expect("Failed to build reqwest client"),
            base_url: api.base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.store
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.store.load() {
            Some(session) => request.bearer_auth(session.token),
            // Unauthenticated reads still go out; the backend decides what
            // requires a token.
            None => request,
        }
    }

    async fn _get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.authorized(self.client.get(&url)).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<Envelope<T>>(&text)
                .map(Envelope::into_inner)
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        } else {
            Err(map_error_body(status.as_u16(), &text, fallback))
        }
    }

    async fn _post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .authorized(self.client.post(&url))
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<Envelope<T>>(&text)
                .map(Envelope::into_inner)
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        } else {
            Err(map_error_body(status.as_u16(), &text, fallback))
        }
    }
}

#[async_trait]
impl DashboardApi for PlatformClient {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let payload = LoginRequest { email, password };
        let response: LoginResponse = self
            ._post("/api/auth/login", &payload, "Login failed")
            .await?;

        let session = Session {
            token: response.token,
            user: response.user,
        };
        self.store.save(&session)?;
        Ok(session)
    }

    async fn fetch_proposals(&self) -> Result<Vec<ProposalRecord>, ApiError> {
        self._get("/api/proposals", "Failed to load proposals").await
    }

    async fn fetch_negotiations(&self) -> Result<Vec<NegotiationRecord>, ApiError> {
        self._get("/api/negotiations", "Failed to load negotiations")
            .await
    }

    async fn fetch_conflicts(&self) -> Result<Vec<ConflictRecord>, ApiError> {
        self._get("/api/conflicts", "Failed to load conflicts").await
    }

    async fn fetch_evaluations(&self) -> Result<Vec<EvaluationRecord>, ApiError> {
        self._get("/api/evaluations", "Failed to load evaluations")
            .await
    }

    async fn fetch_benchmarks(&self) -> Result<Vec<BenchmarkResult>, ApiError> {
        self._get("/api/benchmarks", "Failed to load benchmark results")
            .await
    }

    async fn fetch_feasibility(&self) -> Result<Vec<FeasibilityAnalysis>, ApiError> {
        self._get("/api/feasibility", "Failed to load feasibility analyses")
            .await
    }
}
