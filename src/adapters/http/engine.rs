//! HTTP Simulation Engine - reqwest implementation of the engine port.
//!
//! Talks JSON to the LifeLedger simulation service:
//! `POST /simulate`, `POST /compare`, `GET /health` under a configured base
//! URL. One request per run, no retries: a failed attempt is terminal until
//! the user triggers another run.
//!
//! # Classification
//!
//! - send error (no response): [`SimulationError::Unreachable`] naming the
//!   configured address
//! - non-success status: [`SimulationError::Rejected`] carrying the body's
//!   string `detail` field if present, otherwise the whole body
//! - success status with an unparseable body: [`SimulationError::Malformed`]

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::config::SimulationConfig;
use crate::domain::scenario::{
    CompareDocument, ComparisonSummary, RequestDocument, SimulationSummary,
};
use crate::ports::{SimulationEngine, SimulationError};

/// reqwest-backed client for the simulation service.
pub struct HttpSimulationEngine {
    config: SimulationConfig,
    client: Client,
}

impl HttpSimulationEngine {
    /// Creates an engine for the configured service address.
    ///
    /// When the configuration carries no timeout, a request stays in flight
    /// until the transport resolves on its own.
    pub fn new(config: SimulationConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// The configured service address.
    pub fn base_url(&self) -> &str {
        self.config.base_url_trimmed()
    }

    fn simulate_url(&self) -> String {
        format!("{}/simulate", self.base_url())
    }

    fn compare_url(&self) -> String {
        format!("{}/compare", self.base_url())
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base_url())
    }

    fn transport_failure(&self, error: reqwest::Error) -> SimulationError {
        tracing::warn!(error = %error, "no response from the simulation service");
        SimulationError::unreachable(self.base_url())
    }

    async fn classify_failure(&self, response: Response) -> SimulationError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "simulation service rejected the request");
        SimulationError::rejected(failure_message(&body))
    }
}

/// Extracts the user-facing message from a failure body.
///
/// The service reports errors as JSON with a `detail` field. When `detail`
/// is a string it is the message; anything else (validation error arrays,
/// unexpected shapes, non-JSON bodies) is passed through whole so nothing
/// is lost.
fn failure_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => match value.get("detail").and_then(|detail| detail.as_str()) {
            Some(detail) => detail.to_string(),
            None => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        },
        Err(_) => body.to_string(),
    }
}

#[async_trait]
impl SimulationEngine for HttpSimulationEngine {
    async fn simulate(
        &self,
        request: &RequestDocument,
    ) -> Result<SimulationSummary, SimulationError> {
        tracing::debug!(url = %self.simulate_url(), "submitting simulation request");

        let response = self
            .client
            .post(self.simulate_url())
            .json(request)
            .send()
            .await
            .map_err(|error| self.transport_failure(error))?;

        if !response.status().is_success() {
            return Err(self.classify_failure(response).await);
        }

        let summary = response
            .json::<SimulationSummary>()
            .await
            .map_err(|error| SimulationError::malformed(error.to_string()))?;

        tracing::debug!(
            probability_of_ruin = summary.probability_of_ruin,
            "simulation response parsed"
        );
        Ok(summary)
    }

    async fn compare(
        &self,
        request: &CompareDocument,
    ) -> Result<ComparisonSummary, SimulationError> {
        tracing::debug!(
            url = %self.compare_url(),
            scenarios = request.scenarios.len(),
            "submitting comparison request"
        );

        let response = self
            .client
            .post(self.compare_url())
            .json(request)
            .send()
            .await
            .map_err(|error| self.transport_failure(error))?;

        if !response.status().is_success() {
            return Err(self.classify_failure(response).await);
        }

        response
            .json::<ComparisonSummary>()
            .await
            .map_err(|error| SimulationError::malformed(error.to_string()))
    }

    async fn health(&self) -> Result<(), SimulationError> {
        let response = self
            .client
            .get(self.health_url())
            .send()
            .await
            .map_err(|error| self.transport_failure(error))?;

        if !response.status().is_success() {
            return Err(self.classify_failure(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::ScenarioState;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;
    use std::net::SocketAddr;

    async fn serve(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn engine_for(addr: SocketAddr) -> HttpSimulationEngine {
        HttpSimulationEngine::new(SimulationConfig {
            base_url: format!("http://{addr}"),
            timeout_secs: None,
        })
    }

    fn baseline_request() -> RequestDocument {
        RequestDocument::from_state(&ScenarioState::baseline())
    }

    #[test]
    fn failure_message_extracts_string_detail() {
        let body = r#"{"detail": "years must be positive"}"#;
        assert_eq!(failure_message(body), "years must be positive");
    }

    #[test]
    fn failure_message_keeps_whole_body_for_non_string_detail() {
        // Validation errors arrive as a detail array; the whole body is
        // the message then.
        let body = r#"{"detail": [{"loc": ["body", "years"], "msg": "field required"}]}"#;
        let message = failure_message(body);
        assert!(message.contains("field required"));
        assert!(message.contains("detail"));
    }

    #[test]
    fn failure_message_keeps_whole_body_without_detail() {
        let body = r#"{"error": "boom"}"#;
        let message = failure_message(body);
        assert!(message.contains("\"error\""));
        assert!(message.contains("boom"));
    }

    #[test]
    fn failure_message_passes_plain_text_through() {
        assert_eq!(failure_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(failure_message(""), "");
    }

    #[test]
    fn urls_join_without_a_double_slash() {
        let engine = HttpSimulationEngine::new(SimulationConfig {
            base_url: "http://localhost:8000/".to_string(),
            timeout_secs: None,
        });
        assert_eq!(engine.simulate_url(), "http://localhost:8000/simulate");
        assert_eq!(engine.compare_url(), "http://localhost:8000/compare");
        assert_eq!(engine.health_url(), "http://localhost:8000/health");
    }

    #[tokio::test]
    async fn simulate_parses_a_successful_response() {
        let app = Router::new().route(
            "/simulate",
            post(|| async {
                Json(json!({
                    "probability_of_ruin": 0.237,
                    "final_net_worth_p10": 12345.6,
                    "final_net_worth_median": 50000,
                    "final_net_worth_p90": null
                }))
            }),
        );
        let engine = engine_for(serve(app).await);

        let summary = engine.simulate(&baseline_request()).await.unwrap();
        assert_eq!(summary.probability_of_ruin, 0.237);
        assert_eq!(summary.final_net_worth_p10, Some(12345.6));
        assert_eq!(summary.final_net_worth_median, Some(50000.0));
        assert_eq!(summary.final_net_worth_p90, None);
    }

    #[tokio::test]
    async fn simulate_extracts_detail_from_a_rejection() {
        let app = Router::new().route(
            "/simulate",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({"detail": "years must be positive"})),
                )
            }),
        );
        let engine = engine_for(serve(app).await);

        let err = engine.simulate(&baseline_request()).await.unwrap_err();
        assert_eq!(err, SimulationError::rejected("years must be positive"));
        assert_eq!(err.to_string(), "years must be positive");
    }

    #[tokio::test]
    async fn simulate_reports_malformed_success_bodies() {
        let app = Router::new().route("/simulate", post(|| async { Json(json!({"ok": true})) }));
        let engine = engine_for(serve(app).await);

        let err = engine.simulate(&baseline_request()).await.unwrap_err();
        assert!(matches!(err, SimulationError::Malformed(_)));
    }

    #[tokio::test]
    async fn simulate_reports_unreachable_when_nothing_listens() {
        // Bind to learn a free port, then close it again.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let engine = engine_for(addr);
        let err = engine.simulate(&baseline_request()).await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(
            err.to_string(),
            format!(
                "could not reach the simulation service; verify it is running at http://{addr}"
            )
        );
    }

    #[tokio::test]
    async fn compare_round_trips_a_comparison() {
        let app = Router::new().route(
            "/compare",
            post(|Json(body): Json<serde_json::Value>| async move {
                let scenarios = body["scenarios"].as_array().unwrap().len();
                assert_eq!(scenarios, 1);
                Json(json!({
                    "baseline": {"name": "baseline", "summary": {"probability_of_ruin": 0.1}},
                    "scenarios": [
                        {"name": "scenario_1", "summary": {"probability_of_ruin": 0.3}}
                    ],
                    "delta_probability_of_ruin": [0.2],
                    "delta_median_final_net_worth": [-1500.0]
                }))
            }),
        );
        let engine = engine_for(serve(app).await);

        let state = ScenarioState::baseline();
        let document = CompareDocument::from_presets(
            &state,
            &[crate::domain::scenario::Preset::HighRent],
        );
        let comparison = engine.compare(&document).await.unwrap();

        assert_eq!(comparison.scenarios.len(), 1);
        assert_eq!(comparison.delta_probability_of_ruin, vec![0.2]);
    }

    #[tokio::test]
    async fn health_succeeds_against_a_live_service() {
        let app = Router::new().route("/health", get(|| async { Json(json!({"status": "ok"})) }));
        let engine = engine_for(serve(app).await);
        assert!(engine.health().await.is_ok());
    }
}
