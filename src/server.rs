//! HTTP front end for query analysis.
//!
//! ## Endpoints
//!
//! - `GET /`: landing page with the search form
//! - `POST /analyze`: form field `query`; responds with
//!   `{"results": [...]}` or `400 {"error": "..."}`

use axum::Router;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use safescan_search::{AnalysisResult, Analyzer};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{Result, ServiceError};

/// Message returned when `/analyze` is called without a query.
pub const MISSING_QUERY_MESSAGE: &str = "Please enter a search keyword";

const INDEX_HTML: &str = include_str!("../static/index.html");

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body of `POST /analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub query: Option<String>,
}

/// Successful `POST /analyze` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Analyzed pages, safest first.
    pub results: Vec<AnalysisResult>,
}

/// Error body for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// Shared state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        Self { analyzer }
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/analyze", post(handle_analyze))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// AnalysisServer
// ---------------------------------------------------------------------------

/// Background HTTP server serving [`router`].
pub struct AnalysisServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl AnalysisServer {
    /// Start the HTTP server.
    ///
    /// Binds to `{config.host}:{config.port}` (use port `0` for auto-assign)
    /// and begins serving in a background tokio task.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start(analyzer: Arc<Analyzer>, config: &ServerConfig) -> Result<Self> {
        let app = router(AppState::new(analyzer));
        let (listener, addr) = bind(config).await?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("safescan server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for AnalysisServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve [`router`] in the foreground until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server fails.
pub async fn serve<F>(analyzer: Arc<Analyzer>, config: &ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(AppState::new(analyzer));
    let (listener, _addr) = bind(config).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServiceError::Server(format!("serve failed: {e}")))?;

    info!("safescan stopped");
    Ok(())
}

async fn bind(config: &ServerConfig) -> Result<(TcpListener, SocketAddr)> {
    let bind_addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServiceError::Server(format!("bind to {bind_addr} failed: {e}")))?;

    let addr = listener
        .local_addr()
        .map_err(|e| ServiceError::Server(format!("failed to get local addr: {e}")))?;

    info!("safescan listening on http://{addr}");
    Ok((listener, addr))
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// `GET /`: landing page.
async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `POST /analyze`: analyze the search results for the submitted query.
///
/// A body that is not a valid form counts as a missing query.
async fn handle_analyze(
    State(state): State<AppState>,
    form: std::result::Result<Form<AnalyzeForm>, FormRejection>,
) -> Response {
    let query = match form {
        Ok(Form(AnalyzeForm { query: Some(q) })) if !q.is_empty() => q,
        Ok(_) => return missing_query(),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable analyze form");
            return missing_query();
        }
    };

    let reports = state.analyzer.analyze_query(&query).await;
    tracing::debug!(count = reports.len(), "analyze request served");

    Json(AnalyzeResponse {
        results: reports.into_iter().map(AnalysisResult::Success).collect(),
    })
    .into_response()
}

fn missing_query() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: MISSING_QUERY_MESSAGE.to_owned(),
        }),
    )
        .into_response()
}
