//! REST exposure: an Axum router over the bill services
//!
//! The REST layer is one possible surface over the services; it owns no
//! business logic. Handlers build the services from the shared state, and
//! errors convert to JSON bodies via `BilledError::into_response`.

use crate::bills::{BillList, BillView};
use crate::config::AppConfig;
use crate::core::bill::Bill;
use crate::core::error::BilledError;
use crate::core::navigation::NullNavigator;
use crate::core::store::BillStore;
use crate::newbill::{NewBill, NewBillForm};
use anyhow::{Context, Result};
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use validator::Validate;

/// Shared state behind every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BillStore>,
}

/// JSON body of `POST /bills`.
#[derive(Debug, Deserialize, Validate)]
pub struct NewBillRequest {
    /// Employee filing the expense.
    #[validate(email(message = "email invalide"))]
    pub email: String,

    /// Name of the selected receipt file; validated like a form upload.
    pub file_name: String,

    #[serde(flatten)]
    pub form: NewBillForm,
}

/// Assembles the router and serves it.
pub struct Builder {
    store: Option<Arc<dyn BillStore>>,
    config: AppConfig,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            store: None,
            config: AppConfig::default(),
        }
    }

    pub fn with_store(mut self, store: Arc<dyn BillStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the full router: health probes, bill routes, trace and CORS
    /// layers.
    pub fn build_router(&self) -> Result<Router> {
        let store = self.store.clone().context("no bill store configured")?;
        let state = AppState { store };

        let app = health_routes()
            .merge(bill_routes(state))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            );

        Ok(app)
    }

    /// Bind the configured address and serve until shutdown.
    pub async fn serve(self) -> Result<()> {
        let app = self.build_router()?;
        let addr = self.config.bind_addr();

        info!(%addr, "billed server listening");
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

fn bill_routes(state: AppState) -> Router {
    Router::new()
        .route("/bills", get(list_bills).post(submit_bill))
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "billed"
    }))
}

/// `GET /bills` — the collection sorted by date descending, annotated for
/// display.
async fn list_bills(State(state): State<AppState>) -> Result<Json<Vec<BillView>>, BilledError> {
    let views = BillList::new(state.store.clone()).get_bill_views().await?;
    Ok(Json(views))
}

/// `POST /bills` — full submission flow: receipt validation, upload, persist.
async fn submit_bill(
    State(state): State<AppState>,
    Json(request): Json<NewBillRequest>,
) -> Result<(StatusCode, Json<Bill>), BilledError> {
    request.validate().map_err(BilledError::from)?;

    let service = NewBill::new(state.store.clone(), Arc::new(NullNavigator), request.email);
    service.attach_receipt(&request.file_name).await?;
    let bill = service.submit(request.form).await?;

    Ok((StatusCode::CREATED, Json(bill)))
}
