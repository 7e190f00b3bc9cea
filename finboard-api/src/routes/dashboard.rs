/// Dashboard read endpoints
///
/// Aggregate views for the dashboard landing page: the revenue chart,
/// the five most recent invoices, and the summary cards.
///
/// # Endpoints
///
/// - `GET /v1/dashboard/revenue`         - Monthly revenue rows
/// - `GET /v1/dashboard/latest-invoices` - 5 most recent invoices
/// - `GET /v1/dashboard/cards`           - Aggregate card metrics
use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use finboard_shared::models::{
    dashboard::DashboardCards,
    invoice::{Invoice, LatestInvoice},
    revenue::Revenue,
};

/// Monthly revenue for the summary chart
pub async fn revenue(State(state): State<AppState>) -> ApiResult<Json<Vec<Revenue>>> {
    let rows = Revenue::list_all(&state.db).await?;

    Ok(Json(rows))
}

/// The five most recent invoices with customer details
///
/// Amounts arrive currency-formatted. Any data-store failure surfaces
/// as a generic fetch error, never partial results.
pub async fn latest_invoices(State(state): State<AppState>) -> ApiResult<Json<Vec<LatestInvoice>>> {
    let invoices = Invoice::latest(&state.db).await?;

    Ok(Json(invoices))
}

/// Aggregate card metrics
///
/// The three underlying queries run without a shared transaction; the
/// metrics are advisory and read skew between them is accepted.
pub async fn cards(State(state): State<AppState>) -> ApiResult<Json<DashboardCards>> {
    let cards = DashboardCards::fetch(&state.db).await?;

    Ok(Json(cards))
}
