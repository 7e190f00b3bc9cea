/// Customer read endpoints
///
/// # Endpoints
///
/// - `GET /v1/customers`                 - All customers (id+name) for selects
/// - `GET /v1/customers/filtered?query=` - Customers with invoice totals
use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Query, State},
    Json,
};
use finboard_shared::models::customer::{Customer, CustomerField, CustomerWithTotals};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub query: String,
}

/// All customers as id+name pairs, ordered by name
///
/// Used to populate the customer selection input on invoice forms.
pub async fn list_customers(State(state): State<AppState>) -> ApiResult<Json<Vec<CustomerField>>> {
    let customers = Customer::list_fields(&state.db).await?;

    Ok(Json(customers))
}

/// Customers matching a name/email substring, with invoice totals
///
/// Customers without invoices appear with zero totals.
pub async fn filtered_customers(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> ApiResult<Json<Vec<CustomerWithTotals>>> {
    let customers = Customer::list_filtered(&state.db, &params.query).await?;

    Ok(Json(customers))
}
