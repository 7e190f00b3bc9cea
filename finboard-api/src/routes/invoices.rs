/// Invoice endpoints
///
/// Read side: the paginated/filtered listing, the page count for the
/// pager, and single-invoice lookup for the edit form. Write side: the
/// three mutations of the invoice lifecycle. Mutation responses carry
/// the cache-invalidation and navigation signals for the presentation
/// layer.
///
/// # Endpoints
///
/// - `GET    /v1/invoices?query=&page=` - Filtered, paginated listing
/// - `GET    /v1/invoices/pages?query=` - Total page count for the filter
/// - `GET    /v1/invoices/:id`          - Single invoice for the edit form
/// - `POST   /v1/invoices`              - Create invoice
/// - `PUT    /v1/invoices/:id`          - Update invoice
/// - `DELETE /v1/invoices/:id`          - Delete invoice
use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidationErrorDetail},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use finboard_shared::{
    models::invoice::{Invoice, InvoiceForm, InvoiceListRow, InvoiceStatus, NewInvoice},
    money,
    views::MutationEffects,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Query parameters for the invoice listing
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Substring to match across customer name/email and invoice
    /// amount/date/status (empty matches everything)
    #[serde(default)]
    pub query: String,

    /// 1-indexed page number
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// Query parameters for the page count
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub query: String,
}

/// Page count response
#[derive(Debug, Serialize)]
pub struct PagesResponse {
    pub total_pages: i64,
}

/// Invoice form input for create and update
///
/// The id and date are never accepted from the caller: the id is
/// generated and the date stamped at creation, and both are immutable
/// afterwards.
#[derive(Debug, Deserialize, Validate)]
pub struct InvoiceInput {
    /// Customer the invoice belongs to
    #[validate(length(min = 1, message = "Please select a customer."))]
    pub customer_id: String,

    /// Amount in decimal dollars; converted to cents on write
    #[validate(range(
        exclusive_min = 0.0,
        message = "Please enter an amount greater than $0."
    ))]
    pub amount: f64,

    /// Invoice status: "pending" or "paid"
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

fn validate_status(value: &str) -> Result<(), ValidationError> {
    if InvoiceStatus::parse(value).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_status");
        err.message = Some("Please select an invoice status.".into());
        Err(err)
    }
}

impl InvoiceInput {
    /// Converts validated form input into the storage representation
    ///
    /// Must be called after `validate()`; it still reports a malformed
    /// customer identifier as a field error rather than panicking.
    fn to_new_invoice(&self) -> Result<NewInvoice, ApiError> {
        let customer_id = Uuid::parse_str(&self.customer_id).map_err(|_| {
            ApiError::ValidationError(vec![ValidationErrorDetail {
                field: "customer_id".to_string(),
                message: "Please select a customer.".to_string(),
            }])
        })?;

        let status = InvoiceStatus::parse(&self.status).ok_or_else(|| {
            ApiError::ValidationError(vec![ValidationErrorDetail {
                field: "status".to_string(),
                message: "Please select an invoice status.".to_string(),
            }])
        })?;

        Ok(NewInvoice {
            customer_id,
            amount_cents: money::dollars_to_cents(self.amount),
            status,
        })
    }
}

/// Mutation response carrying the effect signals
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub id: Uuid,
    pub message: String,

    #[serde(flatten)]
    pub effects: MutationEffects,
}

/// Filtered, paginated invoice listing
///
/// Returns at most 6 rows per page, newest first. An empty result is a
/// 200 with an empty array, never an error. A page below 1 is a caller
/// contract violation and is rejected before any query runs.
pub async fn list_invoices(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<InvoiceListRow>>> {
    if params.page < 1 {
        return Err(ApiError::BadRequest("page must be at least 1".to_string()));
    }

    let invoices = Invoice::list_filtered(&state.db, &params.query, params.page).await?;

    Ok(Json(invoices))
}

/// Total page count for the filtered listing
///
/// Shares its filter predicate with the listing query. 0 pages means an
/// empty match set; the UI shows page 1 empty.
pub async fn invoice_pages(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> ApiResult<Json<PagesResponse>> {
    let total_pages = Invoice::page_count(&state.db, &params.query).await?;

    Ok(Json(PagesResponse { total_pages }))
}

/// Single invoice for the edit form, amount in decimal dollars
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<InvoiceForm>> {
    let invoice = Invoice::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Invoice not found".to_string()))?;

    Ok(Json(invoice))
}

/// Creates an invoice
///
/// Validation failure returns a 422 with per-field details and persists
/// nothing. Success inserts one row with a fresh id and today's date,
/// then signals the caller to invalidate the listing view and navigate
/// back to it.
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(input): Json<InvoiceInput>,
) -> ApiResult<Json<MutationResponse>> {
    input.validate()?;
    let data = input.to_new_invoice()?;

    let invoice = Invoice::create(&state.db, data).await?;

    Ok(Json(MutationResponse {
        id: invoice.id,
        message: "Invoice created.".to_string(),
        effects: MutationEffects::invoice_saved(),
    }))
}

/// Updates an invoice's customer, amount, and status
///
/// Same validation as create. An id matching no row is treated as
/// success; no existence check is performed.
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<InvoiceInput>,
) -> ApiResult<Json<MutationResponse>> {
    input.validate()?;
    let data = input.to_new_invoice()?;

    Invoice::update(&state.db, id, data).await?;

    Ok(Json(MutationResponse {
        id,
        message: "Invoice updated.".to_string(),
        effects: MutationEffects::invoice_saved(),
    }))
}

/// Deletes an invoice
///
/// Idempotent: deleting a nonexistent id succeeds. The listing view is
/// invalidated but there is no navigation; the caller is already on it.
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MutationResponse>> {
    Invoice::delete(&state.db, id).await?;

    Ok(Json(MutationResponse {
        id,
        message: "Invoice deleted.".to_string(),
        effects: MutationEffects::invoice_deleted(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> InvoiceInput {
        InvoiceInput {
            customer_id: Uuid::new_v4().to_string(),
            amount: 50.0,
            status: "pending".to_string(),
        }
    }

    fn field_errors(input: &InvoiceInput) -> Vec<String> {
        match input.validate() {
            Ok(()) => vec![],
            Err(errors) => errors.field_errors().keys().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let input = InvoiceInput {
            amount: 0.0,
            ..valid_input()
        };
        assert_eq!(field_errors(&input), vec!["amount"]);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let input = InvoiceInput {
            amount: -12.5,
            ..valid_input()
        };
        assert_eq!(field_errors(&input), vec!["amount"]);
    }

    #[test]
    fn test_empty_customer_rejected() {
        let input = InvoiceInput {
            customer_id: String::new(),
            ..valid_input()
        };
        assert_eq!(field_errors(&input), vec!["customer_id"]);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let input = InvoiceInput {
            status: "overdue".to_string(),
            ..valid_input()
        };
        assert_eq!(field_errors(&input), vec!["status"]);
    }

    #[test]
    fn test_to_new_invoice_converts_dollars_to_cents() {
        let input = valid_input();
        let data = input.to_new_invoice().expect("conversion should succeed");
        assert_eq!(data.amount_cents, 5000);
        assert_eq!(data.status, InvoiceStatus::Pending);
    }

    #[test]
    fn test_to_new_invoice_rejects_malformed_customer_id() {
        let input = InvoiceInput {
            customer_id: "not-a-uuid".to_string(),
            ..valid_input()
        };
        // Passes schema validation (non-empty) but fails conversion
        assert!(input.validate().is_ok());
        let err = input.to_new_invoice().unwrap_err();
        match err {
            ApiError::ValidationError(details) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "customer_id");
            }
            other => panic!("expected validation error, got {}", other),
        }
    }

    #[test]
    fn test_default_page_is_one() {
        assert_eq!(default_page(), 1);
    }
}
