/// Invoice model and database operations
///
/// Invoices are the only entity the runtime mutates. Amounts are stored
/// as integer cents and converted at the boundary (see [`crate::money`]).
///
/// # Lifecycle
///
/// ```text
/// nonexistent → pending | paid → (pending ↔ paid via update) → deleted
/// ```
///
/// # Schema
///
/// ```sql
/// CREATE TABLE invoices (
///     id UUID PRIMARY KEY,
///     customer_id UUID NOT NULL REFERENCES customers(id),
///     amount BIGINT NOT NULL,
///     status VARCHAR(16) NOT NULL,
///     date DATE NOT NULL
/// );
/// ```
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::money::format_currency;
use crate::pagination::{self, ITEMS_PER_PAGE};

/// Invoice payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Invoice issued, payment outstanding
    Pending,

    /// Invoice settled
    Paid,
}

impl InvoiceStatus {
    /// Converts status to string for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }

    /// Parses a status string, returning None for anything outside the enum
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }
}

/// Invoice model as stored
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Invoice {
    /// Unique invoice ID, generated at creation
    pub id: Uuid,

    /// Customer this invoice belongs to
    pub customer_id: Uuid,

    /// Amount in integer cents
    pub amount: i64,

    /// Payment status ("pending" or "paid")
    pub status: String,

    /// Invoice date, stamped at creation and immutable afterwards
    pub date: NaiveDate,
}

/// Input for creating a new invoice
///
/// The id and date are not part of the input: the id is freshly
/// generated and the date is stamped with the current day.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub customer_id: Uuid,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

/// One of the five most recent invoices, joined with its customer
#[derive(Debug, Clone, Serialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,

    /// Amount formatted for display, e.g. "$1,234.56"
    pub amount: String,
}

#[derive(Debug, sqlx::FromRow)]
struct LatestInvoiceRow {
    id: Uuid,
    name: String,
    email: String,
    image_url: String,
    amount: i64,
}

/// Row of the paginated invoice listing, joined with its customer
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct InvoiceListRow {
    pub id: Uuid,

    /// Amount in integer cents; the presentation layer formats it
    pub amount: i64,
    pub date: NaiveDate,
    pub status: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Single invoice shaped for the edit form
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,

    /// Amount converted back to decimal dollars for the form input
    pub amount: f64,
    pub status: String,
}

#[derive(Debug, sqlx::FromRow)]
struct InvoiceFormRow {
    id: Uuid,
    customer_id: Uuid,
    amount: i64,
    status: String,
}

/// Substring filter predicate shared by the listing and page-count
/// queries. One case-insensitive "contains" match applied independently
/// across customer name/email and the text forms of the invoice amount,
/// date, and status, OR-combined. A query matching any one field
/// includes the row; a status string appearing inside an amount is an
/// accepted false positive, not a bug.
const INVOICE_FILTER: &str = "customers.name ILIKE $1
            OR customers.email ILIKE $1
            OR invoices.amount::text ILIKE $1
            OR invoices.date::text ILIKE $1
            OR invoices.status ILIKE $1";

fn like_pattern(query: &str) -> String {
    format!("%{}%", query)
}

impl Invoice {
    /// Creates a new invoice with a fresh id and today's date
    ///
    /// # Errors
    ///
    /// Returns an error if the customer does not exist (foreign key) or
    /// the database operation fails.
    pub async fn create(pool: &PgPool, data: NewInvoice) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        let date = Utc::now().date_naive();

        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, customer_id, amount, status, date
            "#,
        )
        .bind(id)
        .bind(data.customer_id)
        .bind(data.amount_cents)
        .bind(data.status.as_str())
        .bind(date)
        .fetch_one(pool)
        .await?;

        Ok(invoice)
    }

    /// Updates customer, amount, and status of an existing invoice
    ///
    /// The id and date are immutable after creation. An id matching no
    /// row is not reported: no existence check is performed and the
    /// update is treated as successful.
    pub async fn update(pool: &PgPool, id: Uuid, data: NewInvoice) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE invoices
            SET customer_id = $2, amount = $3, status = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(data.customer_id)
        .bind(data.amount_cents)
        .bind(data.status.as_str())
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Deletes an invoice by id
    ///
    /// Idempotent: deleting a nonexistent id is a no-op, not an error.
    /// Returns whether a row was actually removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Finds a single invoice shaped for the edit form
    ///
    /// The stored cents amount is converted back to decimal dollars.
    /// Returns None when no row matches; absence is not an error.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<InvoiceForm>, sqlx::Error> {
        let row = sqlx::query_as::<_, InvoiceFormRow>(
            r#"
            SELECT id, customer_id, amount, status
            FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|r| InvoiceForm {
            id: r.id,
            customer_id: r.customer_id,
            amount: crate::money::cents_to_dollars(r.amount),
            status: r.status,
        }))
    }

    /// Fetches the 5 most recent invoices with customer details
    pub async fn latest(pool: &PgPool) -> Result<Vec<LatestInvoice>, sqlx::Error> {
        let rows = sqlx::query_as::<_, LatestInvoiceRow>(
            r#"
            SELECT invoices.id, customers.name, customers.email, customers.image_url,
                   invoices.amount
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            ORDER BY invoices.date DESC
            LIMIT 5
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| LatestInvoice {
                id: r.id,
                name: r.name,
                email: r.email,
                image_url: r.image_url,
                amount: format_currency(r.amount),
            })
            .collect())
    }

    /// Lists invoices matching the substring filter, newest first
    ///
    /// `page` is 1-indexed and must be >= 1; the HTTP layer enforces
    /// this before calling. At most [`ITEMS_PER_PAGE`] rows are
    /// returned, offset by (page - 1) pages.
    pub async fn list_filtered(
        pool: &PgPool,
        query: &str,
        page: i64,
    ) -> Result<Vec<InvoiceListRow>, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT invoices.id, invoices.amount, invoices.date, invoices.status,
                   customers.name, customers.email, customers.image_url
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE {INVOICE_FILTER}
            ORDER BY invoices.date DESC
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query_as::<_, InvoiceListRow>(&sql)
            .bind(like_pattern(query))
            .bind(ITEMS_PER_PAGE)
            .bind(pagination::page_offset(page))
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }

    /// Counts invoices matching the substring filter
    ///
    /// Uses the exact predicate of [`Invoice::list_filtered`]; the two
    /// queries share one definition so they cannot drift apart.
    pub async fn count_filtered(pool: &PgPool, query: &str) -> Result<i64, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT COUNT(*)
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE {INVOICE_FILTER}
            "#
        );

        let (count,): (i64,) = sqlx::query_as(&sql)
            .bind(like_pattern(query))
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Total page count for the filtered listing
    ///
    /// ceil(matching rows / page size); an empty match set yields 0,
    /// which the presentation layer renders as "page 1, empty".
    pub async fn page_count(pool: &PgPool, query: &str) -> Result<i64, sqlx::Error> {
        let count = Self::count_filtered(pool, query).await?;
        Ok(pagination::total_pages(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(InvoiceStatus::Pending.as_str(), "pending");
        assert_eq!(InvoiceStatus::Paid.as_str(), "paid");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(InvoiceStatus::parse("pending"), Some(InvoiceStatus::Pending));
        assert_eq!(InvoiceStatus::parse("paid"), Some(InvoiceStatus::Paid));
        assert_eq!(InvoiceStatus::parse("overdue"), None);
        assert_eq!(InvoiceStatus::parse(""), None);
        assert_eq!(InvoiceStatus::parse("Paid"), None);
    }

    #[test]
    fn test_like_pattern() {
        assert_eq!(like_pattern("acme"), "%acme%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_filter_matches_all_five_columns() {
        // The shared predicate must compare every searchable column
        // against the single bound pattern.
        for column in [
            "customers.name",
            "customers.email",
            "invoices.amount::text",
            "invoices.date::text",
            "invoices.status",
        ] {
            assert!(
                INVOICE_FILTER.contains(column),
                "filter predicate is missing {}",
                column
            );
        }
        assert_eq!(INVOICE_FILTER.matches("$1").count(), 5);
    }

    // Integration tests for database operations are in tests/query_service_test.rs
}
