/// Customer model and read operations
///
/// Customers are populated by the out-of-scope seeding routine; the
/// runtime only reads them. The per-customer invoice totals are derived
/// on the fly with a LEFT JOIN and conditional aggregation, never
/// stored.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE customers (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL,
///     email VARCHAR(255) NOT NULL,
///     image_url VARCHAR(512) NOT NULL
/// );
/// ```
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::money::format_currency;

/// Customer id and name, used to populate selection inputs
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CustomerField {
    pub id: Uuid,
    pub name: String,
}

/// Customer with derived invoice aggregates for the customers table
#[derive(Debug, Clone, Serialize)]
pub struct CustomerWithTotals {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,

    /// Number of invoices for this customer (0 when none)
    pub total_invoices: i64,

    /// Sum of pending invoice amounts, currency-formatted
    pub total_pending: String,

    /// Sum of paid invoice amounts, currency-formatted
    pub total_paid: String,
}

#[derive(Debug, sqlx::FromRow)]
struct CustomerTotalsRow {
    id: Uuid,
    name: String,
    email: String,
    image_url: String,
    total_invoices: i64,
    total_pending: i64,
    total_paid: i64,
}

pub struct Customer;

impl Customer {
    /// Lists all customers as id+name pairs, ordered by name
    pub async fn list_fields(pool: &PgPool) -> Result<Vec<CustomerField>, sqlx::Error> {
        let customers = sqlx::query_as::<_, CustomerField>(
            r#"
            SELECT id, name
            FROM customers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(customers)
    }

    /// Lists customers matching a name/email substring, with invoice totals
    ///
    /// Customers without invoices still appear: the LEFT JOIN produces
    /// NULL sums which are coalesced to 0 before currency formatting.
    pub async fn list_filtered(
        pool: &PgPool,
        query: &str,
    ) -> Result<Vec<CustomerWithTotals>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CustomerTotalsRow>(
            r#"
            SELECT customers.id, customers.name, customers.email, customers.image_url,
                   COUNT(invoices.id) AS total_invoices,
                   COALESCE(SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END), 0)::BIGINT AS total_pending,
                   COALESCE(SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END), 0)::BIGINT AS total_paid
            FROM customers
            LEFT JOIN invoices ON customers.id = invoices.customer_id
            WHERE customers.name ILIKE $1 OR customers.email ILIKE $1
            GROUP BY customers.id, customers.name, customers.email, customers.image_url
            ORDER BY customers.name ASC
            "#,
        )
        .bind(format!("%{}%", query))
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| CustomerWithTotals {
                id: r.id,
                name: r.name,
                email: r.email,
                image_url: r.image_url,
                total_invoices: r.total_invoices,
                total_pending: format_currency(r.total_pending),
                total_paid: format_currency(r.total_paid),
            })
            .collect())
    }
}
