/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Login endpoint
/// - `dashboard`: Revenue, latest invoices, and card aggregates
/// - `invoices`: Invoice listing, lookup, and mutations
/// - `customers`: Customer listing and invoice totals
pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod invoices;
