/// Database models for Finboard
///
/// This module contains the persisted entities and their access
/// contracts. Reads return plain data structures shaped for the
/// presentation layer; the only mutable entity is the invoice.
///
/// # Models
///
/// - `invoice`: Invoice CRUD and the filtered/paginated listing queries
/// - `customer`: Customer reads and derived invoice aggregates
/// - `revenue`: Read-only monthly revenue reference table
/// - `dashboard`: Aggregate dashboard card metrics
/// - `user`: User accounts for authentication
pub mod customer;
pub mod dashboard;
pub mod invoice;
pub mod revenue;
pub mod user;
