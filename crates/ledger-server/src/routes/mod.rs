//! Ledger API Routes
//!
//! - /accounts - Account lifecycle, enriched with customers
//! - /accounts/customer/:customer_id - Accounts of one customer

pub mod account;
pub mod swagger;
