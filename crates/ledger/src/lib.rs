//! Ledger Domain Library
//!
//! Core domain types and interfaces for the account aggregation service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Account, AccountInput, AccountView, Customer)
//!   - `value_objects/`: Immutable value types (AccountType)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use ledger::domain::{Account, AccountInput, AccountType};
//! use ledger::ports::{AccountRepository, CustomerLookup};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{Account, AccountInput, AccountType, AccountView, Customer, DomainError};
pub use ports::{AccountRepository, CustomerLookup};
