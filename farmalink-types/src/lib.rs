//! # FarmaLink Types
//!
//! Domain types and port traits for the FarmaLink payments service.
//! This crate has ZERO IO dependencies - only data structures
//! and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal layout:
//! - `domain/` - Pure domain types (Payment)
//! - `ports/` - Trait definitions that storage adapters implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::Payment;
pub use dto::*;
pub use error::{AppError, RepoError};
pub use ports::PaymentRepository;
