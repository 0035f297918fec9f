//! Port traits (interfaces for adapters).
//!
//! The application layer depends on these traits, not on concrete storage.

mod repository;

pub use repository::PaymentRepository;
