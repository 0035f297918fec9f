//! Domain models for the payments service.

pub mod payment;

pub use payment::Payment;
