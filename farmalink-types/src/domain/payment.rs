//! Payment domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A recorded payment to a holder.
///
/// Payments are immutable once created. The registry only ever appends
/// them, it never edits or removes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    /// Name of the person paid
    #[schema(example = "Ana Pérez")]
    pub holder_name: String,
    /// National identification string (RUT); not required to be unique
    #[schema(example = "12345678-9")]
    pub holder_id: String,
    /// Amount paid. Any value is accepted, including zero and negatives.
    #[schema(example = 50000.0)]
    pub amount: f64,
    /// Server date on which the payment was registered
    #[schema(example = "2025-11-20")]
    pub payment_date: NaiveDate,
}

impl Payment {
    /// Creates a payment dated `payment_date`.
    pub fn new(
        holder_name: impl Into<String>,
        holder_id: impl Into<String>,
        amount: f64,
        payment_date: NaiveDate,
    ) -> Self {
        Self {
            holder_name: holder_name.into(),
            holder_id: holder_id.into(),
            amount,
            payment_date,
        }
    }
}
