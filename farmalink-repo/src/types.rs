//! Shared database row type for the SQLite and PostgreSQL adapters.

use chrono::NaiveDate;
use sqlx::FromRow;

use farmalink_types::Payment;

/// Payment row from database.
///
/// The `seq` ordering column is deliberately not selected; it never leaves
/// the storage layer.
#[derive(FromRow)]
pub struct DbPayment {
    pub holder_name: String,
    pub holder_id: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
}

impl DbPayment {
    pub fn into_domain(self) -> Payment {
        Payment::new(
            self.holder_name,
            self.holder_id,
            self.amount,
            self.payment_date,
        )
    }
}
