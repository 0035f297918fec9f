//! Payment Application Service
//!
//! Orchestrates the payment registry through the repository port.
//! Contains NO infrastructure logic.

use chrono::{Local, NaiveDate};

use farmalink_types::{AppError, CreatePaymentRequest, Payment, PaymentRepository};

/// Source of the server's current date.
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Application service for payment operations.
///
/// Generic over `R: PaymentRepository` - the adapter is injected at compile time.
/// Each service owns its registry, so tests get isolated state by building
/// their own instance.
pub struct PaymentService<R: PaymentRepository> {
    repo: R,
    clock: Clock,
}

impl<R: PaymentRepository> PaymentService<R> {
    /// Creates a new payment service dating payments with the local server date.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, local_today)
    }

    /// Creates a payment service with a custom date source.
    pub fn with_clock(repo: R, clock: Clock) -> Self {
        Self { repo, clock }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Today's date as seen by the service.
    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Registers a payment dated today and appends it to the registry.
    ///
    /// No field beyond presence is validated: empty names and negative or
    /// zero amounts are stored as given.
    pub async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, AppError> {
        let payment = Payment::new(req.holder_name, req.holder_id, req.amount, self.today());

        let stored = self.repo.append(payment).await?;
        tracing::info!(
            holder_id = %stored.holder_id,
            amount = stored.amount,
            payment_date = %stored.payment_date,
            "payment registered"
        );

        Ok(stored)
    }

    /// Lists every registered payment in the order it was created.
    pub async fn list_payments(&self) -> Result<Vec<Payment>, AppError> {
        self.repo.list_all().await.map_err(Into::into)
    }
}
