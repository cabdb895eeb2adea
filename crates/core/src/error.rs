//! Ledger error model.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::id::CustomerId;

/// Result type used across the ledger domain.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant carries enough data to render a human-readable message;
/// there are no error codes. All failures are raised at the point of
/// violation, before any state is mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// An operation referenced a customer id that is not registered.
    #[error("Customer with ID {0} does not exist")]
    CustomerNotFound(CustomerId),

    /// A lend was attempted while a loan already exists for the customer.
    ///
    /// Raised regardless of the existing loan's outstanding debt.
    #[error("Customer with ID {0} already has an outstanding loan")]
    CustomerHasOutstandingLoan(CustomerId),

    /// A loan principal fell outside the configured bounds.
    #[error("Loan amount must be between {min} and {max}")]
    InvalidLoanAmount { min: Decimal, max: Decimal },

    /// An interest rate fell outside the configured bounds.
    #[error("Interest rate must be between {min} and {max}")]
    InvalidInterestRate { min: Decimal, max: Decimal },

    /// A repayment was non-positive or exceeded the outstanding debt.
    #[error("{0}")]
    InvalidLoanRepaymentAmount(String),

    /// A repay was attempted for a customer with no registered loan.
    #[error("Customer with ID {0} does not have an outstanding loan")]
    LoanNotFound(CustomerId),

    /// Generic ledger failure (e.g. a malformed customer id string).
    #[error("{0}")]
    Ledger(String),
}

impl LedgerError {
    pub fn repayment(msg: impl Into<String>) -> Self {
        Self::InvalidLoanRepaymentAmount(msg.into())
    }

    pub fn ledger(msg: impl Into<String>) -> Self {
        Self::Ledger(msg.into())
    }
}
