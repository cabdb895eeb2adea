//! Lending domain module (loans and the bank ledger).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns. The
//! `Bank` owns the customer and loan registries; `Loan` enforces the
//! repayment invariants.

pub mod bank;
pub mod loan;

pub use bank::{Bank, CustomerInfo};
pub use loan::Loan;
