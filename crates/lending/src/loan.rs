use rust_decimal::Decimal;

use numibank_core::{validate, LedgerError, LedgerResult, LendingPolicy};
use numibank_customers::Customer;

/// One customer's loan: principal, interest rate, and repayment history.
///
/// Principal, rate, and customer are immutable after construction; only the
/// repayment sequence grows (append-only, never reordered). The invariant
/// `sum(repayments) <= principal * (1 + interest_rate)` holds at all times
/// because any repayment that would violate it is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    customer: Customer,
    principal: Decimal,
    interest_rate: Decimal,
    repayments: Vec<Decimal>,
}

impl Loan {
    /// Construct a loan, validating rate and principal against the policy.
    ///
    /// The rate must lie within the policy's inclusive rate bounds
    /// (`InvalidInterestRate` otherwise), and the principal within the
    /// inclusive amount bounds (`InvalidLoanAmount` otherwise). The rate is
    /// checked first.
    pub fn new(
        customer: Customer,
        principal: Decimal,
        interest_rate: Decimal,
        policy: &LendingPolicy,
    ) -> LedgerResult<Self> {
        if !validate::is_within_range(
            interest_rate,
            policy.minimum_interest_rate,
            policy.maximum_interest_rate,
        ) {
            return Err(LedgerError::InvalidInterestRate {
                min: policy.minimum_interest_rate,
                max: policy.maximum_interest_rate,
            });
        }

        if !validate::is_within_range(
            principal,
            policy.minimum_loan_amount,
            policy.maximum_loan_amount,
        ) {
            return Err(LedgerError::InvalidLoanAmount {
                min: policy.minimum_loan_amount,
                max: policy.maximum_loan_amount,
            });
        }

        Ok(Self {
            customer,
            principal,
            interest_rate,
            repayments: Vec::new(),
        })
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Outstanding debt under simple interest.
    ///
    /// With no repayments recorded this is the principal exactly, which
    /// keeps a fresh loan free of any interest-minus-zero arithmetic.
    /// Otherwise it is `principal + principal * rate - total_repayments`.
    /// Interest accrues on the original principal only and never compounds.
    pub fn outstanding_debt(&self) -> Decimal {
        if self.repayments.is_empty() {
            return self.principal;
        }

        let total_interest = self.principal * self.interest_rate;
        self.principal + total_interest - self.total_repayments()
    }

    /// Sum of all recorded repayments (zero for an empty sequence).
    pub fn total_repayments(&self) -> Decimal {
        self.repayments.iter().copied().sum()
    }

    /// Snapshot of the repayment history.
    ///
    /// Returns a fresh copy; internal storage is never handed out.
    pub fn repayments(&self) -> Vec<Decimal> {
        self.repayments.clone()
    }

    /// Record a repayment against the outstanding debt.
    ///
    /// Rejects non-positive amounts and amounts exceeding the current
    /// outstanding debt; nothing is recorded on failure.
    pub fn add_repayment(&mut self, amount: Decimal) -> LedgerResult<()> {
        if !validate::is_positive(amount) {
            return Err(LedgerError::repayment("Amount must be positive"));
        }

        if amount > self.outstanding_debt() {
            return Err(LedgerError::repayment("Amount exceeds outstanding debt"));
        }

        self.repayments.push(amount);
        Ok(())
    }
}
