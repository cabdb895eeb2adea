use std::collections::HashMap;

use rust_decimal::Decimal;

use numibank_core::{CustomerId, LedgerError, LedgerResult, LendingPolicy};
use numibank_customers::Customer;

use crate::loan::Loan;

/// Read-only composite view of a customer and their loan, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerInfo<'a> {
    pub customer: &'a Customer,
    pub loan: Option<&'a Loan>,
}

/// The bank ledger: all customers and their (at most one) loan.
///
/// Both registries are owned exclusively by the `Bank` and mutated only
/// through its methods; validation precedes every mutation, so a failed
/// operation leaves no partial state behind.
///
/// There is no loan-closure operation: a fully repaid loan stays registered
/// and keeps blocking further lending to that customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    policy: LendingPolicy,
    customers: HashMap<CustomerId, Customer>,
    loans: HashMap<CustomerId, Loan>,
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

impl Bank {
    /// A bank with the default lending policy.
    pub fn new() -> Self {
        Self::with_policy(LendingPolicy::default())
    }

    /// A bank with an explicit lending policy. The policy is fixed for the
    /// lifetime of the bank; no operation overrides it per call.
    pub fn with_policy(policy: LendingPolicy) -> Self {
        Self {
            policy,
            customers: HashMap::new(),
            loans: HashMap::new(),
        }
    }

    pub fn policy(&self) -> &LendingPolicy {
        &self.policy
    }

    /// Register a new customer under a fresh id.
    ///
    /// Always succeeds; names are not checked for uniqueness.
    pub fn create_customer(&mut self, name: impl Into<String>) -> &Customer {
        let customer = Customer::new(name);
        let customer_id = customer.id_typed();
        tracing::info!(%customer_id, "customer created");
        self.customers.entry(customer_id).or_insert(customer)
    }

    /// Grant a loan to a registered customer without an outstanding loan.
    ///
    /// `interest_rate` of `None` selects the policy default. Loan
    /// construction errors (amount/rate out of bounds) propagate unchanged.
    pub fn lend(
        &mut self,
        customer_id: CustomerId,
        amount: Decimal,
        interest_rate: Option<Decimal>,
    ) -> LedgerResult<&Loan> {
        let customer = self
            .customers
            .get(&customer_id)
            .ok_or(LedgerError::CustomerNotFound(customer_id))?
            .clone();

        if self.loans.contains_key(&customer_id) {
            return Err(LedgerError::CustomerHasOutstandingLoan(customer_id));
        }

        let interest_rate = interest_rate.unwrap_or(self.policy.default_interest_rate);
        let loan = Loan::new(customer, amount, interest_rate, &self.policy)?;

        tracing::info!(%customer_id, %amount, %interest_rate, "loan granted");
        Ok(self.loans.entry(customer_id).or_insert(loan))
    }

    /// Process a repayment against a customer's outstanding loan.
    ///
    /// Repayment validation (positivity, overpayment) is delegated to the
    /// loan and its errors propagate unchanged.
    pub fn repay(&mut self, customer_id: CustomerId, amount: Decimal) -> LedgerResult<()> {
        if !self.customers.contains_key(&customer_id) {
            return Err(LedgerError::CustomerNotFound(customer_id));
        }

        let loan = self
            .loans
            .get_mut(&customer_id)
            .ok_or(LedgerError::LoanNotFound(customer_id))?;

        loan.add_repayment(amount)?;
        tracing::info!(%customer_id, %amount, "repayment processed");

        Ok(())
    }

    /// Look up a customer and their loan, if any.
    ///
    /// Returns `None` (not an error) for ids that were never registered.
    pub fn get_customer_info(&self, customer_id: CustomerId) -> Option<CustomerInfo<'_>> {
        let customer = self.customers.get(&customer_id)?;
        Some(CustomerInfo {
            customer,
            loan: self.loans.get(&customer_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn create_customer_registers_and_returns_the_record() {
        let mut bank = Bank::new();
        let customer_id = bank.create_customer("Muniu Kariuki").id_typed();

        let info = bank.get_customer_info(customer_id).unwrap();
        assert_eq!(info.customer.name(), "Muniu Kariuki");
        assert!(info.loan.is_none());
    }

    #[test]
    fn duplicate_names_register_distinct_customers() {
        let mut bank = Bank::new();
        let first = bank.create_customer("Muniu Kariuki").id_typed();
        let second = bank.create_customer("Muniu Kariuki").id_typed();

        assert_ne!(first, second);
        assert!(bank.get_customer_info(first).is_some());
        assert!(bank.get_customer_info(second).is_some());
    }

    #[test]
    fn lend_and_repay_walkthrough() {
        let mut bank = Bank::new();
        let customer_id = bank.create_customer("Muniu Kariuki").id_typed();

        let loan = bank.lend(customer_id, dec!(100), Some(dec!(0.05))).unwrap();
        assert_eq!(loan.outstanding_debt(), dec!(100));

        bank.repay(customer_id, dec!(5)).unwrap();

        let info = bank.get_customer_info(customer_id).unwrap();
        let loan = info.loan.unwrap();
        assert_eq!(loan.outstanding_debt(), dec!(100));
        assert_eq!(loan.total_repayments(), dec!(5));
    }

    #[test]
    fn overpayment_scenario_leaves_the_loan_unchanged() {
        let mut bank = Bank::new();
        let customer_id = bank.create_customer("Muniu Kariuki").id_typed();

        bank.lend(customer_id, dec!(20), Some(dec!(0.10))).unwrap();
        bank.repay(customer_id, dec!(10)).unwrap();

        let err = bank.repay(customer_id, dec!(15)).unwrap_err();
        assert_eq!(err.to_string(), "Amount exceeds outstanding debt");

        let info = bank.get_customer_info(customer_id).unwrap();
        let loan = info.loan.unwrap();
        assert_eq!(loan.outstanding_debt(), dec!(12));
        assert_eq!(loan.repayments(), vec![dec!(10)]);
    }

    #[test]
    fn lend_to_unregistered_customer_fails() {
        let mut bank = Bank::new();
        let unknown = CustomerId::new();

        let err = bank.lend(unknown, dec!(50), None).unwrap_err();
        assert_eq!(err, LedgerError::CustomerNotFound(unknown));
    }

    #[test]
    fn lend_twice_fails_even_when_the_first_loan_is_fully_repaid() {
        let mut bank = Bank::new();
        let customer_id = bank.create_customer("Muniu Kariuki").id_typed();

        bank.lend(customer_id, dec!(20), Some(dec!(0.10))).unwrap();
        let err = bank.lend(customer_id, dec!(30), None).unwrap_err();
        assert_eq!(err, LedgerError::CustomerHasOutstandingLoan(customer_id));

        // Repay down to zero; the loan record stays and keeps blocking.
        bank.repay(customer_id, dec!(10)).unwrap();
        bank.repay(customer_id, dec!(12)).unwrap();
        let info = bank.get_customer_info(customer_id).unwrap();
        assert_eq!(info.loan.unwrap().outstanding_debt(), Decimal::ZERO);

        let err = bank.lend(customer_id, dec!(30), None).unwrap_err();
        assert_eq!(err, LedgerError::CustomerHasOutstandingLoan(customer_id));
    }

    #[test]
    fn lend_propagates_loan_construction_errors_without_registering() {
        let mut bank = Bank::new();
        let customer_id = bank.create_customer("Muniu Kariuki").id_typed();

        let err = bank.lend(customer_id, dec!(5), Some(dec!(0.05))).unwrap_err();
        assert_eq!(err.to_string(), "Loan amount must be between 10 and 100");

        let err = bank.lend(customer_id, dec!(50), Some(dec!(2))).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInterestRate { .. }));

        // Nothing was registered, so a valid lend still succeeds.
        assert!(bank.get_customer_info(customer_id).unwrap().loan.is_none());
        bank.lend(customer_id, dec!(50), None).unwrap();
    }

    #[test]
    fn omitted_rate_uses_the_policy_default() {
        let mut bank = Bank::new();
        let customer_id = bank.create_customer("Muniu Kariuki").id_typed();

        let loan = bank.lend(customer_id, dec!(50), None).unwrap();
        assert_eq!(loan.interest_rate(), Decimal::ZERO);

        // Zero-interest loan: debt never rises above the principal.
        bank.repay(customer_id, dec!(20)).unwrap();
        let info = bank.get_customer_info(customer_id).unwrap();
        assert_eq!(info.loan.unwrap().outstanding_debt(), dec!(30));
    }

    #[test]
    fn custom_policy_governs_lend_bounds_and_default_rate() {
        let policy = LendingPolicy {
            minimum_loan_amount: dec!(100),
            maximum_loan_amount: dec!(1000),
            default_interest_rate: dec!(0.05),
            ..LendingPolicy::default()
        };
        let mut bank = Bank::with_policy(policy);
        let customer_id = bank.create_customer("Muniu Kariuki").id_typed();

        let err = bank.lend(customer_id, dec!(50), None).unwrap_err();
        assert_eq!(err.to_string(), "Loan amount must be between 100 and 1000");

        let loan = bank.lend(customer_id, dec!(500), None).unwrap();
        assert_eq!(loan.interest_rate(), dec!(0.05));
    }

    #[test]
    fn repay_checks_customer_before_loan() {
        let mut bank = Bank::new();
        let unknown = CustomerId::new();

        let err = bank.repay(unknown, dec!(5)).unwrap_err();
        assert_eq!(err, LedgerError::CustomerNotFound(unknown));

        let customer_id = bank.create_customer("Muniu Kariuki").id_typed();
        let err = bank.repay(customer_id, dec!(5)).unwrap_err();
        assert_eq!(err, LedgerError::LoanNotFound(customer_id));
    }

    #[test]
    fn repay_rejects_non_positive_amounts() {
        let mut bank = Bank::new();
        let customer_id = bank.create_customer("Muniu Kariuki").id_typed();
        bank.lend(customer_id, dec!(50), None).unwrap();

        let err = bank.repay(customer_id, Decimal::ZERO).unwrap_err();
        assert_eq!(err.to_string(), "Amount must be positive");

        let err = bank.repay(customer_id, dec!(-1)).unwrap_err();
        assert_eq!(err.to_string(), "Amount must be positive");
    }

    #[test]
    fn get_customer_info_returns_none_for_unknown_ids() {
        let bank = Bank::new();
        assert!(bank.get_customer_info(CustomerId::new()).is_none());
    }
}
