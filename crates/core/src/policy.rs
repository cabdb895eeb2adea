//! Lending policy: the configured bounds for loan amounts and rates.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Bounds and defaults consumed by loan construction.
///
/// Fixed when a `Bank` is constructed; operations never override these per
/// call. Amount bounds and rate bounds are inclusive at both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingPolicy {
    pub minimum_loan_amount: Decimal,
    pub maximum_loan_amount: Decimal,
    pub minimum_interest_rate: Decimal,
    pub maximum_interest_rate: Decimal,
    /// Rate applied when a lend does not specify one. Zero by default, so
    /// omitting the rate yields an interest-free loan.
    pub default_interest_rate: Decimal,
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            minimum_loan_amount: dec!(10),
            maximum_loan_amount: dec!(100),
            minimum_interest_rate: dec!(0.0),
            maximum_interest_rate: dec!(1.0),
            default_interest_rate: dec!(0.0),
        }
    }
}
