//! Pure validation predicates shared across the domain.
//!
//! No side effects and no errors: callers decide which `LedgerError` a
//! failed predicate maps to.

use rust_decimal::Decimal;

/// True iff `value > 0`.
pub fn is_positive(value: Decimal) -> bool {
    value > Decimal::ZERO
}

/// True iff `lower <= value <= upper` (inclusive at both ends).
pub fn is_within_range(value: Decimal, lower: Decimal, upper: Decimal) -> bool {
    value >= lower && value <= upper
}
