//! Cart totals

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::carts::records::CartLineRecord;

/// Decimal places kept on cart and receipt totals.
pub const TOTAL_DECIMAL_PLACES: u32 = 2;

/// Sum of `quantity × price` over every line, rounded half away from zero.
#[must_use]
pub fn cart_total(lines: &[CartLineRecord]) -> Decimal {
    let total: Decimal = lines
        .iter()
        .map(|line| Decimal::from(line.quantity) * line.price)
        .sum();

    round_total(total)
}

#[must_use]
pub fn round_total(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(TOTAL_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
