//! Discount arithmetic
//!
//! Amounts are rounded to cents with ties going to the even cent, so a
//! discount of exactly half a cent does not always round up.

/// Round to two decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Discount taken off `price` at `percent`
pub fn discount_amount(price: f64, percent: f64) -> f64 {
    round2(percent * price / 100.0)
}

/// Price after subtracting an already rounded discount
pub fn net_price(price: f64, discount: f64) -> f64 {
    round2(price - discount)
}
