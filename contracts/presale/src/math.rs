//! Overflow-safe arithmetic helpers for the sale's PPM fixed-point math.
//!
//! All functions use checked arithmetic and surface `PresaleError::Overflow`
//! instead of panicking, so precondition failures revert cleanly.

use presale_errors::PresaleError;

/// Parts-per-million fixed-point scale: 1_000_000 == 100%.
pub const PPM: i128 = 1_000_000;

/// Checked `i128` addition.
#[inline]
pub fn add(a: i128, b: i128) -> Result<i128, PresaleError> {
    a.checked_add(b).ok_or(PresaleError::Overflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul(a: i128, b: i128) -> Result<i128, PresaleError> {
    a.checked_mul(b).ok_or(PresaleError::Overflow)
}

/// Apply a PPM-scaled factor: `amount * factor / 1_000_000`, truncating.
///
/// Multiplies before dividing. Chained applications therefore truncate at
/// each step, which is the intended close-time rounding behavior.
#[inline]
pub fn ppm_mul(amount: i128, factor: i128) -> Result<i128, PresaleError> {
    Ok(mul(amount, factor)? / PPM)
}
