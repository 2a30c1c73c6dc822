//! Owner-tunable sale parameters: open date, period, beneficiary percentage.
//!
//! Callers have already passed the owner check; these functions enforce the
//! timing and range rules and persist the updated config. Every failure
//! leaves the stored config untouched.

use soroban_sdk::Env;

use crate::{current_state, events, load_config, save_config, PresaleError, PresaleState};

/// Reschedule the sale start. Only legal while the sale is still Pending,
/// and the new date must be strictly in the future.
pub fn set_open_date(e: &Env, date: u64) -> Result<(), PresaleError> {
    let mut config = load_config(e)?;
    if current_state(e, &config) != PresaleState::Pending {
        return Err(PresaleError::InvalidState);
    }
    if date <= e.ledger().timestamp() {
        return Err(PresaleError::InvalidOpenDate);
    }
    config.open_date = date;
    save_config(e, &config);
    events::emit_open_date_updated(e, date);
    Ok(())
}

/// Resize the contribution window. The new period must be positive and, for
/// a scheduled sale, must not put the end date in the past.
pub fn set_period(e: &Env, period: u64) -> Result<(), PresaleError> {
    let mut config = load_config(e)?;
    if current_state(e, &config) == PresaleState::Closed {
        return Err(PresaleError::InvalidState);
    }
    if period == 0 {
        return Err(PresaleError::TimePeriodZero);
    }
    if config.open_date != 0 && config.open_date.saturating_add(period) <= e.ledger().timestamp() {
        return Err(PresaleError::InvalidTimePeriod);
    }
    config.period = period;
    save_config(e, &config);
    events::emit_period_updated(e, period);
    Ok(())
}

/// One-directional ratchet on the close-time beneficiary mint: the
/// percentage can only ever go down.
pub fn reduce_beneficiary_pct(e: &Env, new_pct: u32) -> Result<(), PresaleError> {
    let mut config = load_config(e)?;
    // initialize caps the starting value at 1e6, so the ratchet alone keeps
    // the percentage in range.
    if new_pct > config.minting_for_beneficiary_pct {
        return Err(PresaleError::InvalidPercentage);
    }
    config.minting_for_beneficiary_pct = new_pct;
    save_config(e, &config);
    events::emit_beneficiary_pct_reduced(e, new_pct);
    Ok(())
}
