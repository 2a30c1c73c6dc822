use soroban_sdk::{Address, Env, Symbol};

/// Emitted when open() fixes an unscheduled sale's start date.
///
/// # Topics
/// * `Symbol` - "sale_opened"
///
/// # Data
/// * `u64` - The open date that was fixed
pub fn emit_sale_opened(e: &Env, open_date: u64) {
    e.events()
        .publish((Symbol::new(e, "sale_opened"),), open_date);
}

/// Emitted when the owner reschedules a pending sale.
///
/// # Topics
/// * `Symbol` - "open_date_updated"
///
/// # Data
/// * `u64` - The new open date
pub fn emit_open_date_updated(e: &Env, open_date: u64) {
    e.events()
        .publish((Symbol::new(e, "open_date_updated"),), open_date);
}

/// Emitted when the owner resizes the contribution window.
///
/// # Topics
/// * `Symbol` - "period_updated"
///
/// # Data
/// * `u64` - The new period in seconds
pub fn emit_period_updated(e: &Env, period: u64) {
    e.events()
        .publish((Symbol::new(e, "period_updated"),), period);
}

/// Emitted when the owner ratchets the beneficiary percentage down.
///
/// # Topics
/// * `Symbol` - "beneficiary_pct_reduced"
///
/// # Data
/// * `u32` - The new PPM percentage
pub fn emit_beneficiary_pct_reduced(e: &Env, new_pct: u32) {
    e.events()
        .publish((Symbol::new(e, "beneficiary_pct_reduced"),), new_pct);
}

/// Emitted for every successful contribution.
///
/// # Topics
/// * `Symbol` - "contribute"
/// * `Address` - The contributor
///
/// # Data
/// * `i128` - Contribution-token amount paid in
/// * `i128` - Project-token amount minted to the contributor
pub fn emit_contribute(e: &Env, contributor: &Address, value: i128, minted: i128) {
    let topics = (Symbol::new(e, "contribute"), contributor.clone());
    e.events().publish(topics, (value, minted));
}

/// Emitted once when the sale is closed.
///
/// # Topics
/// * `Symbol` - "sale_closed"
///
/// # Data
/// * `i128` - Total raised
/// * `i128` - Share transferred to the reserve
/// * `i128` - Share transferred to the beneficiary
/// * `i128` - Project tokens minted to the beneficiary
pub fn emit_sale_closed(
    e: &Env,
    raised: i128,
    reserve_share: i128,
    beneficiary_share: i128,
    beneficiary_minted: i128,
) {
    e.events().publish(
        (Symbol::new(e, "sale_closed"),),
        (raised, reserve_share, beneficiary_share, beneficiary_minted),
    );
}

/// Fire-and-forget notification to the downstream market maker that
/// continuous trading may begin. No synchronous response is expected.
///
/// # Topics
/// * `Symbol` - "trading_open"
/// * `Address` - The market-maker controller
pub fn emit_trading_open(e: &Env, controller: &Address) {
    let topics = (Symbol::new(e, "trading_open"), controller.clone());
    e.events().publish(topics, ());
}
