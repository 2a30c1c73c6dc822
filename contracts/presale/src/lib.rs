//! # Presale Contract
//!
//! A timed fundraising window that precedes continuous trading. Contributors
//! deposit a contribution token while the sale is open and receive freshly
//! minted project tokens at a fixed PPM exchange rate. Once the window has
//! elapsed anyone may close the sale, which splits the raised funds between
//! the bonding-curve reserve and the beneficiary and signals the downstream
//! market-maker controller to open trading.
//!
//! ## Storage Layout
//!
//! | Key                    | Tier         | Lifecycle                |
//! |------------------------|--------------|--------------------------|
//! | `DataKey::Owner`       | `instance()` | Set once at initialize   |
//! | `DataKey::Config`      | `instance()` | Mutable via setters      |
//! | `DataKey::TotalRaised` | `instance()` | Grows during Funding     |
//! | `DataKey::TokensSold`  | `instance()` | Grows during Funding     |
//! | `DataKey::Closed`      | `instance()` | Written once by close()  |
//!
//! All keys live in `instance()`: the full state is a small, bounded set of
//! values that is loaded on every call anyway.
//!
//! ## Sale state
//!
//! The sale state is a pure function of the stored config and the ledger
//! timestamp. Only the terminal `Closed` flag is stored; `Pending`, `Funding`
//! and `Finished` are derived, so clock and state can never drift apart.

#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

pub use presale_errors::{ErrorCategory, ErrorExt, PresaleError};

mod events;
mod funds;
mod math;
mod parameters;
mod validation;







pub use math::PPM;

// ─── Storage keys ─────────────────────────────────────────────────────────────

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Address allowed to open the sale and tune its parameters.
    Owner,
    /// Full sale configuration, written at initialize and by the setters.
    Config,
    /// Cumulative contribution-token amount raised. Only grows, only while
    /// the sale is Funding.
    TotalRaised,
    /// Running total of project tokens minted to contributors. Needed at
    /// close to size the beneficiary's dilution mint.
    TokensSold,
    /// Terminal flag written by close(). The only stored piece of the state
    /// machine; everything else is derived from timestamps.
    Closed,
}

// ─── Domain types ─────────────────────────────────────────────────────────────

/// Lifecycle state of the sale, derived from config and ledger time.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PresaleState {
    /// Sale not yet open: open date is unset or still in the future.
    Pending = 0,
    /// Contribution window is running.
    Funding = 1,
    /// Window elapsed; waiting for an explicit close().
    Finished = 2,
    /// close() has run. Terminal.
    Closed = 3,
}

/// Sale configuration. `open_date`, `period` and
/// `minting_for_beneficiary_pct` can still change before the sale starts
/// (the percentage only downward); everything else is fixed at initialize.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PresaleConfig {
    /// Market-maker controller notified when trading opens at close.
    pub controller: Address,
    /// Project-token contract this sale mints through.
    pub token_manager: Address,
    /// Bonding-curve reserve receiving the reserve share at close.
    pub reserve: Address,
    /// Recipient of the non-reserve share and of the optional dilution mint.
    pub beneficiary: Address,
    /// Token contributors pay with.
    pub contribution_token: Address,
    /// Sale start timestamp. Zero means "fixed by the first open() call".
    pub open_date: u64,
    /// Length of the contribution window in seconds.
    pub period: u64,
    /// Contribution tokens to project tokens, PPM scaled.
    pub exchange_rate: i128,
    /// Fraction of raised funds retained in the reserve, PPM in (0, 1e6].
    pub future_reserve_ratio: u32,
    /// Extra project tokens minted to the beneficiary at close, as a PPM
    /// fraction of the tokens sold to contributors. Ratchets down only.
    pub minting_for_beneficiary_pct: u32,
}

// ─── Storage helpers ──────────────────────────────────────────────────────────

pub(crate) fn load_config(e: &Env) -> Result<PresaleConfig, PresaleError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PresaleError::NotInitialized)
}

pub(crate) fn save_config(e: &Env, config: &PresaleConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub(crate) fn stored_total_raised(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub(crate) fn stored_tokens_sold(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TokensSold)
        .unwrap_or(0)
}

pub(crate) fn is_closed(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Closed)
        .unwrap_or(false)
}

/// Derive the sale state from stored config and the ledger clock.
pub(crate) fn current_state(e: &Env, config: &PresaleConfig) -> PresaleState {
    if is_closed(e) {
        return PresaleState::Closed;
    }
    let now = e.ledger().timestamp();
    if config.open_date == 0 || now < config.open_date {
        return PresaleState::Pending;
    }
    // A saturating end means an astronomically long period never wraps into
    // an instantly-finished sale.
    if now < config.open_date.saturating_add(config.period) {
        return PresaleState::Funding;
    }
    PresaleState::Finished
}

/// Verify `caller` is the stored owner and has authorized this call.
pub(crate) fn require_owner(e: &Env, caller: &Address) -> Result<(), PresaleError> {
    caller.require_auth();
    let owner: Address = e
        .storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(PresaleError::NotInitialized)?;
    if owner != *caller {
        return Err(PresaleError::NotOwner);
    }
    Ok(())
}

// ─── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct Presale;

#[contractimpl]
impl Presale {
    /// One-time setup of the sale.
    ///
    /// `open_date == 0` leaves the start unscheduled until `open()` is
    /// called; a non-zero date must be strictly in the future.
    ///
    /// # Errors
    /// * `AlreadyInitialized` — initialize was already called
    /// * `TimePeriodZero` — `period == 0`
    /// * `InvalidOpenDate` — non-zero `open_date` not in the future
    /// * `InvalidPercentage` — `future_reserve_ratio` outside (0, 1e6] or
    ///   `minting_for_beneficiary_pct` above 1e6
    /// * `InvalidBeneficiary` — `beneficiary` is the zero address
    /// * `InvalidContributionToken` — `contribution_token` is not a contract
    /// * `ContractIsExternalAccount` — `controller`, `token_manager` or
    ///   `reserve` is a bare external account
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        e: Env,
        owner: Address,
        controller: Address,
        token_manager: Address,
        reserve: Address,
        beneficiary: Address,
        contribution_token: Address,
        period: u64,
        exchange_rate: i128,
        future_reserve_ratio: u32,
        minting_for_beneficiary_pct: u32,
        open_date: u64,
    ) -> Result<(), PresaleError> {
        if e.storage().instance().has(&DataKey::Config) {
            return Err(PresaleError::AlreadyInitialized);
        }

        if period == 0 {
            return Err(PresaleError::TimePeriodZero);
        }
        if open_date != 0 && open_date <= e.ledger().timestamp() {
            return Err(PresaleError::InvalidOpenDate);
        }
        if future_reserve_ratio == 0 || future_reserve_ratio as i128 > PPM {
            return Err(PresaleError::InvalidPercentage);
        }
        if minting_for_beneficiary_pct as i128 > PPM {
            return Err(PresaleError::InvalidPercentage);
        }
        if validation::is_zero_address(&beneficiary) {
            return Err(PresaleError::InvalidBeneficiary);
        }
        if !validation::is_contract(&contribution_token) {
            return Err(PresaleError::InvalidContributionToken);
        }
        for contract_field in [&controller, &token_manager, &reserve] {
            if !validation::is_contract(contract_field) {
                return Err(PresaleError::ContractIsExternalAccount);
            }
        }

        e.storage().instance().set(&DataKey::Owner, &owner);
        save_config(
            &e,
            &PresaleConfig {
                controller,
                token_manager,
                reserve,
                beneficiary,
                contribution_token,
                open_date,
                period,
                exchange_rate,
                future_reserve_ratio,
                minting_for_beneficiary_pct,
            },
        );
        e.storage().instance().set(&DataKey::TotalRaised, &0_i128);
        e.storage().instance().set(&DataKey::TokensSold, &0_i128);

        Ok(())
    }

    /// Start the sale now. Only legal while Pending with no scheduled open
    /// date; a sale with a preset date opens by itself when the date passes.
    ///
    /// # Errors
    /// * `InvalidState` — sale already started, scheduled, or closed
    /// * `NotOwner` — caller is not the sale owner
    pub fn open(e: Env, caller: Address) -> Result<(), PresaleError> {
        require_owner(&e, &caller)?;
        let mut config = load_config(&e)?;
        if current_state(&e, &config) != PresaleState::Pending || config.open_date != 0 {
            return Err(PresaleError::InvalidState);
        }
        config.open_date = e.ledger().timestamp();
        save_config(&e, &config);
        events::emit_sale_opened(&e, config.open_date);
        Ok(())
    }

    /// Reschedule the sale start. Only legal while the sale is still
    /// Pending; the new date must be strictly in the future.
    ///
    /// # Errors
    /// * `InvalidState` — sale has already started or closed
    /// * `InvalidOpenDate` — `date` is not strictly in the future
    /// * `NotOwner` — caller is not the sale owner
    pub fn set_open_date(e: Env, caller: Address, date: u64) -> Result<(), PresaleError> {
        require_owner(&e, &caller)?;
        parameters::set_open_date(&e, date)
    }

    /// Resize the contribution window. The new period must be positive and
    /// must not put a scheduled sale's end date in the past.
    ///
    /// # Errors
    /// * `InvalidState` — sale is closed
    /// * `TimePeriodZero` — `period == 0`
    /// * `InvalidTimePeriod` — new end date would be in the past
    /// * `NotOwner` — caller is not the sale owner
    pub fn set_period(e: Env, caller: Address, period: u64) -> Result<(), PresaleError> {
        require_owner(&e, &caller)?;
        parameters::set_period(&e, period)
    }

    /// Ratchet the close-time beneficiary minting percentage down. Raising
    /// it is never legal.
    ///
    /// # Errors
    /// * `InvalidPercentage` — `new_pct` above the current value
    /// * `NotOwner` — caller is not the sale owner
    pub fn reduce_beneficiary_pct(
        e: Env,
        caller: Address,
        new_pct: u32,
    ) -> Result<(), PresaleError> {
        require_owner(&e, &caller)?;
        parameters::reduce_beneficiary_pct(&e, new_pct)
    }

    /// Contribute `value` contribution tokens while the sale is Funding.
    ///
    /// Pulls the tokens into the contract, mints
    /// `floor(value * exchange_rate / 1e6)` project tokens to `contributor`
    /// and returns the minted amount.
    ///
    /// # Errors
    /// * `InvalidState` — sale is not Funding
    /// * `InvalidContributeValue` — `value <= 0`
    /// * `Overflow` — accumulator or mint arithmetic overflowed
    pub fn contribute(e: Env, contributor: Address, value: i128) -> Result<i128, PresaleError> {
        contributor.require_auth();
        let config = load_config(&e)?;
        if current_state(&e, &config) != PresaleState::Funding {
            return Err(PresaleError::InvalidState);
        }
        if value <= 0 {
            return Err(PresaleError::InvalidContributeValue);
        }

        let minted = math::ppm_mul(value, config.exchange_rate)?;

        let raised = math::add(stored_total_raised(&e), value)?;
        let sold = math::add(stored_tokens_sold(&e), minted)?;
        e.storage().instance().set(&DataKey::TotalRaised, &raised);
        e.storage().instance().set(&DataKey::TokensSold, &sold);

        funds::collect(&e, &config.contribution_token, &contributor, value);
        funds::mint_project_tokens(&e, &config.token_manager, &contributor, minted);

        events::emit_contribute(&e, &contributor, value, minted);
        Ok(minted)
    }

    /// Close the sale once the contribution window has elapsed. Callable by
    /// anyone; the outcome is fully determined by stored state.
    ///
    /// Splits the raised funds between reserve and beneficiary, mints the
    /// beneficiary's dilution share of project tokens, and emits both the
    /// sale-closed record and the fire-and-forget trading-open signal for
    /// the downstream market maker.
    ///
    /// # Errors
    /// * `InvalidState` — sale is not Finished (in particular, already Closed)
    /// * `Overflow` — fund-split arithmetic overflowed
    pub fn close(e: Env) -> Result<(), PresaleError> {
        let config = load_config(&e)?;
        if current_state(&e, &config) != PresaleState::Finished {
            return Err(PresaleError::InvalidState);
        }

        let raised = stored_total_raised(&e);

        // Multiply before dividing, twice: inflate the raise by the pending
        // beneficiary dilution, then apply the reserve ratio. Capped at the
        // actual raise so the split always conserves funds.
        let inflated = math::ppm_mul(raised, PPM + config.minting_for_beneficiary_pct as i128)?;
        let mut reserve_share = math::ppm_mul(inflated, config.future_reserve_ratio as i128)?;
        if reserve_share > raised {
            reserve_share = raised;
        }
        let beneficiary_share = raised - reserve_share;

        e.storage().instance().set(&DataKey::Closed, &true);

        funds::pay_out(&e, &config.contribution_token, &config.reserve, reserve_share);
        funds::pay_out(
            &e,
            &config.contribution_token,
            &config.beneficiary,
            beneficiary_share,
        );

        let beneficiary_minted = if config.minting_for_beneficiary_pct > 0 {
            let minted = math::ppm_mul(
                stored_tokens_sold(&e),
                config.minting_for_beneficiary_pct as i128,
            )?;
            funds::mint_project_tokens(&e, &config.token_manager, &config.beneficiary, minted);
            minted
        } else {
            0
        };

        events::emit_sale_closed(&e, raised, reserve_share, beneficiary_share, beneficiary_minted);
        events::emit_trading_open(&e, &config.controller);
        Ok(())
    }

    // ── Query surface ─────────────────────────────────────────────────────────

    /// Current sale state, derived from config and the ledger clock.
    pub fn state(e: Env) -> Result<PresaleState, PresaleError> {
        let config = load_config(&e)?;
        Ok(current_state(&e, &config))
    }

    /// Project tokens a contribution of `value` would mint right now.
    pub fn contribution_to_tokens(e: Env, value: i128) -> Result<i128, PresaleError> {
        let config = load_config(&e)?;
        math::ppm_mul(value, config.exchange_rate)
    }

    /// Cumulative contribution-token amount raised.
    pub fn total_raised(e: Env) -> i128 {
        stored_total_raised(&e)
    }

    /// Running total of project tokens minted to contributors.
    pub fn tokens_sold(e: Env) -> i128 {
        stored_tokens_sold(&e)
    }

    pub fn open_date(e: Env) -> Result<u64, PresaleError> {
        Ok(load_config(&e)?.open_date)
    }

    pub fn period(e: Env) -> Result<u64, PresaleError> {
        Ok(load_config(&e)?.period)
    }

    pub fn exchange_rate(e: Env) -> Result<i128, PresaleError> {
        Ok(load_config(&e)?.exchange_rate)
    }

    pub fn future_reserve_ratio(e: Env) -> Result<u32, PresaleError> {
        Ok(load_config(&e)?.future_reserve_ratio)
    }

    pub fn minting_for_beneficiary_pct(e: Env) -> Result<u32, PresaleError> {
        Ok(load_config(&e)?.minting_for_beneficiary_pct)
    }

    pub fn beneficiary(e: Env) -> Result<Address, PresaleError> {
        Ok(load_config(&e)?.beneficiary)
    }

    pub fn contribution_token(e: Env) -> Result<Address, PresaleError> {
        Ok(load_config(&e)?.contribution_token)
    }

    pub fn reserve(e: Env) -> Result<Address, PresaleError> {
        Ok(load_config(&e)?.reserve)
    }

    pub fn token_manager(e: Env) -> Result<Address, PresaleError> {
        Ok(load_config(&e)?.token_manager)
    }

    pub fn controller(e: Env) -> Result<Address, PresaleError> {
        Ok(load_config(&e)?.controller)
    }

    pub fn owner(e: Env) -> Result<Address, PresaleError> {
        e.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(PresaleError::NotInitialized)
    }
}
