//! Token movement helpers for the presale.
//!
//! Centralizes the three flows the sale performs: pulling contribution
//! tokens in, paying raised funds out at close, and minting project tokens.
//! All transfers are all-or-nothing; a failed cross-contract call reverts
//! the whole operation.

use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

/// Pull `amount` contribution tokens from `from` into the sale contract.
/// Requires a prior approval naming the sale contract as spender.
pub fn collect(e: &Env, token: &Address, from: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer_from(&contract, from, &contract, &amount);
}

/// Pay `amount` contribution tokens out of the sale contract to `recipient`.
pub fn pay_out(e: &Env, token: &Address, recipient: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer(&contract, recipient, &amount);
}

/// Mint `amount` freshly issued project tokens to `recipient`. The sale
/// contract must be the project token's admin.
pub fn mint_project_tokens(e: &Env, token_manager: &Address, recipient: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    StellarAssetClient::new(e, token_manager).mint(recipient, &amount);
}
