#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `PresaleError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Sale lifecycle and timing errors (codes 200-299).
    Lifecycle,
    /// Configuration field errors (codes 300-399).
    Configuration,
    /// Contribution errors (codes 400-499).
    Contribution,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  PresaleError
/// @notice Canonical error enum shared by the presale fundraising contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///         Use the ErrorExt trait to retrieve the category and description.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Lifecycle
///   300 - 399 : Configuration
///   400 - 499 : Contribution
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum PresaleError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the sale owner.
    NotOwner = 100,

    // --- Lifecycle (200-299) ---
    /// Operation attempted outside its legal sale state (e.g. contribute
    /// outside Funding, close outside Finished, setters after start).
    InvalidState = 200,

    /// New open date is not strictly in the future.
    InvalidOpenDate = 201,

    /// Sale period must be strictly positive.
    TimePeriodZero = 202,

    /// New period would move the sale end date into the past.
    InvalidTimePeriod = 203,

    // --- Configuration (300-399) ---
    /// Ratio or percentage argument is outside its valid PPM range, or a
    /// beneficiary percentage was raised instead of reduced.
    InvalidPercentage = 300,

    /// Configured contribution token is not a token contract.
    InvalidContributionToken = 301,

    /// A configuration field expected to be a contract resolves to a bare
    /// external account.
    ContractIsExternalAccount = 302,

    /// Beneficiary identity is the zero address.
    InvalidBeneficiary = 303,

    // --- Contribution (400-499) ---
    /// Contribution value does not match what the sale's token mode expects.
    InvalidContributeValue = 400,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every PresaleError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for PresaleError {
    fn category(&self) -> ErrorCategory {
        match self {
            PresaleError::NotInitialized | PresaleError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }
            PresaleError::NotOwner => ErrorCategory::Authorization,

            PresaleError::InvalidState
            | PresaleError::InvalidOpenDate
            | PresaleError::TimePeriodZero
            | PresaleError::InvalidTimePeriod => ErrorCategory::Lifecycle,

            PresaleError::InvalidPercentage
            | PresaleError::InvalidContributionToken
            | PresaleError::ContractIsExternalAccount
            | PresaleError::InvalidBeneficiary => ErrorCategory::Configuration,

            PresaleError::InvalidContributeValue => ErrorCategory::Contribution,

            PresaleError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            PresaleError::NotInitialized => "Contract has not been initialized",
            PresaleError::AlreadyInitialized => "Contract has already been initialized",
            PresaleError::NotOwner => "Caller is not the sale owner",
            PresaleError::InvalidState => "Operation is not legal in the current sale state",
            PresaleError::InvalidOpenDate => "Open date must be strictly in the future",
            PresaleError::TimePeriodZero => "Sale period must be strictly positive",
            PresaleError::InvalidTimePeriod => "New period would end the sale in the past",
            PresaleError::InvalidPercentage => "Percentage is outside its valid PPM range",
            PresaleError::InvalidContributionToken => {
                "Contribution token is not a token contract"
            }
            PresaleError::ContractIsExternalAccount => {
                "Expected a contract but got an external account"
            }
            PresaleError::InvalidBeneficiary => "Beneficiary is the zero address",
            PresaleError::InvalidContributeValue => {
                "Contribution value does not match the sale's token mode"
            }
            PresaleError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
