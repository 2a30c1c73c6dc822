#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ErrorCategory, ErrorExt, PresaleError};
    use std::vec::Vec;

    fn all_variants() -> Vec<PresaleError> {
        std::vec![
            PresaleError::NotInitialized,
            PresaleError::AlreadyInitialized,
            PresaleError::NotOwner,
            PresaleError::InvalidState,
            PresaleError::InvalidOpenDate,
            PresaleError::TimePeriodZero,
            PresaleError::InvalidTimePeriod,
            PresaleError::InvalidPercentage,
            PresaleError::InvalidContributionToken,
            PresaleError::ContractIsExternalAccount,
            PresaleError::InvalidBeneficiary,
            PresaleError::InvalidContributeValue,
            PresaleError::Overflow,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(PresaleError::NotInitialized as u32, 1);
        assert_eq!(PresaleError::AlreadyInitialized as u32, 2);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(PresaleError::NotOwner as u32, 100);
    }

    #[test]
    fn test_codes_lifecycle() {
        assert_eq!(PresaleError::InvalidState as u32, 200);
        assert_eq!(PresaleError::InvalidOpenDate as u32, 201);
        assert_eq!(PresaleError::TimePeriodZero as u32, 202);
        assert_eq!(PresaleError::InvalidTimePeriod as u32, 203);
    }

    #[test]
    fn test_codes_configuration() {
        assert_eq!(PresaleError::InvalidPercentage as u32, 300);
        assert_eq!(PresaleError::InvalidContributionToken as u32, 301);
        assert_eq!(PresaleError::ContractIsExternalAccount as u32, 302);
        assert_eq!(PresaleError::InvalidBeneficiary as u32, 303);
    }

    #[test]
    fn test_codes_contribution() {
        assert_eq!(PresaleError::InvalidContributeValue as u32, 400);
    }

    #[test]
    fn test_codes_arithmetic() {
        assert_eq!(PresaleError::Overflow as u32, 700);
    }

    // --- Category mapping tests ---

    #[test]
    fn test_category_initialization() {
        assert_eq!(
            PresaleError::NotInitialized.category(),
            ErrorCategory::Initialization
        );
        assert_eq!(
            PresaleError::AlreadyInitialized.category(),
            ErrorCategory::Initialization
        );
    }

    #[test]
    fn test_category_authorization() {
        assert_eq!(PresaleError::NotOwner.category(), ErrorCategory::Authorization);
    }

    #[test]
    fn test_category_lifecycle() {
        assert_eq!(
            PresaleError::InvalidState.category(),
            ErrorCategory::Lifecycle
        );
        assert_eq!(
            PresaleError::InvalidOpenDate.category(),
            ErrorCategory::Lifecycle
        );
        assert_eq!(
            PresaleError::TimePeriodZero.category(),
            ErrorCategory::Lifecycle
        );
        assert_eq!(
            PresaleError::InvalidTimePeriod.category(),
            ErrorCategory::Lifecycle
        );
    }

    #[test]
    fn test_category_configuration() {
        assert_eq!(
            PresaleError::InvalidPercentage.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            PresaleError::InvalidContributionToken.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            PresaleError::ContractIsExternalAccount.category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            PresaleError::InvalidBeneficiary.category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_category_contribution() {
        assert_eq!(
            PresaleError::InvalidContributeValue.category(),
            ErrorCategory::Contribution
        );
    }

    #[test]
    fn test_category_arithmetic() {
        assert_eq!(PresaleError::Overflow.category(), ErrorCategory::Arithmetic);
    }

    // --- Description tests ---

    #[test]
    fn test_every_variant_has_a_description() {
        for variant in all_variants() {
            assert!(!variant.description().is_empty());
        }
    }

    #[test]
    fn test_descriptions_are_unique() {
        let variants = all_variants();
        for (i, a) in variants.iter().enumerate() {
            for b in variants.iter().skip(i + 1) {
                assert_ne!(a.description(), b.description());
            }
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let variants = all_variants();
        for (i, a) in variants.iter().enumerate() {
            for b in variants.iter().skip(i + 1) {
                assert_ne!(*a as u32, *b as u32);
            }
        }
    }
}
