// ============================================================================
// SWAP ENTRY POINT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Authorization is checked before any token movement
// 2. Invalid amounts are rejected before any token movement
// 3. A held execution lock rejects the call
//
// Each rule below returns before the executor reaches the token or the
// router, so the external services need no model.
//
// ============================================================================

// ============================================================================
// FORMAL VERIFICATION RULES (Certora Sunbeam)
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
fn build_request(
    token_in: Address,
    router: Address,
    amount_in: i128,
    amount_out_min: i128,
    recipient: Address,
) -> crate::SwapRequest {
    crate::SwapRequest {
        router,
        token_in,
        amount_in,
        amount_out_min,
        recipient,
    }
}

/// RULE: An account outside the allow-list is always denied
#[cfg(feature = "certora")]
#[rule]
pub fn unapproved_caller_denied(
    env: Env,
    caller: Address,
    token_in: Address,
    router: Address,
    recipient: Address,
    amount_in: i128,
    amount_out_min: i128,
) {
    use crate::{access, executor, TaxlessArbitrageError};

    cvlr_assume!(!access::is_approved(&env, &caller));

    let request = build_request(token_in, router, amount_in, amount_out_min, recipient);
    let result = executor::execute_taxless_sell(&env, &caller, &request);

    cvlr_assert!(result == Err(TaxlessArbitrageError::AccessDenied));
}

/// RULE: Non-positive input is rejected for approved callers
#[cfg(feature = "certora")]
#[rule]
pub fn non_positive_amount_rejected(
    env: Env,
    caller: Address,
    token_in: Address,
    router: Address,
    recipient: Address,
    amount_in: i128,
    amount_out_min: i128,
) {
    use crate::{access, executor, TaxlessArbitrageError};

    cvlr_assume!(access::is_approved(&env, &caller));
    cvlr_assume!(amount_in <= 0);

    let request = build_request(token_in, router, amount_in, amount_out_min, recipient);
    let result = executor::execute_taxless_sell(&env, &caller, &request);

    cvlr_assert!(result == Err(TaxlessArbitrageError::InvalidAmount));
}

/// RULE: A held lock rejects valid requests from approved callers
#[cfg(feature = "certora")]
#[rule]
pub fn held_lock_rejects(
    env: Env,
    caller: Address,
    token_in: Address,
    router: Address,
    recipient: Address,
    amount_in: i128,
    amount_out_min: i128,
) {
    use crate::{access, executor, storage, TaxlessArbitrageError};

    cvlr_assume!(access::is_approved(&env, &caller));
    cvlr_assume!(amount_in > 0 && amount_out_min >= 0);
    cvlr_assume!(storage::is_locked(&env));

    let request = build_request(token_in, router, amount_in, amount_out_min, recipient);
    let result = executor::execute_taxless_sell(&env, &caller, &request);

    cvlr_assert!(result == Err(TaxlessArbitrageError::Reentrant));
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::{SwapRequest, TaxlessArbitrageError};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Env};

    fn request(env: &Env, amount_in: i128, amount_out_min: i128) -> SwapRequest {
        SwapRequest {
            router: Address::generate(env),
            token_in: Address::generate(env),
            amount_in,
            amount_out_min,
            recipient: Address::generate(env),
        }
    }

    #[test]
    fn test_validate_accepts_positive_input() {
        let env = Env::default();
        assert!(request(&env, 1, 0).validate().is_ok());
        assert!(request(&env, 1_000, 999).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_invalid_amounts() {
        let env = Env::default();
        assert_eq!(
            request(&env, 0, 0).validate(),
            Err(TaxlessArbitrageError::InvalidAmount)
        );
        assert_eq!(
            request(&env, -1, 0).validate(),
            Err(TaxlessArbitrageError::InvalidAmount)
        );
        assert_eq!(
            request(&env, 1, -1).validate(),
            Err(TaxlessArbitrageError::InvalidAmount)
        );
    }

    #[test]
    fn test_path_is_single_hop_to_base() {
        let env = Env::default();
        let req = request(&env, 1, 0);
        let base_asset = Address::generate(&env);

        let path = req.path(&env, &base_asset);
        assert_eq!(path.len(), 2);
        assert_eq!(path.get(0).unwrap(), req.token_in);
        assert_eq!(path.get(1).unwrap(), base_asset);
    }
}
