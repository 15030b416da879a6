// ============================================================================
// ACCESS CONTROL SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Only the owner mutates the allow-list or the owner role
// 2. Allow-list writes are visible to the next read
// 3. Allow-list writes are idempotent
// 4. Owner privilege does not imply swap approval
//
// ============================================================================

// ============================================================================
// FORMAL VERIFICATION RULES (Certora Sunbeam)
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

/// RULE: An owner write to the allow-list takes effect immediately
#[cfg(feature = "certora")]
#[rule]
pub fn set_approved_swapper_takes_effect(env: Env, caller: Address, swapper: Address, allowed: bool) {
    use crate::access;

    cvlr_assume!(access::is_owner(&env, &caller));

    let result = access::set_approved_swapper(&env, &caller, &swapper, allowed);

    cvlr_assert!(result.is_ok());
    cvlr_assert!(access::is_approved(&env, &swapper) == allowed);
}

/// RULE: A non-owner can never change allow-list membership
#[cfg(feature = "certora")]
#[rule]
pub fn non_owner_cannot_change_allow_list(
    env: Env,
    caller: Address,
    swapper: Address,
    allowed: bool,
) {
    use crate::access;
    use crate::TaxlessArbitrageError;

    cvlr_assume!(!access::is_owner(&env, &caller));
    let before = access::is_approved(&env, &swapper);

    let result = access::set_approved_swapper(&env, &caller, &swapper, allowed);

    cvlr_assert!(result == Err(TaxlessArbitrageError::Unauthorized));
    cvlr_assert!(access::is_approved(&env, &swapper) == before);
}

/// RULE: Approving twice leaves the same membership as approving once
#[cfg(feature = "certora")]
#[rule]
pub fn approval_is_idempotent(env: Env, owner: Address, swapper: Address, allowed: bool) {
    use crate::access;

    cvlr_assume!(access::is_owner(&env, &owner));

    let _ = access::set_approved_swapper(&env, &owner, &swapper, allowed);
    let once = access::is_approved(&env, &swapper);
    let _ = access::set_approved_swapper(&env, &owner, &swapper, allowed);

    cvlr_assert!(access::is_approved(&env, &swapper) == once);
}

/// RULE: Non-owner cannot take over the owner role
#[cfg(feature = "certora")]
#[rule]
pub fn non_owner_cannot_transfer_ownership(env: Env, caller: Address, new_owner: Address) {
    use crate::access;

    cvlr_assume!(!access::is_owner(&env, &caller));

    let result = access::transfer_ownership(&env, &caller, &new_owner);

    cvlr_assert!(result.is_err());
    cvlr_assert!(!access::is_owner(&env, &caller));
}

/// RULE: The owner is denied the swap path unless explicitly approved
#[cfg(feature = "certora")]
#[rule]
pub fn owner_not_implicitly_approved(env: Env, owner: Address) {
    use crate::access;

    cvlr_assume!(access::is_owner(&env, &owner));
    cvlr_assume!(!access::is_approved(&env, &owner));

    cvlr_assert!(access::authorize(&env, &owner).is_err());
}

/// RULE: Sanity - an approved account can be authorized
#[cfg(feature = "certora")]
#[rule]
pub fn approved_account_authorized_sanity(env: Env, account: Address) {
    use crate::access;

    cvlr_assume!(access::is_approved(&env, &account));

    cvlr_satisfy!(access::authorize(&env, &account).is_ok());
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
