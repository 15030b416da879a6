// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Properties every taxless sell must preserve. The executor tests assert
// them against fixture contracts and the certora rules assert them
// symbolically.
//
// INVARIANT CATEGORIES:
//
// 1. ACCESS INVARIANTS
//    - A denied call changes no balance
//
// 2. CUSTODY INVARIANTS
//    - Caller is debited exactly the requested amount
//    - Nothing stays in the contract's custody across calls
//    - No standing router allowance after a call
//
// 3. TAX INVARIANTS
//    - Exemption never yields smaller proceeds than a taxed sell
//
// ============================================================================

// ============================================================================
// ACCESS INVARIANTS
// ============================================================================

/// Invariant: every observed balance is identical before and after
pub fn balances_unchanged(before: &[i128], after: &[i128]) -> bool {
    before.len() == after.len() && before.iter().zip(after.iter()).all(|(b, a)| b == a)
}

// ============================================================================
// CUSTODY INVARIANTS
// ============================================================================

/// Invariant: the caller loses exactly `amount_in` of the input token
///
/// Property:
///   balance_before - balance_after == amount_in
pub fn caller_debited_exactly(balance_before: i128, balance_after: i128, amount_in: i128) -> bool {
    balance_before.checked_sub(balance_after) == Some(amount_in)
}

/// Invariant: the contract's input-token custody is unchanged by a sell
pub fn no_residual_custody(custody_before: i128, custody_after: i128) -> bool {
    custody_before == custody_after
}

/// Invariant: router allowance is back to zero once the sell returns
pub fn allowance_cleared(allowance_after: i128) -> bool {
    allowance_after == 0
}

// ============================================================================
// TAX INVARIANTS
// ============================================================================

/// Invariant: an exempt sell pays out at least as much as a taxed one
/// from identical pool state
pub fn exemption_not_worse(exempt_out: i128, taxed_out: i128) -> bool {
    exempt_out >= taxed_out
}
