use crate::error::TaxlessArbitrageError;
use crate::{events, storage};
use soroban_sdk::{Address, Env};

/// True iff `account` is the current owner
pub fn is_owner(env: &Env, account: &Address) -> bool {
    storage::get_owner(env) == *account
}

/// Caller must sign the invocation and hold the owner role
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), TaxlessArbitrageError> {
    caller.require_auth();
    if !is_owner(env, caller) {
        return Err(TaxlessArbitrageError::Unauthorized);
    }
    Ok(())
}

/// Upsert an allow-list entry. Owner only; visible to the next authorization check.
pub fn set_approved_swapper(
    env: &Env,
    caller: &Address,
    swapper: &Address,
    allowed: bool,
) -> Result<(), TaxlessArbitrageError> {
    require_owner(env, caller)?;

    storage::set_approved_swapper(env, swapper, allowed);
    events::swapper_set(env, swapper, allowed);
    Ok(())
}

pub fn is_approved(env: &Env, account: &Address) -> bool {
    storage::is_approved_swapper(env, account)
}

/// Gate for the swap path. Owner privilege does not imply approval.
pub fn authorize(env: &Env, account: &Address) -> Result<(), TaxlessArbitrageError> {
    if !is_approved(env, account) {
        return Err(TaxlessArbitrageError::AccessDenied);
    }
    Ok(())
}

/// Hand the owner role to `new_owner`. Owner only.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), TaxlessArbitrageError> {
    require_owner(env, caller)?;

    storage::set_owner(env, new_owner);
    events::owner_transferred(env, caller, new_owner);
    Ok(())
}
