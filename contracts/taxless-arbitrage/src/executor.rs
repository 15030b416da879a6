use crate::error::TaxlessArbitrageError;
use crate::{access, events, storage};
use soroban_sdk::{log, token, vec, Address, Env, Vec};
use swap_types::{SwapRouterClient, SWAP_DEADLINE_WINDOW};

/// A single sell of `token_in` for the base asset, built per invocation
#[derive(Clone, Debug)]
pub struct SwapRequest {
    pub router: Address,
    pub token_in: Address,
    pub amount_in: i128,
    pub amount_out_min: i128,
    pub recipient: Address,
}

impl SwapRequest {
    /// Zero-amount sells are rejected rather than treated as no-ops
    pub fn validate(&self) -> Result<(), TaxlessArbitrageError> {
        if self.amount_in <= 0 || self.amount_out_min < 0 {
            return Err(TaxlessArbitrageError::InvalidAmount);
        }
        Ok(())
    }

    /// Single-hop path from the input token to the base asset
    pub fn path(&self, env: &Env, base_asset: &Address) -> Vec<Address> {
        vec![env, self.token_in.clone(), base_asset.clone()]
    }
}

/// Execute an authorized sell on behalf of `caller`.
///
/// Order matters: the caller is authenticated and checked against the
/// allow-list before any token is touched. Input is pulled into custody,
/// the router is approved for exactly what arrived, and the router pays the
/// recipient directly. The router allowance is cleared before returning.
///
/// # Returns
/// Base asset amount paid to `request.recipient`
pub fn execute_taxless_sell(
    env: &Env,
    caller: &Address,
    request: &SwapRequest,
) -> Result<i128, TaxlessArbitrageError> {
    caller.require_auth();
    access::authorize(env, caller)?;
    request.validate()?;

    acquire_lock(env)?;

    let contract_address = env.current_contract_address();
    let token_client = token::Client::new(env, &request.token_in);
    let custody_before = token_client.balance(&contract_address);

    let delivered = pull_input(env, &token_client, caller, request.amount_in)?;

    set_router_allowance(env, &token_client, &request.router, delivered);
    let amount_out = invoke_router(env, request, delivered)?;
    set_router_allowance(env, &token_client, &request.router, 0);

    refund_unspent(env, &token_client, caller, custody_before);

    release_lock(env);

    events::taxless_sell(env, caller, request, delivered, amount_out);
    Ok(amount_out)
}

fn acquire_lock(env: &Env) -> Result<(), TaxlessArbitrageError> {
    if storage::is_locked(env) {
        return Err(TaxlessArbitrageError::Reentrant);
    }
    storage::set_locked(env, true);
    Ok(())
}

fn release_lock(env: &Env) {
    storage::set_locked(env, false);
}

/// Pull `amount_in` from the caller using the allowance granted to this contract.
/// Returns the amount that actually arrived, which is less than `amount_in`
/// when the token withholds a transfer tax.
fn pull_input(
    env: &Env,
    token_client: &token::Client,
    caller: &Address,
    amount_in: i128,
) -> Result<i128, TaxlessArbitrageError> {
    let contract_address = env.current_contract_address();
    let balance_before = token_client.balance(&contract_address);

    match token_client.try_transfer_from(&contract_address, caller, &contract_address, &amount_in) {
        Ok(Ok(())) => {}
        _ => return Err(TaxlessArbitrageError::TransferFailed),
    }

    let delivered = token_client.balance(&contract_address) - balance_before;
    if delivered <= 0 {
        return Err(TaxlessArbitrageError::TransferFailed);
    }

    log!(env, "input pulled", amount_in, delivered);
    Ok(delivered)
}

/// Allowance lives only for the current ledger; zero clears it
fn set_router_allowance(env: &Env, token_client: &token::Client, router: &Address, amount: i128) {
    token_client.approve(
        &env.current_contract_address(),
        router,
        &amount,
        &env.ledger().sequence(),
    );
}

fn invoke_router(
    env: &Env,
    request: &SwapRequest,
    amount_in: i128,
) -> Result<i128, TaxlessArbitrageError> {
    let router = SwapRouterClient::new(env, &request.router);
    let path = request.path(env, &storage::get_base_asset(env));
    let deadline = env.ledger().timestamp() + SWAP_DEADLINE_WINDOW;

    let amounts = match router.try_swap_exact_tokens_for_base(
        &env.current_contract_address(),
        &amount_in,
        &request.amount_out_min,
        &path,
        &request.recipient,
        &deadline,
    ) {
        Ok(Ok(amounts)) => amounts,
        _ => return Err(TaxlessArbitrageError::SwapFailed),
    };

    let amount_out = amounts.last().ok_or(TaxlessArbitrageError::SwapFailed)?;
    log!(env, "router paid out", amount_out);
    Ok(amount_out)
}

/// Return anything the router left in custody to the caller
fn refund_unspent(env: &Env, token_client: &token::Client, caller: &Address, custody_before: i128) {
    let contract_address = env.current_contract_address();
    let unspent = token_client.balance(&contract_address) - custody_before;
    if unspent > 0 {
        token_client.transfer(&contract_address, caller, &unspent);
    }
}
