#![no_std]

use amm_math::get_amount_out;
use soroban_sdk::{contract, contractimpl, contracttype, token, vec, Address, Env, Symbol, Vec};
use swap_types::{
    PairReserves, SwapRouterInterface, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD,
};

/// Constant-product router holding one token/base-asset pool per listed token
#[contract]
pub struct PairRouter;

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Asset every pool is quoted against (Instance storage)
    BaseAsset,
    /// Token -> pool reserves (Persistent storage)
    Reserves(Address),
}

#[contractimpl]
impl PairRouter {
    /// Deploy the router bound to a base asset
    pub fn __constructor(env: Env, base_asset: Address) {
        env.storage().instance().set(&DataKey::BaseAsset, &base_asset);
        extend_instance_ttl(&env);
    }

    /// Deposit liquidity into the `token`/base pool, creating it on first deposit.
    /// Reserves track what actually arrived, so taxed deposits count net of tax.
    ///
    /// # Returns
    /// Pool reserves after the deposit
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        token: Address,
        amount_token: i128,
        amount_base: i128,
        deadline: u64,
    ) -> PairReserves {
        provider.require_auth();
        check_deadline(&env, deadline);

        if amount_token <= 0 || amount_base <= 0 {
            panic!("Insufficient amount");
        }

        let base_asset = get_base_asset(&env);
        if token == base_asset {
            panic!("Identical tokens");
        }

        let contract_address = env.current_contract_address();
        let token_client = token::Client::new(&env, &token);
        let token_before = token_client.balance(&contract_address);
        token_client.transfer(&provider, &contract_address, &amount_token);
        let token_received = token_client.balance(&contract_address) - token_before;

        token::Client::new(&env, &base_asset).transfer(&provider, &contract_address, &amount_base);

        let mut reserves = get_reserves(&env, &token);
        reserves.token += token_received;
        reserves.base += amount_base;
        set_reserves(&env, &token, &reserves);

        env.events().publish(
            (Symbol::new(&env, "liquidity_added"), token),
            (provider, token_received, amount_base),
        );

        extend_instance_ttl(&env);
        reserves
    }

    /// Get pool reserves for a token (zero if no pool exists)
    pub fn get_reserves(env: Env, token: Address) -> PairReserves {
        get_reserves(&env, &token)
    }

    /// Quote a sell along `path` without executing it.
    /// Does not account for any tax the input token would withhold.
    pub fn get_amounts_out(env: Env, amount_in: i128, path: Vec<Address>) -> Vec<i128> {
        let token_in = validate_path(&env, &path);
        let reserves = get_reserves(&env, &token_in);
        if reserves.is_empty() {
            panic!("Pool not found");
        }

        let amount_out = get_amount_out(&env, amount_in, reserves.token, reserves.base);
        vec![&env, amount_in, amount_out]
    }
}

#[contractimpl]
impl SwapRouterInterface for PairRouter {
    /// Sell an exact amount of `path[0]` for the base asset, paying `to`.
    /// Output is priced on the amount the pool actually received.
    fn swap_exact_tokens_for_base(
        env: Env,
        sender: Address,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<i128> {
        sender.require_auth();
        check_deadline(&env, deadline);

        if amount_in <= 0 {
            panic!("Insufficient input amount");
        }

        let token_in = validate_path(&env, &path);
        let mut reserves = get_reserves(&env, &token_in);
        if reserves.is_empty() {
            panic!("Pool not found");
        }

        // Pull input; the router spends the allowance granted by the sender
        let contract_address = env.current_contract_address();
        let token_client = token::Client::new(&env, &token_in);
        let balance_before = token_client.balance(&contract_address);
        token_client.transfer_from(&contract_address, &sender, &contract_address, &amount_in);
        let received = token_client.balance(&contract_address) - balance_before;

        let amount_out = get_amount_out(&env, received, reserves.token, reserves.base);
        if amount_out < amount_out_min {
            panic!("Insufficient output amount");
        }

        token::Client::new(&env, &get_base_asset(&env)).transfer(
            &contract_address,
            &to,
            &amount_out,
        );

        reserves.token += received;
        reserves.base -= amount_out;
        set_reserves(&env, &token_in, &reserves);

        env.events().publish(
            (Symbol::new(&env, "swap"), token_in),
            (sender, to, received, amount_out),
        );

        extend_instance_ttl(&env);
        vec![&env, amount_in, amount_out]
    }

    fn base_asset(env: Env) -> Address {
        get_base_asset(&env)
    }
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn get_base_asset(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::BaseAsset)
        .expect("Not initialized")
}

fn get_reserves(env: &Env, token: &Address) -> PairReserves {
    env.storage()
        .persistent()
        .get(&DataKey::Reserves(token.clone()))
        .unwrap_or_default()
}

fn set_reserves(env: &Env, token: &Address, reserves: &PairReserves) {
    let key = DataKey::Reserves(token.clone());
    env.storage().persistent().set(&key, reserves);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

fn check_deadline(env: &Env, deadline: u64) {
    let current_time = env.ledger().timestamp();
    if current_time > deadline {
        panic!("Transaction expired");
    }
}

/// Single-hop path ending in the base asset; returns the input token
fn validate_path(env: &Env, path: &Vec<Address>) -> Address {
    if path.len() != 2 {
        panic!("Invalid path");
    }

    let token_in = path.get(0).unwrap();
    if path.get(1).unwrap() != get_base_asset(env) || token_in == get_base_asset(env) {
        panic!("Invalid path");
    }

    token_in
}
