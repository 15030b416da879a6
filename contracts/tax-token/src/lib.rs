#![no_std]

mod storage;

use amm_math::{split_taxed, MAX_TAX_BPS};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};
use storage::{
    extend_instance_ttl, get_metadata, get_owner, get_tax_config, read_allowance, read_balance,
    set_metadata, set_owner, set_tax_config, spend_allowance, write_allowance, write_balance,
    TaxConfig, TokenMetadata,
};
use swap_types::TaxExemptionInterface;

/// Token that withholds a tax on transfers between non-exempt accounts.
///
/// The tax is credited to the owner. Used as the taxed asset sold through
/// the taxless arbitrage contract.
#[contract]
pub struct TaxToken;

#[contractimpl]
impl TaxToken {
    /// Deploy the token and mint `initial_supply` to `owner`.
    /// The owner collects the tax and is exempt from the start; tax starts inactive.
    pub fn __constructor(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        decimals: u32,
        initial_supply: i128,
        tax_bps: u32,
    ) {
        if initial_supply < 0 {
            panic!("Negative amount");
        }
        if tax_bps > MAX_TAX_BPS {
            panic!("Invalid tax rate");
        }

        set_owner(&env, &owner);
        set_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        set_tax_config(
            &env,
            &TaxConfig {
                active: false,
                bps: tax_bps,
            },
        );
        storage::set_tax_exempt(&env, &owner, true);
        write_balance(&env, &owner, initial_supply);
    }

    // === Token interface ===

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(amount);

        write_allowance(&env, &from, &spender, amount, expiration_ledger);
        extend_instance_ttl(&env);

        env.events().publish(
            (Symbol::new(&env, "approve"), from, spender),
            (amount, expiration_ledger),
        );
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        extend_instance_ttl(&env);
        read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(amount);
        move_balance(&env, &from, &to, amount);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(amount);
        spend_allowance(&env, &from, &spender, amount);
        move_balance(&env, &from, &to, amount);
    }

    pub fn decimals(env: Env) -> u32 {
        get_metadata(&env).decimals
    }

    pub fn name(env: Env) -> String {
        get_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        get_metadata(&env).symbol
    }

    // === Tax administration ===

    /// Add or remove an account from the tax exemption list
    pub fn set_tax_exempt(env: Env, account: Address, exempt: bool) {
        get_owner(&env).require_auth();

        storage::set_tax_exempt(&env, &account, exempt);

        env.events().publish(
            (Symbol::new(&env, "tax_exempt_set"), account),
            exempt,
        );
    }

    /// Turn transfer tax collection on or off
    pub fn set_tax_active(env: Env, active: bool) {
        get_owner(&env).require_auth();

        let mut config = get_tax_config(&env);
        config.active = active;
        set_tax_config(&env, &config);

        env.events()
            .publish((Symbol::new(&env, "tax_active_set"),), active);
    }

    /// Update the tax rate (basis points)
    pub fn set_tax_bps(env: Env, tax_bps: u32) {
        get_owner(&env).require_auth();

        if tax_bps > MAX_TAX_BPS {
            panic!("Invalid tax rate");
        }

        let mut config = get_tax_config(&env);
        config.bps = tax_bps;
        set_tax_config(&env, &config);
    }

    // === View Functions ===

    pub fn owner(env: Env) -> Address {
        get_owner(&env)
    }

    pub fn is_tax_active(env: Env) -> bool {
        get_tax_config(&env).active
    }

    pub fn tax_bps(env: Env) -> u32 {
        get_tax_config(&env).bps
    }
}

#[contractimpl]
impl TaxExemptionInterface for TaxToken {
    fn is_tax_exempt(env: Env, account: Address) -> bool {
        storage::is_tax_exempt(&env, &account)
    }
}

fn check_nonnegative_amount(amount: i128) {
    if amount < 0 {
        panic!("Negative amount");
    }
}

/// Move `amount` out of `from`; `to` receives it minus any tax, the owner gets the tax
fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) {
    let from_balance = read_balance(env, from);
    if from_balance < amount {
        panic!("Insufficient balance");
    }

    let config = get_tax_config(env);
    let taxed = config.active
        && !storage::is_tax_exempt(env, from)
        && !storage::is_tax_exempt(env, to);
    let (received, tax) = if taxed {
        split_taxed(amount, config.bps)
    } else {
        (amount, 0)
    };

    write_balance(env, from, from_balance - amount);
    write_balance(env, to, read_balance(env, to) + received);

    if tax > 0 {
        let owner = get_owner(env);
        write_balance(env, &owner, read_balance(env, &owner) + tax);
    }

    extend_instance_ttl(env);

    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        (received, tax),
    );
}
