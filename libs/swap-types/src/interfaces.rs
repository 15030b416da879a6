use soroban_sdk::{contractclient, Address, Env, Vec};

/// Router surface consumed by the swap executor.
///
/// `swap_exact_tokens_for_base` sells exactly `amount_in` of `path[0]` for the
/// base asset at the end of `path` and pays the output straight to `to`.
/// Implementations must fail when the output would be below `amount_out_min`
/// or when the ledger timestamp is past `deadline`.
///
/// Returns the amounts along the path: `[amount_in, amount_out]`.
#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouterInterface {
    fn swap_exact_tokens_for_base(
        env: Env,
        sender: Address,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<i128>;

    fn base_asset(env: Env) -> Address;
}

/// Fee-exemption registry exposed by tax-bearing tokens
#[contractclient(name = "TaxExemptionClient")]
pub trait TaxExemptionInterface {
    fn is_tax_exempt(env: Env, account: Address) -> bool;
}
