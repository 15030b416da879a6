#![no_std]

mod access;
mod certora_specs;
mod error;
mod events;
mod executor;
pub mod invariants;
mod storage;

pub use error::TaxlessArbitrageError;
pub use executor::SwapRequest;

use soroban_sdk::{contract, contractimpl, Address, Env};
use swap_types::TaxExemptionClient;

/// Sells a taxed token for the base asset on behalf of approved callers.
///
/// The token exempts this contract from its transfer tax, so approved
/// callers route their sells through here instead of transferring to the
/// router directly.
#[contract]
pub struct TaxlessArbitrage;

#[contractimpl]
impl TaxlessArbitrage {
    /// Deploy with the owner and the base asset every sell pays out in.
    /// The base asset cannot be changed afterwards.
    pub fn __constructor(env: Env, owner: Address, base_asset: Address) {
        storage::set_owner(&env, &owner);
        storage::set_base_asset(&env, &base_asset);
    }

    // === Administration ===

    /// Hand the owner role to `new_owner`
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), TaxlessArbitrageError> {
        access::transfer_ownership(&env, &caller, &new_owner)
    }

    /// Allow or disallow `swapper` from calling `taxless_sell`
    pub fn set_approved_swapper(
        env: Env,
        caller: Address,
        swapper: Address,
        allowed: bool,
    ) -> Result<(), TaxlessArbitrageError> {
        access::set_approved_swapper(&env, &caller, &swapper, allowed)
    }

    // === Swap ===

    /// Sell `amount_in` of `token_in` through `router` for the base asset.
    ///
    /// # Arguments
    /// * `caller` - Approved swapper; must sign and have approved this contract
    /// * `router` - Router executing the sell
    /// * `token_in` - Token being sold
    /// * `amount_in` - Amount pulled from `caller`
    /// * `amount_out_min` - Smallest acceptable base asset output
    /// * `recipient` - Receives the base asset
    ///
    /// # Returns
    /// Base asset amount paid to `recipient`
    pub fn taxless_sell(
        env: Env,
        caller: Address,
        router: Address,
        token_in: Address,
        amount_in: i128,
        amount_out_min: i128,
        recipient: Address,
    ) -> Result<i128, TaxlessArbitrageError> {
        let request = SwapRequest {
            router,
            token_in,
            amount_in,
            amount_out_min,
            recipient,
        };
        executor::execute_taxless_sell(&env, &caller, &request)
    }

    // === View Functions ===

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn is_owner(env: Env, account: Address) -> bool {
        access::is_owner(&env, &account)
    }

    pub fn is_approved(env: Env, account: Address) -> bool {
        access::is_approved(&env, &account)
    }

    pub fn base_asset(env: Env) -> Address {
        storage::get_base_asset(&env)
    }

    /// Whether `token` currently exempts this contract from its transfer tax
    pub fn is_tax_exempt(env: Env, token: Address) -> bool {
        TaxExemptionClient::new(&env, &token).is_tax_exempt(&env.current_contract_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Env};

    fn setup(env: &Env) -> (Address, Address, TaxlessArbitrageClient<'_>) {
        let owner = Address::generate(env);
        let base_asset = Address::generate(env);
        let contract_id = env.register(TaxlessArbitrage, (owner.clone(), base_asset.clone()));
        (owner, base_asset, TaxlessArbitrageClient::new(env, &contract_id))
    }

    // === Deployment Tests ===

    #[test]
    fn test_constructor_sets_owner_and_base_asset() {
        let env = Env::default();
        let (owner, base_asset, client) = setup(&env);

        assert_eq!(client.owner(), owner);
        assert_eq!(client.base_asset(), base_asset);
        assert!(client.is_owner(&owner));
        assert!(!client.is_owner(&Address::generate(&env)));
    }

    #[test]
    fn test_owner_not_implicitly_approved() {
        let env = Env::default();
        let (owner, _, client) = setup(&env);

        assert!(client.is_owner(&owner));
        assert!(!client.is_approved(&owner));
    }

    // === Allow-list Tests ===

    #[test]
    fn test_set_approved_swapper() {
        let env = Env::default();
        env.mock_all_auths();
        let (owner, _, client) = setup(&env);

        let swapper = Address::generate(&env);
        assert!(!client.is_approved(&swapper));

        client.set_approved_swapper(&owner, &swapper, &true);
        assert!(client.is_approved(&swapper));

        client.set_approved_swapper(&owner, &swapper, &false);
        assert!(!client.is_approved(&swapper));
    }

    #[test]
    fn test_set_approved_swapper_idempotent() {
        let env = Env::default();
        env.mock_all_auths();
        let (owner, _, client) = setup(&env);

        let swapper = Address::generate(&env);
        client.set_approved_swapper(&owner, &swapper, &true);
        client.set_approved_swapper(&owner, &swapper, &true);
        assert!(client.is_approved(&swapper));

        // A single revoke undoes any number of approvals
        client.set_approved_swapper(&owner, &swapper, &false);
        assert!(!client.is_approved(&swapper));

        client.set_approved_swapper(&owner, &swapper, &false);
        assert!(!client.is_approved(&swapper));
    }

    #[test]
    fn test_approvals_are_independent() {
        let env = Env::default();
        env.mock_all_auths();
        let (owner, _, client) = setup(&env);

        let a = Address::generate(&env);
        let b = Address::generate(&env);
        client.set_approved_swapper(&owner, &a, &true);

        assert!(client.is_approved(&a));
        assert!(!client.is_approved(&b));
    }

    #[test]
    fn test_non_owner_cannot_set_swapper() {
        let env = Env::default();
        env.mock_all_auths();
        let (_, _, client) = setup(&env);

        let intruder = Address::generate(&env);
        let result = client.try_set_approved_swapper(&intruder, &intruder, &true);

        assert_eq!(result, Err(Ok(TaxlessArbitrageError::Unauthorized)));
        assert!(!client.is_approved(&intruder));
    }

    #[test]
    fn test_set_swapper_requires_signature() {
        let env = Env::default();
        let (owner, _, client) = setup(&env);

        // No auths mocked: the owner has not signed
        let swapper = Address::generate(&env);
        assert!(client.try_set_approved_swapper(&owner, &swapper, &true).is_err());
        assert!(!client.is_approved(&swapper));
    }

    // === Ownership Tests ===

    #[test]
    fn test_transfer_ownership() {
        let env = Env::default();
        env.mock_all_auths();
        let (owner, _, client) = setup(&env);

        let new_owner = Address::generate(&env);
        client.transfer_ownership(&owner, &new_owner);

        assert_eq!(client.owner(), new_owner);
        assert!(!client.is_owner(&owner));

        // Admin rights moved with the role
        let swapper = Address::generate(&env);
        assert_eq!(
            client.try_set_approved_swapper(&owner, &swapper, &true),
            Err(Ok(TaxlessArbitrageError::Unauthorized))
        );
        client.set_approved_swapper(&new_owner, &swapper, &true);
        assert!(client.is_approved(&swapper));
    }

    #[test]
    fn test_non_owner_cannot_transfer_ownership() {
        let env = Env::default();
        env.mock_all_auths();
        let (owner, _, client) = setup(&env);

        let intruder = Address::generate(&env);
        let result = client.try_transfer_ownership(&intruder, &intruder);

        assert_eq!(result, Err(Ok(TaxlessArbitrageError::Unauthorized)));
        assert_eq!(client.owner(), owner);
    }

    // === Permission Tests ===

    #[test]
    fn test_unapproved_caller_denied_before_any_external_call() {
        let env = Env::default();
        env.mock_all_auths();
        let (_, _, client) = setup(&env);

        // Router and token are not deployed: reaching either would fail differently
        let caller = Address::generate(&env);
        let router = Address::generate(&env);
        let token = Address::generate(&env);

        let result = client.try_taxless_sell(&caller, &router, &token, &1_000, &0, &caller);
        assert_eq!(result, Err(Ok(TaxlessArbitrageError::AccessDenied)));
    }

    #[test]
    fn test_owner_must_approve_itself_to_swap() {
        let env = Env::default();
        env.mock_all_auths();
        let (owner, _, client) = setup(&env);

        let router = Address::generate(&env);
        let token = Address::generate(&env);

        let result = client.try_taxless_sell(&owner, &router, &token, &1_000, &0, &owner);
        assert_eq!(result, Err(Ok(TaxlessArbitrageError::AccessDenied)));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let env = Env::default();
        env.mock_all_auths();
        let (owner, _, client) = setup(&env);

        let swapper = Address::generate(&env);
        client.set_approved_swapper(&owner, &swapper, &true);

        let router = Address::generate(&env);
        let token = Address::generate(&env);

        assert_eq!(
            client.try_taxless_sell(&swapper, &router, &token, &0, &0, &swapper),
            Err(Ok(TaxlessArbitrageError::InvalidAmount))
        );
        assert_eq!(
            client.try_taxless_sell(&swapper, &router, &token, &-5, &0, &swapper),
            Err(Ok(TaxlessArbitrageError::InvalidAmount))
        );
        assert_eq!(
            client.try_taxless_sell(&swapper, &router, &token, &1_000, &-1, &swapper),
            Err(Ok(TaxlessArbitrageError::InvalidAmount))
        );
    }
}
