use crate::executor::SwapRequest;
use soroban_sdk::{Address, Env, Symbol};

pub fn swapper_set(env: &Env, swapper: &Address, allowed: bool) {
    env.events().publish(
        (Symbol::new(env, "swapper_set"), swapper.clone()),
        allowed,
    );
}

pub fn owner_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "owner_transferred"),),
        (previous_owner.clone(), new_owner.clone()),
    );
}

/// Emitted once per completed sell
pub fn taxless_sell(
    env: &Env,
    caller: &Address,
    request: &SwapRequest,
    delivered: i128,
    amount_out: i128,
) {
    env.events().publish(
        (
            Symbol::new(env, "taxless_sell"),
            caller.clone(),
            request.token_in.clone(),
        ),
        (
            request.router.clone(),
            request.recipient.clone(),
            request.amount_in,
            delivered,
            amount_out,
        ),
    );
}
