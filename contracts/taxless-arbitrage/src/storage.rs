use soroban_sdk::{contracttype, Address, Env};
use swap_types::{
    INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD,
};

/// Storage keys for the arbitrage contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin allowed to manage the allow-list (Instance storage)
    Owner,
    /// Asset received for every sell, fixed at construction (Instance storage)
    BaseAsset,
    /// Account -> allowed to swap (Persistent storage, absent means false)
    ApprovedSwapper(Address),
    /// Set while a swap is executing (Instance storage)
    Locked,
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Owner ===

pub fn get_owner(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("Not initialized")
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    extend_instance_ttl(env);
}

// === Base asset ===

pub fn get_base_asset(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::BaseAsset)
        .expect("Not initialized")
}

pub fn set_base_asset(env: &Env, base_asset: &Address) {
    env.storage().instance().set(&DataKey::BaseAsset, base_asset);
    extend_instance_ttl(env);
}

// === Approved swappers ===

pub fn is_approved_swapper(env: &Env, account: &Address) -> bool {
    let key = DataKey::ApprovedSwapper(account.clone());
    let approved = env.storage().persistent().get(&key).unwrap_or(false);
    if approved {
        extend_persistent_ttl(env, &key);
    }
    approved
}

pub fn set_approved_swapper(env: &Env, account: &Address, allowed: bool) {
    let key = DataKey::ApprovedSwapper(account.clone());
    if allowed {
        env.storage().persistent().set(&key, &true);
        extend_persistent_ttl(env, &key);
    } else {
        // Remove revoked entry
        env.storage().persistent().remove(&key);
    }
}

// === Execution lock ===

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}
