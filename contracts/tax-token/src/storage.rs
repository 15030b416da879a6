use soroban_sdk::{contracttype, Address, Env, String};
use swap_types::{
    INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD,
};

/// Storage keys for the token contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner and tax collector (Instance storage)
    Owner,
    /// Name, symbol, decimals (Instance storage)
    Metadata,
    /// Tax switch and rate (Instance storage)
    TaxConfig,
    /// Account -> balance (Persistent storage)
    Balance(Address),
    /// (from, spender) -> allowance (Persistent storage)
    Allowance(AllowanceKey),
    /// Account -> exempt from transfer tax (Persistent storage)
    TaxExempt(Address),
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Default)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/// Tax applied to transfers between non-exempt accounts
#[contracttype]
#[derive(Clone, Debug)]
pub struct TaxConfig {
    pub active: bool,
    pub bps: u32,
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

// === Instance ===

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

pub fn get_metadata(env: &Env) -> TokenMetadata {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .expect("Not initialized")
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
    extend_instance_ttl(env);
}

pub fn get_tax_config(env: &Env) -> TaxConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::TaxConfig)
        .expect("Not initialized")
}

pub fn set_tax_config(env: &Env, config: &TaxConfig) {
    env.storage().instance().set(&DataKey::TaxConfig, config);
    extend_instance_ttl(env);
}

// === Balances ===

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}

// === Allowances ===

/// Live allowance; expired approvals read as zero
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    let value: AllowanceValue = env.storage().persistent().get(&key).unwrap_or_default();
    if value.expiration_ledger < env.ledger().sequence() {
        AllowanceValue {
            amount: 0,
            expiration_ledger: value.expiration_ledger,
        }
    } else {
        value
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        panic!("Invalid expiration ledger");
    }

    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(
            &key,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );
        extend_persistent_ttl(env, &key);
    }
}

pub fn spend_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        panic!("Insufficient allowance");
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }
}

// === Tax exemption ===

pub fn is_tax_exempt(env: &Env, account: &Address) -> bool {
    let key = DataKey::TaxExempt(account.clone());
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_tax_exempt(env: &Env, account: &Address, exempt: bool) {
    let key = DataKey::TaxExempt(account.clone());
    if exempt {
        env.storage().persistent().set(&key, &true);
        extend_persistent_ttl(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}
