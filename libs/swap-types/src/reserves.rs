use soroban_sdk::contracttype;

/// Reserves of a token/base-asset pool
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PairReserves {
    /// Units of the listed token held by the pool
    pub token: i128,
    /// Units of the base asset held by the pool
    pub base: i128,
}

impl PairReserves {
    pub fn new(token: i128, base: i128) -> Self {
        Self { token, base }
    }

    pub fn is_empty(&self) -> bool {
        self.token == 0 || self.base == 0
    }
}
