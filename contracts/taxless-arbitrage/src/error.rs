use soroban_sdk::contracterror;

/// Failure reasons surfaced to callers of the arbitrage contract.
/// Any error aborts the whole invocation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TaxlessArbitrageError {
    /// Administrative call from an account other than the owner
    Unauthorized = 1,
    /// Swap requested by an account outside the allow-list
    AccessDenied = 2,
    /// Input tokens could not be pulled from the caller
    TransferFailed = 3,
    /// Router rejected the swap (slippage, deadline, path or pool)
    SwapFailed = 4,
    /// Non-positive input or negative minimum output
    InvalidAmount = 5,
    /// A swap is already executing
    Reentrant = 6,
}
